//! Threat patterns and score constants for static evaluation.
//!
//! A scanned line is a byte string over `{EMPTY, OCCUPIED}`. Three
//! templates, parameterized by the win threshold `k`, mark a line as a
//! near-certain threat:
//!
//! ```text
//! open run:    0 1{k-1} 0
//! split:       1 0 1{k-2} 0 1
//! split run:   1{k-2} 0 1 0 1{k-2}
//! ```
//!
//! For `k = 4` these are `01110`, `101101` and `1101011`.

/// Empty cell in a scanned line.
pub const EMPTY: u8 = b'0';

/// Cell held by the evaluated piece in a scanned line.
pub const OCCUPIED: u8 = b'1';

/// Score of a terminal win (negated for a loss).
pub const WIN_SCORE: i32 = i32::MAX;

/// Score of a line containing a threat pattern.
pub const THREAT_SCORE: i32 = 1000;

/// Score of a nearly complete line when its owner moves next.
pub const TEMPO_SCORE: i32 = THREAT_SCORE / 2;

/// The three threat templates for one win threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreatPatterns {
    templates: [Vec<u8>; 3],
}

impl ThreatPatterns {
    /// Build the templates for `win_threshold` (greater than 2).
    #[must_use]
    pub fn new(win_threshold: usize) -> Self {
        assert!(win_threshold > 2, "win threshold must be greater than 2");
        let run = |n: usize| std::iter::repeat(OCCUPIED).take(n);

        let open: Vec<u8> = std::iter::once(EMPTY)
            .chain(run(win_threshold - 1))
            .chain(std::iter::once(EMPTY))
            .collect();

        let split: Vec<u8> = [OCCUPIED, EMPTY]
            .into_iter()
            .chain(run(win_threshold - 2))
            .chain([EMPTY, OCCUPIED])
            .collect();

        let split_run: Vec<u8> = run(win_threshold - 2)
            .chain([EMPTY, OCCUPIED, EMPTY])
            .chain(run(win_threshold - 2))
            .collect();

        Self {
            templates: [open, split, split_run],
        }
    }

    /// The templates, in match order.
    #[must_use]
    pub fn templates(&self) -> &[Vec<u8>; 3] {
        &self.templates
    }

    /// Check whether any template occurs in `line`.
    #[must_use]
    pub fn matches(&self, line: &[u8]) -> bool {
        self.templates.iter().any(|template| {
            line.len() >= template.len() && line.windows(template.len()).any(|w| w == template)
        })
    }
}

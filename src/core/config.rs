//! Board configuration types.
//!
//! Callers configure a board at construction by providing:
//! - the piece roster (turn order = roster order)
//! - the extent of every axis (axis 0 is the gravity axis)
//! - the number of connected pieces needed to win
//!
//! `Variant` provides the classic presets and `Difficulty` the usual
//! search depths for AI players.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::piece::PieceId;

/// Number of connected pieces in classic Connect Four.
pub const DEFAULT_WIN_THRESHOLD: usize = 4;

/// Shallowest search depth offered to AI players.
pub const MIN_AI_DEPTH: u8 = 1;

/// Deepest search depth offered to AI players.
pub const MAX_AI_DEPTH: u8 = 11;

/// Most axes a board may have. Win detection walks `(3^d - 1) / 2`
/// directions, which grows past any useful size beyond this.
pub const MAX_DIMENSIONS: usize = 10;

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Raw piece identifiers in turn order. Must be unique and non-zero.
    pub pieces: Vec<u8>,

    /// Extent of each axis. Axis 0 is the drop axis.
    pub dimensions: Vec<usize>,

    /// Connected pieces needed to win.
    pub win_threshold: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Variant::Classic.config()
    }
}

impl BoardConfig {
    /// Create a configuration with pieces `1` and `2`.
    pub fn new(dimensions: impl Into<Vec<usize>>, win_threshold: usize) -> Self {
        Self {
            pieces: vec![1, 2],
            dimensions: dimensions.into(),
            win_threshold,
        }
    }

    /// Replace the piece roster.
    #[must_use]
    pub fn with_pieces(mut self, pieces: impl Into<Vec<u8>>) -> Self {
        self.pieces = pieces.into();
        self
    }

    /// Replace the axis extents.
    #[must_use]
    pub fn with_dimensions(mut self, dimensions: impl Into<Vec<usize>>) -> Self {
        self.dimensions = dimensions.into();
        self
    }

    /// Replace the win threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, win_threshold: usize) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Check that this configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pieces.len() < 2 {
            return Err(ConfigError::TooFewPieces(self.pieces.len()));
        }
        for (i, &piece) in self.pieces.iter().enumerate() {
            if piece == 0 {
                return Err(ConfigError::EmptyPieceId);
            }
            if self.pieces[..i].contains(&piece) {
                return Err(ConfigError::DuplicatePiece(piece));
            }
        }
        if self.dimensions.len() < 2 {
            return Err(ConfigError::TooFewDimensions(self.dimensions.len()));
        }
        if self.dimensions.len() > MAX_DIMENSIONS {
            return Err(ConfigError::TooManyDimensions(self.dimensions.len()));
        }
        if let Some(axis) = self.dimensions.iter().position(|&e| e == 0) {
            return Err(ConfigError::ZeroExtent { axis });
        }
        if self.win_threshold <= 2 {
            return Err(ConfigError::ThresholdTooSmall(self.win_threshold));
        }
        Ok(())
    }

    /// The roster as typed piece IDs. Assumes a validated config.
    #[must_use]
    pub fn roster(&self) -> Vec<PieceId> {
        self.pieces.iter().map(|&p| PieceId::new(p)).collect()
    }

    /// Total number of cells.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.dimensions.iter().product()
    }
}

/// Preset board variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// 6 rows by 7 columns, connect 4.
    Classic,
    /// 6 rows by 9 columns, connect 5.
    FiveInARow,
    /// 3 rows by 6 columns, connect 3.
    ConnectThree,
    /// 7 rows by 10 columns, connect 4.
    TenBySeven,
    /// 8 rows by 8 columns, connect 4.
    EightByEight,
}

impl Variant {
    /// All presets in menu order.
    pub const ALL: [Variant; 5] = [
        Variant::Classic,
        Variant::ConnectThree,
        Variant::FiveInARow,
        Variant::TenBySeven,
        Variant::EightByEight,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Classic => "6-by-7 Connect Four",
            Variant::FiveInARow => "Five-in-a-Row",
            Variant::ConnectThree => "3-by-6 Connect Three",
            Variant::TenBySeven => "7-by-10 Connect Four",
            Variant::EightByEight => "8-by-8 Connect Four",
        }
    }

    /// Board configuration for this preset, with pieces `1` and `2`.
    #[must_use]
    pub fn config(self) -> BoardConfig {
        match self {
            Variant::Classic => BoardConfig::new([6, 7], DEFAULT_WIN_THRESHOLD),
            Variant::FiveInARow => BoardConfig::new([6, 9], DEFAULT_WIN_THRESHOLD + 1),
            Variant::ConnectThree => BoardConfig::new([3, 6], DEFAULT_WIN_THRESHOLD - 1),
            Variant::TenBySeven => BoardConfig::new([7, 10], DEFAULT_WIN_THRESHOLD),
            Variant::EightByEight => BoardConfig::new([8, 8], DEFAULT_WIN_THRESHOLD),
        }
    }

    /// Columns filled before play starts, in drop order.
    ///
    /// Five-in-a-Row opens with both edge columns filled by alternating
    /// pieces: the first column up to its second-to-top row, the whole
    /// last column, then the top of the first column. Piece 1 moves next.
    #[must_use]
    pub fn opening(self) -> Vec<usize> {
        match self {
            Variant::FiveInARow => {
                let config = self.config();
                let (rows, last) = (config.dimensions[0], config.dimensions[1] - 1);
                std::iter::repeat(0)
                    .take(rows - 1)
                    .chain(std::iter::repeat(last).take(rows))
                    .chain(std::iter::once(0))
                    .collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Named AI strength levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Hard,
}

impl Difficulty {
    /// All levels, weakest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Hard,
    ];

    /// Search depth for this level.
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Beginner => 2,
            Difficulty::Intermediate => 4,
            Difficulty::Advanced => 6,
            Difficulty::Hard => 8,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Hard => "Hard Level",
        }
    }
}

/// A roster entry with an optional AI search depth.
///
/// `depth: None` marks a human (externally controlled) piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub piece: PieceId,
    pub depth: Option<u8>,
}

impl Participant {
    /// An externally controlled piece.
    #[must_use]
    pub const fn human(piece: PieceId) -> Self {
        Self { piece, depth: None }
    }

    /// An AI-controlled piece searching to `depth`.
    #[must_use]
    pub const fn ai(piece: PieceId, depth: u8) -> Self {
        Self {
            piece,
            depth: Some(depth),
        }
    }
}

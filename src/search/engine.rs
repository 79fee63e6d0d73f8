//! The search engine: a tracked board plus AI profile and move computation.

use std::time::{Duration, Instant};

use log::debug;
use rustc_hash::FxHashMap;

use crate::core::{BoardConfig, ConfigError, Coord, GameRng, Participant, PieceId, Variant};
use crate::rules::{AiPlayer, GameBoard, Status};

use super::alphabeta::AlphaBeta;
use super::config::SearchConfig;
use super::eval::Evaluator;
use super::stats::SearchStats;
use super::tracked::TrackedBoard;

/// Board engine extended with AI-controlled pieces.
///
/// Pieces with an installed depth are AI-controlled; every other piece is
/// driven from outside through `apply_move`.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use connectx::core::{BoardConfig, GameRng, Participant, PieceId};
/// use connectx::rules::{AiPlayer, GameBoard};
/// use connectx::search::SearchEngine;
///
/// let participants = [
///     Participant::human(PieceId::new(1)),
///     Participant::ai(PieceId::new(2), 4),
/// ];
/// let mut engine = SearchEngine::new(BoardConfig::default())
///     .with_participants(&participants)
///     .with_rng(GameRng::new(7));
///
/// let human = engine.legal_moves()[0].clone();
/// engine.apply_move(&human);
/// assert!(engine.is_ai_turn());
///
/// let reply = engine.play_ai_move(Duration::from_millis(200));
/// assert_eq!(engine.last_move(), Some(&reply));
/// ```
#[derive(Clone, Debug)]
pub struct SearchEngine {
    tracked: TrackedBoard,
    profile: FxHashMap<PieceId, u8>,
    config: SearchConfig,
    rng: Option<GameRng>,
    stats: SearchStats,
}

impl SearchEngine {
    /// Create an engine with every piece externally controlled.
    /// Panics if the configuration is invalid.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self::from_tracked(TrackedBoard::new(config))
    }

    /// Create an engine, rejecting invalid configurations.
    pub fn try_new(config: BoardConfig) -> Result<Self, ConfigError> {
        TrackedBoard::try_new(config).map(Self::from_tracked)
    }

    /// Create an engine for a preset, with its opening already played.
    #[must_use]
    pub fn from_variant(variant: Variant) -> Self {
        Self::from_tracked(TrackedBoard::from_variant(variant))
    }

    fn from_tracked(tracked: TrackedBoard) -> Self {
        Self {
            tracked,
            profile: FxHashMap::default(),
            config: SearchConfig::default(),
            rng: None,
            stats: SearchStats::default(),
        }
    }

    /// Install the AI depths of a set of participants.
    #[must_use]
    pub fn with_participants(mut self, participants: &[Participant]) -> Self {
        for participant in participants {
            self.set_ai_depth(participant.piece, participant.depth.unwrap_or(0));
        }
        self
    }

    /// Use a custom search configuration.
    #[must_use]
    pub fn with_search_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific random source for opening moves.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = Some(rng);
        self
    }

    // === Queries ===

    /// The tracked board.
    #[must_use]
    pub fn tracked(&self) -> &TrackedBoard {
        &self.tracked
    }

    /// The search configuration.
    #[must_use]
    pub fn search_config(&self) -> &SearchConfig {
        &self.config
    }

    /// Coordinates `piece` occupies, in placement order.
    #[must_use]
    pub fn placements(&self, piece: PieceId) -> &[Coord] {
        self.tracked.placements(piece)
    }

    /// Statistics from the last `compute_ai_move`.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Leaf evaluations performed by the last `compute_ai_move`.
    #[must_use]
    pub fn num_evaluations(&self) -> u64 {
        self.stats.evaluations
    }

    /// Wall-clock time spent by the last `compute_ai_move`.
    #[must_use]
    pub fn thinking_time(&self) -> Duration {
        self.stats.thinking_time()
    }

    /// Static evaluation of the current position for `maximizing`.
    #[must_use]
    pub fn evaluate(&self, maximizing: PieceId) -> i32 {
        Evaluator::new(&self.tracked).evaluate(&self.tracked, maximizing)
    }

    /// Compute an AI move with the configured time budget.
    pub fn think(&mut self) -> Coord {
        self.compute_ai_move(self.config.time_budget())
    }

    fn rng(&mut self) -> &mut GameRng {
        let seed = self.config.seed;
        self.rng
            .get_or_insert_with(|| seed.map_or_else(GameRng::from_entropy, GameRng::new))
    }
}

impl GameBoard for SearchEngine {
    fn apply_move(&mut self, mv: &[usize]) {
        self.tracked.apply_move(mv);
    }

    fn undo(&mut self) {
        self.tracked.undo();
    }

    fn reset(&mut self) {
        self.tracked.reset();
    }

    fn status(&self) -> Status {
        self.tracked.status()
    }

    fn legal_moves(&self) -> Vec<Coord> {
        self.tracked.legal_moves()
    }

    fn next_piece(&self) -> PieceId {
        self.tracked.next_piece()
    }

    fn last_mover(&self) -> Option<PieceId> {
        self.tracked.last_mover()
    }

    fn last_move(&self) -> Option<&Coord> {
        self.tracked.last_move()
    }

    fn winning_coords(&self) -> &[Coord] {
        self.tracked.winning_coords()
    }

    fn move_count(&self) -> usize {
        self.tracked.move_count()
    }

    fn dimensions(&self) -> &[usize] {
        self.tracked.dimensions()
    }
}

impl AiPlayer for SearchEngine {
    fn set_ai_depth(&mut self, piece: PieceId, depth: u8) {
        assert!(
            self.tracked.board().pieces().contains(&piece),
            "{piece} is not on the roster"
        );
        if depth == 0 {
            self.profile.remove(&piece);
        } else {
            self.profile.insert(piece, depth);
        }
    }

    fn ai_depth(&self, piece: PieceId) -> Option<u8> {
        self.profile.get(&piece).copied()
    }

    fn compute_ai_move(&mut self, budget: Duration) -> Coord {
        let piece = self.tracked.next_piece();
        let depth = self
            .ai_depth(piece)
            .unwrap_or_else(|| panic!("{piece} is not AI-controlled"));
        assert!(
            self.tracked.status() == Status::OnGoing,
            "the game must be ongoing to compute a move"
        );

        let start = Instant::now();
        let candidates = self.tracked.legal_moves();
        self.stats.reset();

        let random_opening = self.tracked.move_count() < self.config.random_opening_plies
            && depth < self.config.random_opening_max_depth;

        let index = if random_opening {
            let index = self.rng().gen_index(candidates.len());
            debug!("{piece} opens at random with {:?}", candidates[index]);
            self.stats.random_opening = true;
            index
        } else {
            let mut copy = self.tracked.clone();
            let mut search = AlphaBeta::new(&copy);
            let result = search.iterative_deepening(&mut copy, depth, budget);

            self.stats.evaluations = search.evaluations();
            self.stats.depth_reached = result.depth;
            self.stats.best_score = Some(result.score);
            // No move beat the worst case: every line loses.
            result.best.unwrap_or(0)
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "{piece} chose {:?} in {:?} ({} evaluations)",
            candidates[index],
            self.thinking_time(),
            self.stats.evaluations
        );
        candidates[index].clone()
    }
}

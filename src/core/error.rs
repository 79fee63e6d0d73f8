//! Configuration errors.
//!
//! Board construction is the only fallible entry point. Everything else
//! in the engine treats a violated precondition as a caller bug and
//! panics.

/// A `BoardConfig` that cannot describe a playable board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least 2 pieces are required, got {0}")]
    TooFewPieces(usize),

    #[error("piece ID 0 is reserved for empty cells")]
    EmptyPieceId,

    #[error("piece ID {0} appears more than once in the roster")]
    DuplicatePiece(u8),

    #[error("at least 2 dimensions are required (a drop axis and a lateral axis), got {0}")]
    TooFewDimensions(usize),

    #[error("at most {max} dimensions are supported, got {0}", max = super::config::MAX_DIMENSIONS)]
    TooManyDimensions(usize),

    #[error("axis {axis} has extent 0")]
    ZeroExtent { axis: usize },

    #[error("win threshold must be greater than 2, got {0}")]
    ThresholdTooSmall(usize),
}

use crate::engine::Position;

/// Errors raised by the solitaire engine.
///
/// Every failure is deterministic: the same call on the same board fails the
/// same way, and a failed call never changes the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolitaireError {
    #[error("invalid arm thickness {0}: must be a positive odd integer")]
    InvalidArmThickness(usize),

    #[error("invalid empty cell position ({row},{col})")]
    InvalidStartPosition { row: usize, col: usize },

    #[error("position ({row},{col}) is beyond the dimensions of the board (size {size})")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("illegal move from {from:?} to {to:?}")]
    IllegalMove { from: Position, to: Position },
}

/// Errors that end an interactive session abnormally.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the game was over")]
    InputExhausted,
}

//! Error types returned by the engine entry points.
//!
//! Every error is detected before a search starts; searches themselves are
//! total over legal input.

use thiserror::Error;

use crate::game_repr::GameOutcome;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Wrong number of cells, or mark counts that break turn alternation.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("invalid move {index}: {reason}")]
    InvalidMove { index: usize, reason: &'static str },

    #[error("no move to search: game is already over ({0:?})")]
    TerminalPosition(GameOutcome),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

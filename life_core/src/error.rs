// error.rs - Error types for board construction and generation evaluation

use std::fmt;
use std::io;

use tokio::task::JoinError;

/// Errors raised while building a board or evaluating a generation
#[derive(Debug)]
pub enum LifeError {
    /// Board configuration rejected by `BoardConfig::validate`
    InvalidConfig(String),
    /// Seed rows that do not describe a `size` x `size` grid of '#' and '.'
    InvalidPattern { row: usize, size: usize, reason: String },
    /// The row coroutine runtime could not be started
    Runtime(io::Error),
    /// A row coroutine panicked or was cancelled
    RowTask(JoinError),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::InvalidConfig(msg) => write!(f, "Invalid board configuration: {}", msg),
            LifeError::InvalidPattern { row, size, reason } => {
                write!(f, "Invalid seed pattern at row {} ({}x{} grid): {}", row, size, size, reason)
            }
            LifeError::Runtime(err) => write!(f, "Failed to start row runtime: {}", err),
            LifeError::RowTask(err) => write!(f, "Row evaluation failed: {}", err),
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LifeError::Runtime(err) => Some(err),
            LifeError::RowTask(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LifeError {
    fn from(err: io::Error) -> Self {
        LifeError::Runtime(err)
    }
}

impl From<JoinError> for LifeError {
    fn from(err: JoinError) -> Self {
        LifeError::RowTask(err)
    }
}

/// Result type alias for board operations
pub type LifeResult<T> = Result<T, LifeError>;

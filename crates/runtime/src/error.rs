//! Errors surfaced by the duel session.

use duel_core::{ErrorSeverity, GameError, GridError};
use thiserror::Error;

use crate::session::Phase;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("cannot {action} while {actual:?}")]
    WrongPhase {
        action: &'static str,
        actual: Phase,
    },

    #[error("terrain has {found} open cell(s); two combatants need two")]
    NoSpawn { found: usize },

    #[error("the duel is over")]
    DuelOver,

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::WrongPhase { .. } | Self::DuelOver => ErrorSeverity::Recoverable,
            Self::NoSpawn { .. } => ErrorSeverity::Internal,
            Self::Grid(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongPhase { .. } => "SESSION_WRONG_PHASE",
            Self::NoSpawn { .. } => "SESSION_NO_SPAWN",
            Self::DuelOver => "SESSION_DUEL_OVER",
            Self::Grid(err) => err.error_code(),
        }
    }
}

use crate::error::{ErrorSeverity, GameError};
use crate::geometry::Position;

/// Rejected grid construction input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid of {width}x{height} is too small; both sides need at least {min} tiles")]
    TooSmall { width: u32, height: u32, min: u32 },

    #[error("layout row {row} has {found} tiles, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("layout border must be solid, found {glyph:?} at {position}")]
    OpenBorder { position: Position, glyph: char },

    #[error("unknown terrain glyph {glyph:?} at {position}")]
    UnknownGlyph { position: Position, glyph: char },
}

impl GameError for GridError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooSmall { .. } => "GRID_TOO_SMALL",
            Self::RaggedRows { .. } => "GRID_RAGGED_ROWS",
            Self::OpenBorder { .. } => "GRID_OPEN_BORDER",
            Self::UnknownGlyph { .. } => "GRID_UNKNOWN_GLYPH",
        }
    }
}

/// Spawn search could not produce two distinct open cells.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("need two open cells to spawn, found {found}")]
    NotEnoughOpenCells { found: usize },
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEnoughOpenCells { .. } => "SPAWN_NOT_ENOUGH_OPEN_CELLS",
        }
    }
}

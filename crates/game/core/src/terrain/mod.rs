//! Terrain model: tile classification, the grid, line tracing and the
//! procedural generator that populates it.

mod error;
pub mod generator;
pub mod grid;
mod tile;
pub mod trace;

pub use error::{GridError, SpawnError};
pub use generator::MapGenerator;
pub use grid::{DEFAULT_SPAWN_MARGIN, TerrainGrid};
pub use tile::{TileFlags, TileKind};

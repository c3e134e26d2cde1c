//! Content loaders for reading duel data from files.

pub mod catalog;
pub mod config;

pub use catalog::{CatalogLoader, WeaponCatalog, WeaponSpec};
pub use config::ConfigLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

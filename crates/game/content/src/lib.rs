//! Data-driven duel content.
//!
//! Loaders turn TOML files into core types:
//! - game configuration ([`ConfigLoader`])
//! - extra weapon profiles ([`CatalogLoader`])
//!
//! Everything loaded here is validated by the core constructors before it
//! reaches a session.

pub mod loaders;

pub use loaders::{CatalogLoader, ConfigLoader, LoadResult, WeaponCatalog, WeaponSpec};

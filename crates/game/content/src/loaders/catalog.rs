//! Weapon catalog loader.
//!
//! ```toml
//! [[weapons]]
//! name = "Derringer"
//! max_range = 4
//! min_accuracy = 0.5
//! damage_min = 15
//! damage_max = 25
//! ```

use std::path::Path;

use anyhow::{Context, ensure};
use duel_core::WeaponProfile;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Raw weapon entry as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeaponSpec {
    pub name: String,
    pub max_range: u32,
    pub min_accuracy: f64,
    pub damage_min: u32,
    pub damage_max: u32,
}

impl TryFrom<WeaponSpec> for WeaponProfile {
    type Error = duel_core::ProfileError;

    fn try_from(spec: WeaponSpec) -> Result<Self, Self::Error> {
        WeaponProfile::new(
            spec.name,
            spec.max_range,
            spec.min_accuracy,
            spec.damage_min,
            spec.damage_max,
        )
    }
}

/// Catalog file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponCatalog {
    #[serde(default)]
    pub weapons: Vec<WeaponSpec>,
}

/// Loader for weapon catalogs from TOML files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads and validates every profile in the file.
    pub fn load(path: &Path) -> LoadResult<Vec<WeaponProfile>> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("invalid weapon catalog {}", path.display()))
    }

    /// Any malformed entry fails the whole catalog; names must be unique
    /// (case-insensitive).
    pub fn parse(content: &str) -> LoadResult<Vec<WeaponProfile>> {
        let catalog: WeaponCatalog =
            toml::from_str(content).context("failed to parse weapon catalog TOML")?;

        let mut profiles: Vec<WeaponProfile> = Vec::with_capacity(catalog.weapons.len());
        for (index, spec) in catalog.weapons.into_iter().enumerate() {
            let profile = WeaponProfile::try_from(spec)
                .with_context(|| format!("weapon entry #{index}"))?;
            ensure!(
                !profiles
                    .iter()
                    .any(|known| known.name().eq_ignore_ascii_case(profile.name())),
                "duplicate weapon name {:?}",
                profile.name()
            );
            profiles.push(profile);
        }
        Ok(profiles)
    }
}

//! File-backed loader tests.

use std::fs;

use duel_content::{CatalogLoader, ConfigLoader};
use duel_core::GameConfig;
use tempfile::TempDir;

#[test]
fn config_file_round_trips_through_the_loader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        map_width = 30
        map_height = 20
        spawn_separation = 8

        [combat]
        miss_overshoot = 3

        [generation]
        building_ruins = { min = 0, max = 0 }
        "#,
    )
    .unwrap();

    let config = ConfigLoader::load(&path).unwrap();
    assert_eq!(config.map_width, 30);
    assert_eq!(config.map_height, 20);
    assert_eq!(config.spawn_separation, 8);
    assert_eq!(config.combat.miss_overshoot, 3);
    assert_eq!(config.generation.building_ruins.max, 0);
    assert_eq!(config.player_max_hp, GameConfig::DEFAULT_MAX_HP);
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = ConfigLoader::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn catalog_file_loads_profiles() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weapons.toml");
    fs::write(
        &path,
        r#"
        [[weapons]]
        name = "Derringer"
        max_range = 4
        min_accuracy = 0.5
        damage_min = 15
        damage_max = 25
        "#,
    )
    .unwrap();

    let profiles = CatalogLoader::load(&path).unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].damage_max(), 25);
}

#[test]
fn invalid_catalog_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weapons.toml");
    fs::write(
        &path,
        "[[weapons]]\nname = \"Bent\"\nmax_range = 5\nmin_accuracy = 0.5\ndamage_min = 9\ndamage_max = 2\n",
    )
    .unwrap();

    let err = CatalogLoader::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("weapons.toml"));
}

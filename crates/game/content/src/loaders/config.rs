//! Game configuration loader.

use std::path::Path;

use anyhow::{Context, ensure};
use duel_core::{GameConfig, TerrainGrid};

use crate::loaders::{LoadResult, read_file};

/// Loader for [`GameConfig`] from TOML files.
///
/// Omitted keys and sections keep their defaults, so an empty file is a
/// valid configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content).context("failed to parse config TOML")?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &GameConfig) -> LoadResult<()> {
        ensure!(
            config.map_width >= TerrainGrid::MIN_SIDE && config.map_height >= TerrainGrid::MIN_SIDE,
            "map {}x{} is smaller than {}x{}",
            config.map_width,
            config.map_height,
            TerrainGrid::MIN_SIDE,
            TerrainGrid::MIN_SIDE
        );
        ensure!(
            config.player_max_hp > 0 && config.enemy_max_hp > 0,
            "combatants need positive max hp"
        );

        let combat = &config.combat;
        ensure!(
            0.0 <= combat.min_hit_chance
                && combat.min_hit_chance <= combat.max_hit_chance
                && combat.max_hit_chance <= 1.0,
            "hit chance window [{}, {}] is not inside [0, 1]",
            combat.min_hit_chance,
            combat.max_hit_chance
        );
        let longest_side = config.map_width.max(config.map_height);
        ensure!(
            u32::try_from(combat.miss_overshoot).is_ok_and(|tiles| tiles <= longest_side),
            "miss_overshoot {} is outside [0, {longest_side}]",
            combat.miss_overshoot
        );
        ensure!(
            (0.0..=1.0).contains(&combat.falls_short_ratio),
            "falls_short_ratio {} is outside [0, 1]",
            combat.falls_short_ratio
        );

        let ai = &config.ai;
        ensure!(
            ai.max_shooting_range >= 0.0,
            "max_shooting_range {} is negative",
            ai.max_shooting_range
        );
        ensure!(
            (0.0..=1.0).contains(&ai.aggression),
            "aggression {} is outside [0, 1]",
            ai.aggression
        );

        let generation = &config.generation;
        let ranges = [
            ("water_features", generation.water_features),
            ("pond_size", generation.pond_size),
            ("tree_clusters", generation.tree_clusters),
            ("tree_cluster_size", generation.tree_cluster_size),
            ("rock_formations", generation.rock_formations),
            ("rock_formation_size", generation.rock_formation_size),
            ("cactus_patches", generation.cactus_patches),
            ("cactus_patch_size", generation.cactus_patch_size),
            ("building_ruins", generation.building_ruins),
            ("ruin_width", generation.ruin_width),
            ("ruin_height", generation.ruin_height),
            ("wall_clusters", generation.wall_clusters),
            ("wall_cluster_size", generation.wall_cluster_size),
        ];
        for (name, range) in ranges {
            ensure!(
                range.min <= range.max,
                "generation.{name} range {}..={} is inverted",
                range.min,
                range.max
            );
        }
        ensure!(
            (0.0..=1.0).contains(&generation.ruin_wall_chance),
            "ruin_wall_chance {} is outside [0, 1]",
            generation.ruin_wall_chance
        );

        Ok(())
    }
}

/// Game configuration constants and tunable parameters.
///
/// Every section falls back to its defaults when omitted from a config file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub map_width: u32,
    pub map_height: u32,
    /// Manhattan distance the two spawn cells should exceed.
    pub spawn_separation: u32,
    pub player_max_hp: u32,
    pub enemy_max_hp: u32,
    pub combat: CombatRules,
    pub ai: AiConfig,
    pub generation: GenerationConfig,
}

impl GameConfig {
    pub const DEFAULT_MAP_WIDTH: u32 = 80;
    pub const DEFAULT_MAP_HEIGHT: u32 = 50;
    pub const DEFAULT_SPAWN_SEPARATION: u32 = 20;
    pub const DEFAULT_MAX_HP: u32 = 100;

    pub fn new() -> Self {
        Self {
            map_width: Self::DEFAULT_MAP_WIDTH,
            map_height: Self::DEFAULT_MAP_HEIGHT,
            spawn_separation: Self::DEFAULT_SPAWN_SEPARATION,
            player_max_hp: Self::DEFAULT_MAX_HP,
            enemy_max_hp: Self::DEFAULT_MAX_HP,
            combat: CombatRules::default(),
            ai: AiConfig::default(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Balance parameters for shot resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatRules {
    /// Lower clamp on final hit chance; a shot is never impossible.
    pub min_hit_chance: f64,
    /// Upper clamp on final hit chance; a shot is never guaranteed.
    pub max_hit_chance: f64,
    /// Fraction of the effective range an out-of-range bullet travels.
    pub falls_short_ratio: f64,
    /// Tiles a missed bullet travels past its natural stopping point.
    pub miss_overshoot: i32,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            min_hit_chance: 0.05,
            max_hit_chance: 0.95,
            falls_short_ratio: 0.8,
            miss_overshoot: 2,
        }
    }
}

/// Tuning for the enemy decision policy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AiConfig {
    /// The enemy never shoots beyond this distance.
    pub max_shooting_range: f64,
    /// Added to the shoot chance inside half the shooting range.
    pub close_range_bonus: f64,
    pub aggression: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            max_shooting_range: 15.0,
            close_range_bonus: 0.2,
            aggression: 0.7,
        }
    }
}

/// Inclusive `[min, max]` range a generator pass draws a count from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Feature counts and sizes for the procedural map passes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerationConfig {
    pub water_features: CountRange,
    pub pond_size: CountRange,
    pub tree_clusters: CountRange,
    pub tree_cluster_size: CountRange,
    pub rock_formations: CountRange,
    pub rock_formation_size: CountRange,
    pub cactus_patches: CountRange,
    pub cactus_patch_size: CountRange,
    pub building_ruins: CountRange,
    pub ruin_width: CountRange,
    pub ruin_height: CountRange,
    /// Chance that one footprint edge cell is still standing.
    pub ruin_wall_chance: f64,
    pub wall_clusters: CountRange,
    pub wall_cluster_size: CountRange,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            water_features: CountRange::new(0, 2),
            pond_size: CountRange::new(3, 8),
            tree_clusters: CountRange::new(3, 8),
            tree_cluster_size: CountRange::new(2, 6),
            rock_formations: CountRange::new(2, 5),
            rock_formation_size: CountRange::new(2, 5),
            cactus_patches: CountRange::new(1, 4),
            cactus_patch_size: CountRange::new(1, 4),
            building_ruins: CountRange::new(0, 3),
            ruin_width: CountRange::new(3, 6),
            ruin_height: CountRange::new(3, 5),
            ruin_wall_chance: 0.7,
            wall_clusters: CountRange::new(15, 25),
            wall_cluster_size: CountRange::new(1, 4),
        }
    }
}


//! Procedural frontier map generation.
//!
//! Passes run in a fixed order so later features never overwrite earlier
//! ones:
//!
//! 1. Solid border
//! 2. Water (meandering rivers or round ponds)
//! 3. Tree clusters
//! 4. Rock formations
//! 5. Cactus patches
//! 6. Building ruins
//! 7. Cover walls
//!
//! Passes 2-7 only ever write onto plain interior tiles (see
//! [`TerrainGrid::place`]). Placement windows that collapse on small maps
//! degrade to their lower bound instead of failing.

use tracing::debug;

use super::error::GridError;
use super::grid::TerrainGrid;
use super::tile::TileKind;
use crate::config::{CountRange, GenerationConfig};
use crate::geometry::Position;
use crate::rng::RngOracle;

/// Populates terrain grids from a [`GenerationConfig`].
#[derive(Clone, Debug, Default)]
pub struct MapGenerator {
    config: GenerationConfig,
}

impl MapGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Builds and populates a fresh grid.
    pub fn generate<R>(&self, width: u32, height: u32, rng: &mut R) -> Result<TerrainGrid, GridError>
    where
        R: RngOracle + ?Sized,
    {
        let mut grid = TerrainGrid::new(width, height)?;
        self.populate(&mut grid, rng);
        Ok(grid)
    }

    /// Runs every pass over `grid`.
    pub fn populate<R>(&self, grid: &mut TerrainGrid, rng: &mut R)
    where
        R: RngOracle + ?Sized,
    {
        grid.lay_border();

        let water = self.add_water(grid, rng);
        let trees = self.add_trees(grid, rng);
        let rocks = self.add_rocks(grid, rng);
        let cacti = self.add_cacti(grid, rng);
        let ruins = self.add_ruins(grid, rng);
        let walls = self.add_cover_walls(grid, rng);

        debug!(
            width = grid.width(),
            height = grid.height(),
            water,
            trees,
            rocks,
            cacti,
            ruins,
            walls,
            "generated terrain"
        );
    }

    fn add_water<R: RngOracle + ?Sized>(&self, grid: &mut TerrainGrid, rng: &mut R) -> usize {
        let features = draw(rng, self.config.water_features);
        let mut placed = 0;
        for _ in 0..features {
            placed += if rng.coin() {
                self.add_river(grid, rng)
            } else {
                self.add_pond(grid, rng)
            };
        }
        placed
    }

    /// A river spans one axis, jittering sideways each step.
    fn add_river<R: RngOracle + ?Sized>(&self, grid: &mut TerrainGrid, rng: &mut R) -> usize {
        let horizontal = rng.coin();
        // Along-axis and cross-axis extents.
        let (length, breadth) = if horizontal {
            (grid.width() as i32, grid.height() as i32)
        } else {
            (grid.height() as i32, grid.width() as i32)
        };

        let center = rng.range(breadth / 4, 3 * breadth / 4);
        let mut placed = 0;
        for along in 2..length - 2 {
            let across = (center + rng.range(-2, 2)).clamp(2, (breadth - 3).max(2));
            let half_width = rng.range(1, 2);
            for offset in -half_width..=half_width {
                let position = if horizontal {
                    Position::new(along, across + offset)
                } else {
                    Position::new(across + offset, along)
                };
                placed += usize::from(grid.place(position, TileKind::Water));
            }
        }
        placed
    }

    /// A roughly circular pond: Manhattan threshold with per-cell jitter.
    fn add_pond<R: RngOracle + ?Sized>(&self, grid: &mut TerrainGrid, rng: &mut R) -> usize {
        let center = Position::new(
            rng.range(5, grid.width() as i32 - 6),
            rng.range(5, grid.height() as i32 - 6),
        );
        let radius = draw(rng, self.config.pond_size) as i32 / 2;

        let mut placed = 0;
        for x in center.x - radius..=center.x + radius {
            for y in center.y - radius..=center.y + radius {
                let position = Position::new(x, y);
                if !grid.is_in_bounds(position) {
                    continue;
                }
                let threshold = radius + rng.range(-1, 1);
                if position.manhattan_distance(center) as i32 <= threshold {
                    placed += usize::from(grid.place(position, TileKind::Water));
                }
            }
        }
        placed
    }

    fn add_trees<R: RngOracle + ?Sized>(&self, grid: &mut TerrainGrid, rng: &mut R) -> usize {
        scatter(
            grid,
            rng,
            TileKind::Tree,
            ScatterShape {
                count: self.config.tree_clusters,
                size: self.config.tree_cluster_size,
                edge_gap: 3,
                spread: 3,
            },
        )
    }

    fn add_rocks<R: RngOracle + ?Sized>(&self, grid: &mut TerrainGrid, rng: &mut R) -> usize {
        scatter(
            grid,
            rng,
            TileKind::Rock,
            ScatterShape {
                count: self.config.rock_formations,
                size: self.config.rock_formation_size,
                edge_gap: 3,
                spread: 2,
            },
        )
    }

    fn add_cacti<R: RngOracle + ?Sized>(&self, grid: &mut TerrainGrid, rng: &mut R) -> usize {
        scatter(
            grid,
            rng,
            TileKind::Cactus,
            ScatterShape {
                count: self.config.cactus_patches,
                size: self.config.cactus_patch_size,
                edge_gap: 2,
                spread: 4,
            },
        )
    }

    /// Rectangular footprints whose edge cells each survive independently.
    fn add_ruins<R: RngOracle + ?Sized>(&self, grid: &mut TerrainGrid, rng: &mut R) -> usize {
        let ruins = draw(rng, self.config.building_ruins);
        let mut placed = 0;
        for _ in 0..ruins {
            let origin = Position::new(
                rng.range(4, grid.width() as i32 - 8),
                rng.range(4, grid.height() as i32 - 8),
            );
            let width = draw(rng, self.config.ruin_width) as i32;
            let height = draw(rng, self.config.ruin_height) as i32;

            for x in origin.x..origin.x + width {
                for y in origin.y..origin.y + height {
                    let on_edge = x == origin.x
                        || x == origin.x + width - 1
                        || y == origin.y
                        || y == origin.y + height - 1;
                    if on_edge && rng.chance(self.config.ruin_wall_chance) {
                        placed += usize::from(grid.place(Position::new(x, y), TileKind::Ruin));
                    }
                }
            }
        }
        placed
    }

    /// Short random walks of wall tiles for guaranteed cover density.
    fn add_cover_walls<R: RngOracle + ?Sized>(&self, grid: &mut TerrainGrid, rng: &mut R) -> usize {
        let clusters = draw(rng, self.config.wall_clusters);
        let mut placed = 0;
        for _ in 0..clusters {
            let mut cursor = Position::new(
                rng.range(2, grid.width() as i32 - 3),
                rng.range(2, grid.height() as i32 - 3),
            );
            for _ in 0..draw(rng, self.config.wall_cluster_size) {
                placed += usize::from(grid.place(cursor, TileKind::Solid));
                cursor.x += rng.range(-1, 1);
                cursor.y += rng.range(-1, 1);
            }
        }
        placed
    }
}

/// Cluster placement parameters shared by trees, rocks and cacti.
struct ScatterShape {
    count: CountRange,
    size: CountRange,
    /// Minimum distance of a cluster centre from the map edge.
    edge_gap: i32,
    /// Maximum per-axis offset of a member from its centre.
    spread: i32,
}

fn scatter<R>(grid: &mut TerrainGrid, rng: &mut R, kind: TileKind, shape: ScatterShape) -> usize
where
    R: RngOracle + ?Sized,
{
    let clusters = draw(rng, shape.count);
    let mut placed = 0;
    for _ in 0..clusters {
        let center = Position::new(
            rng.range(shape.edge_gap, grid.width() as i32 - shape.edge_gap - 1),
            rng.range(shape.edge_gap, grid.height() as i32 - shape.edge_gap - 1),
        );
        for _ in 0..draw(rng, shape.size) {
            let member = Position::new(
                center.x + rng.range(-shape.spread, shape.spread),
                center.y + rng.range(-shape.spread, shape.spread),
            );
            placed += usize::from(grid.place(member, kind));
        }
    }
    placed
}

fn draw<R: RngOracle + ?Sized>(rng: &mut R, range: CountRange) -> u32 {
    let min = range.min.min(i32::MAX as u32) as i32;
    let max = range.max.min(i32::MAX as u32) as i32;
    rng.range(min, max) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    #[test]
    fn border_survives_every_seed() {
        let generator = MapGenerator::default();
        for seed in 0..20 {
            let mut rng = PcgRng::seeded(seed);
            let grid = generator.generate(40, 25, &mut rng).unwrap();
            for x in 0..40 {
                assert_eq!(grid.classify(Position::new(x, 0)), TileKind::Solid);
                assert_eq!(grid.classify(Position::new(x, 24)), TileKind::Solid);
            }
            for y in 0..25 {
                assert_eq!(grid.classify(Position::new(0, y)), TileKind::Solid);
                assert_eq!(grid.classify(Position::new(39, y)), TileKind::Solid);
            }
        }
    }

    #[test]
    fn same_seed_same_map() {
        let generator = MapGenerator::default();
        let a = generator.generate(80, 50, &mut PcgRng::seeded(5)).unwrap();
        let b = generator.generate(80, 50, &mut PcgRng::seeded(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tiny_maps_do_not_panic() {
        let generator = MapGenerator::default();
        for (w, h) in [(3, 3), (5, 4), (9, 9), (12, 6)] {
            let grid = generator.generate(w, h, &mut PcgRng::seeded(11)).unwrap();
            assert_eq!(grid.width(), w);
            assert_eq!(grid.height(), h);
        }
    }

    #[test]
    fn disabled_passes_leave_plain_interior() {
        let none = CountRange::new(0, 0);
        let config = GenerationConfig {
            water_features: none,
            tree_clusters: none,
            rock_formations: none,
            cactus_patches: none,
            building_ruins: none,
            wall_clusters: none,
            ..GenerationConfig::default()
        };
        let grid = MapGenerator::new(config)
            .generate(20, 10, &mut PcgRng::seeded(3))
            .unwrap();
        assert_eq!(grid.count(TileKind::Plain), 18 * 8);
    }

    #[test]
    fn ruins_only_pass_places_ruins_on_footprint_edges() {
        let none = CountRange::new(0, 0);
        let config = GenerationConfig {
            water_features: none,
            tree_clusters: none,
            rock_formations: none,
            cactus_patches: none,
            building_ruins: CountRange::new(3, 3),
            ruin_wall_chance: 1.0,
            wall_clusters: none,
            ..GenerationConfig::default()
        };
        let grid = MapGenerator::new(config)
            .generate(60, 40, &mut PcgRng::seeded(8))
            .unwrap();
        assert!(grid.count(TileKind::Ruin) > 0);
        assert_eq!(
            grid.count(TileKind::Ruin) + grid.count(TileKind::Plain) + grid.count(TileKind::Solid),
            60 * 40
        );
    }
}

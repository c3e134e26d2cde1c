//! Property tests for grid geometry, visibility and generation.

use proptest::prelude::*;

use duel_core::{
    GameConfig, MapGenerator, PcgRng, Position, ScriptedRng, SpawnError, TerrainGrid, TileKind,
};

fn generated(seed: u64) -> TerrainGrid {
    let config = GameConfig::default();
    MapGenerator::new(config.generation)
        .generate(config.map_width, config.map_height, &mut PcgRng::seeded(seed))
        .unwrap()
}

fn position(max_x: i32, max_y: i32) -> impl Strategy<Value = Position> {
    (0..max_x, 0..max_y).prop_map(|(x, y)| Position::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn out_of_bounds_blocks_everything(x in -200i32..200, y in -200i32..200) {
        let grid = TerrainGrid::new(20, 12).unwrap();
        let pos = Position::new(x, y);
        prop_assume!(!grid.is_in_bounds(pos));
        prop_assert!(grid.blocks_movement(pos));
        prop_assert!(grid.blocks_projectile(pos));
        prop_assert_eq!(grid.classify(pos), TileKind::Solid);
    }

    #[test]
    fn trace_keeps_endpoints_and_symmetric_length(
        a in position(80, 50),
        b in position(80, 50),
    ) {
        let grid = TerrainGrid::new(80, 50).unwrap();
        let forward = grid.trace(a, b);
        let backward = grid.trace(b, a);
        prop_assert!(!forward.is_empty());
        prop_assert_eq!(forward.first(), Some(&a));
        prop_assert_eq!(forward.last(), Some(&b));
        prop_assert_eq!(forward.len(), backward.len());
    }

    #[test]
    fn line_of_sight_is_symmetric(
        seed in any::<u64>(),
        a in position(80, 50),
        b in position(80, 50),
    ) {
        let grid = generated(seed);
        prop_assert_eq!(grid.has_line_of_sight(a, b), grid.has_line_of_sight(b, a));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generated_tiles_respect_their_blocking_rules(seed in any::<u64>()) {
        let grid = generated(seed);
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let pos = Position::new(x, y);
                let kind = grid.classify(pos);
                if grid.is_border(pos) {
                    prop_assert_eq!(kind, TileKind::Solid);
                    prop_assert!(grid.blocks_movement(pos) && grid.blocks_projectile(pos));
                }
                match kind {
                    TileKind::Water | TileKind::Cactus => {
                        prop_assert!(grid.blocks_movement(pos));
                        prop_assert!(!grid.blocks_projectile(pos));
                    }
                    TileKind::Tree | TileKind::Rock | TileKind::Ruin | TileKind::Solid => {
                        prop_assert!(grid.blocks_movement(pos));
                        prop_assert!(grid.blocks_projectile(pos));
                    }
                    TileKind::Plain => {
                        prop_assert!(!grid.blocks_movement(pos));
                        prop_assert!(!grid.blocks_projectile(pos));
                    }
                }
            }
        }
    }

    #[test]
    fn spawn_pair_lands_on_distinct_open_cells(seed in any::<u64>()) {
        let grid = generated(seed);
        let mut rng = PcgRng::seeded(seed ^ 0x5eed);
        let (first, second) = grid.find_spawn_pair(20, &mut rng).unwrap();
        prop_assert_ne!(first, second);
        prop_assert!(!grid.blocks_movement(first));
        prop_assert!(!grid.blocks_movement(second));
    }
}

#[test]
fn two_open_cells_are_always_the_spawn_pair() {
    let grid = TerrainGrid::from_rows(&["#####", "#.###", "###.#", "#####"]).unwrap();
    for min_separation in [0, 3, 100] {
        let mut rng = ScriptedRng::new();
        let (first, second) = grid.find_spawn_pair(min_separation, &mut rng).unwrap();
        let mut pair = [first, second];
        pair.sort();
        assert_eq!(pair, [Position::new(1, 1), Position::new(3, 2)]);
    }
}

#[test]
fn one_open_cell_is_not_enough() {
    let grid = TerrainGrid::from_rows(&["####", "#.##", "####"]).unwrap();
    let err = grid.find_spawn_pair(5, &mut ScriptedRng::new()).unwrap_err();
    assert_eq!(err, SpawnError::NotEnoughOpenCells { found: 1 });
}

#[test]
fn walls_break_line_of_sight_but_water_does_not() {
    let grid = TerrainGrid::from_rows(&[
        "#########",
        "#...#...#",
        "#...~...#",
        "#########",
    ])
    .unwrap();
    assert!(!grid.has_line_of_sight(Position::new(1, 1), Position::new(7, 1)));
    assert!(grid.has_line_of_sight(Position::new(1, 2), Position::new(7, 2)));
    // Endpoints never block their own sight line.
    assert!(grid.has_line_of_sight(Position::new(4, 1), Position::new(4, 2)));
}

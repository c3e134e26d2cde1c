//! Where a bullet stops.

use crate::geometry::Position;
use crate::terrain::TerrainGrid;

/// First cell after the shooter's own that blocks projectiles, or the last
/// cell of `path` when nothing does.
///
/// Returns the index into `path` alongside the cell. `path` must be
/// non-empty (every traced line is).
pub fn natural_stop(grid: &TerrainGrid, path: &[Position]) -> (usize, Position) {
    let last = path.len().saturating_sub(1);
    let index = path
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, cell)| grid.blocks_projectile(**cell))
        .map_or(last, |(index, _)| index);
    (index, path.get(index).copied().unwrap_or_default())
}

/// Terminus of a shot fired beyond effective range: the cell at
/// `floor(effective_range * ratio)` steps along the path, bounded by the
/// path length. An empty prefix keeps `fallback`.
pub fn falls_short_terminus(
    path: &[Position],
    effective_range: u32,
    ratio: f64,
    fallback: Position,
) -> Position {
    let reach = (f64::from(effective_range) * ratio).floor().max(0.0) as usize;
    let reach = reach.min(path.len());
    if reach == 0 {
        return fallback;
    }
    path[reach - 1]
}

/// Terminus of a clean miss: `overshoot` steps past `stop` along the
/// direction of the path's final step, clamped into the grid.
pub fn miss_terminus(
    grid: &TerrainGrid,
    path: &[Position],
    stop: Position,
    overshoot: i32,
) -> Position {
    let [.., before, last] = path else {
        return stop;
    };
    let direction = before.step_toward(*last);
    let max_x = grid.width() as i32 - 1;
    let max_y = grid.height() as i32 - 1;
    Position::new(
        stop.x
            .saturating_add(direction.dx.saturating_mul(overshoot))
            .clamp(0, max_x),
        stop.y
            .saturating_add(direction.dy.saturating_mul(overshoot))
            .clamp(0, max_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> TerrainGrid {
        TerrainGrid::from_rows(&[
            "##########",
            "#........#",
            "#....#...#",
            "#........#",
            "##########",
        ])
        .unwrap()
    }

    #[test]
    fn stop_is_the_first_blocking_cell_after_the_shooter() {
        let grid = corridor();
        let path = grid.trace(Position::new(1, 2), Position::new(8, 2));
        assert_eq!(natural_stop(&grid, &path), (4, Position::new(5, 2)));
    }

    #[test]
    fn clear_path_stops_at_the_target() {
        let grid = corridor();
        let path = grid.trace(Position::new(1, 1), Position::new(8, 1));
        assert_eq!(natural_stop(&grid, &path), (7, Position::new(8, 1)));
    }

    #[test]
    fn point_blank_stops_on_the_shared_cell() {
        let grid = corridor();
        let here = Position::new(3, 3);
        assert_eq!(natural_stop(&grid, &[here]), (0, here));
    }

    #[test]
    fn short_shots_truncate_along_the_path() {
        let path: Vec<Position> = (0..30).map(|x| Position::new(x, 1)).collect();
        let fallback = Position::new(29, 1);
        assert_eq!(falls_short_terminus(&path, 12, 0.8, fallback), Position::new(8, 1));
        assert_eq!(falls_short_terminus(&path[..4], 12, 0.8, fallback), Position::new(3, 1));
        assert_eq!(falls_short_terminus(&path, 1, 0.8, fallback), fallback);
    }

    #[test]
    fn misses_overshoot_and_stay_in_bounds() {
        let grid = corridor();
        let path = grid.trace(Position::new(1, 1), Position::new(6, 1));
        assert_eq!(
            miss_terminus(&grid, &path, Position::new(6, 1), 2),
            Position::new(8, 1)
        );

        let path = grid.trace(Position::new(1, 1), Position::new(8, 3));
        let terminus = miss_terminus(&grid, &path, Position::new(8, 3), 2);
        assert!(grid.is_in_bounds(terminus));
        assert_eq!(terminus, Position::new(9, 3));
    }

    #[test]
    fn huge_overshoot_saturates_to_the_edge() {
        let grid = corridor();
        let path = grid.trace(Position::new(1, 1), Position::new(6, 1));
        assert_eq!(
            miss_terminus(&grid, &path, Position::new(6, 1), i32::MAX),
            Position::new(9, 1)
        );

        let path = grid.trace(Position::new(6, 1), Position::new(1, 1));
        assert_eq!(
            miss_terminus(&grid, &path, Position::new(1, 1), i32::MAX),
            Position::new(0, 1)
        );
    }

    #[test]
    fn single_cell_miss_stays_put() {
        let grid = corridor();
        let here = Position::new(2, 2);
        assert_eq!(miss_terminus(&grid, &[here], here, 2), here);
    }
}

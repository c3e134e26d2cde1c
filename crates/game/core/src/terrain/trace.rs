//! Integer line tracing.

use crate::geometry::Position;

/// Every cell visited by the straight line from `from` to `to`.
///
/// All-octant Bresenham with integer error accumulation. The result always
/// starts at `from`, ends at `to` and holds `max(|dx|, |dy|) + 1` cells.
pub fn bresenham(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let mut cells = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let mut err = dx + dy;
    let (mut x, mut y) = (from.x, from.y);

    loop {
        cells.push(Position::new(x, y));
        if x == to.x && y == to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    cells
}

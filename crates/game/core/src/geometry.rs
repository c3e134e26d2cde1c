//! Grid coordinates and single-tile steps.

use std::fmt;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance in tiles.
    pub fn euclidean_distance(self, other: Position) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }

    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the position one `step` away from `self`.
    pub const fn offset(self, step: Step) -> Position {
        Position {
            x: self.x + step.dx,
            y: self.y + step.dy,
        }
    }

    /// Per-axis sign of the vector from `self` to `target`.
    ///
    /// Returns [`Step::NONE`] when both positions coincide.
    pub const fn step_toward(self, target: Position) -> Step {
        Step {
            dx: (target.x - self.x).signum(),
            dy: (target.y - self.y).signum(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Single-tile offset. Each axis is one of `-1`, `0` or `+1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub dx: i32,
    pub dy: i32,
}

impl Step {
    pub const NONE: Step = Step::new(0, 0);
    pub const NORTH: Step = Step::new(0, -1);
    pub const SOUTH: Step = Step::new(0, 1);
    pub const EAST: Step = Step::new(1, 0);
    pub const WEST: Step = Step::new(-1, 0);

    /// The eight compass steps, west column first.
    pub const COMPASS: [Step; 8] = [
        Step::new(-1, -1),
        Step::new(-1, 0),
        Step::new(-1, 1),
        Step::new(0, -1),
        Step::new(0, 1),
        Step::new(1, -1),
        Step::new(1, 0),
        Step::new(1, 1),
    ];

    /// Creates a step, clamping each axis into `-1..=1`.
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: if dx > 1 { 1 } else if dx < -1 { -1 } else { dx },
            dy: if dy > 1 { 1 } else if dy < -1 { -1 } else { dy },
        }
    }

    pub const fn is_none(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance_matches_pythagoras() {
        let a = Position::new(1, 1);
        let b = Position::new(4, 5);
        assert!((a.euclidean_distance(b) - 5.0).abs() < f64::EPSILON);
        assert_eq!(a.euclidean_distance(a), 0.0);
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(-3, 7);
        let b = Position::new(2, 1);
        assert_eq!(a.manhattan_distance(b), 11);
        assert_eq!(b.manhattan_distance(a), 11);
    }

    #[test]
    fn step_toward_uses_per_axis_sign() {
        let from = Position::new(5, 5);
        assert_eq!(from.step_toward(Position::new(9, 5)), Step::EAST);
        assert_eq!(from.step_toward(Position::new(5, 1)), Step::NORTH);
        assert_eq!(from.step_toward(Position::new(0, 20)), Step::new(-1, 1));
        assert!(from.step_toward(from).is_none());
    }

    #[test]
    fn step_new_clamps_axes() {
        assert_eq!(Step::new(5, -9), Step::new(1, -1));
    }
}

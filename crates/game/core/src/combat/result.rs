//! Shot outcome types.

use crate::geometry::Position;
use crate::terrain::trace::bresenham;

/// How a resolved shot ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ShotKind {
    /// Connected and dealt damage.
    Hit,
    /// The roll succeeded but terrain at the stopping point absorbed it.
    Cover,
    /// The roll failed.
    Miss,
    /// Fired beyond effective range; no roll was made.
    FallsShort,
}

/// Result of one resolved shot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotOutcome {
    pub kind: ShotKind,
    /// Full traced line, shooter to target.
    pub path: Vec<Position>,
    /// First projectile-blocking cell on `path`, or the target cell.
    pub natural_stop: Position,
    /// Where the bullet visibly ends.
    pub terminus: Position,
    /// Zero unless `kind` is [`ShotKind::Hit`].
    pub damage: u32,
    pub message: String,
    pub target_died: bool,
    pub critical: bool,
}

impl ShotOutcome {
    pub fn hit(&self) -> bool {
        self.kind == ShotKind::Hit
    }

    /// Cells the bullet visibly travels through, shooter cell first and
    /// `terminus` last.
    ///
    /// Follows `path` while the terminus lies on it; an overshooting miss
    /// continues in a straight line past the natural stop.
    pub fn visible_path(&self) -> Vec<Position> {
        if let Some(index) = self.path.iter().position(|cell| *cell == self.terminus) {
            return self.path[..=index].to_vec();
        }
        let stop = self
            .path
            .iter()
            .position(|cell| *cell == self.natural_stop)
            .unwrap_or(self.path.len().saturating_sub(1));
        let mut cells = self.path[..=stop.min(self.path.len().saturating_sub(1))].to_vec();
        cells.extend(bresenham(self.natural_stop, self.terminus).into_iter().skip(1));
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(kind: ShotKind, stop: Position, terminus: Position) -> ShotOutcome {
        ShotOutcome {
            kind,
            path: (1..=6).map(|x| Position::new(x, 2)).collect(),
            natural_stop: stop,
            terminus,
            damage: 0,
            message: String::new(),
            target_died: false,
            critical: false,
        }
    }

    #[test]
    fn cover_shot_ends_at_the_obstacle() {
        let shot = outcome(ShotKind::Cover, Position::new(4, 2), Position::new(4, 2));
        assert_eq!(shot.visible_path().len(), 4);
        assert!(!shot.hit());
    }

    #[test]
    fn miss_extends_past_the_target() {
        let shot = outcome(ShotKind::Miss, Position::new(6, 2), Position::new(8, 2));
        let visible = shot.visible_path();
        assert_eq!(visible.first(), Some(&Position::new(1, 2)));
        assert_eq!(visible.last(), Some(&Position::new(8, 2)));
        assert_eq!(visible.len(), 8);
    }
}

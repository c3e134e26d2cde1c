//! Dense terrain grid with blocking predicates and line tracing.

use tracing::debug;

use super::error::{GridError, SpawnError};
use super::tile::TileKind;
use super::trace::bresenham;
use crate::geometry::Position;
use crate::rng::{RngOracle, choose};

/// Cells closer than this to an edge are skipped when spawning.
pub const DEFAULT_SPAWN_MARGIN: u32 = 2;

/// Fixed-size terrain grid.
///
/// The border is always [`TileKind::Solid`], so no actor or line trace can
/// leave the map. Interior tiles change only while the generator in this
/// crate populates a fresh grid; afterwards the grid is read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    width: u32,
    height: u32,
    tiles: Vec<TileKind>,
}

impl TerrainGrid {
    pub const MIN_SIDE: u32 = 3;

    /// Creates a plain grid enclosed by a solid border.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width < Self::MIN_SIDE || height < Self::MIN_SIDE {
            return Err(GridError::TooSmall {
                width,
                height,
                min: Self::MIN_SIDE,
            });
        }

        let mut grid = Self {
            width,
            height,
            tiles: vec![TileKind::Plain; width as usize * height as usize],
        };
        grid.lay_border();
        Ok(grid)
    }

    /// Parses an ASCII layout, one string per row (see [`TileKind::glyph`]).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut grid = Self::new(width as u32, height as u32)?;

        for (y, row) in rows.iter().enumerate() {
            let found = row.as_ref().chars().count();
            if found != width {
                return Err(GridError::RaggedRows {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, glyph) in row.as_ref().chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let kind =
                    TileKind::from_glyph(glyph).ok_or(GridError::UnknownGlyph { position, glyph })?;

                if grid.is_border(position) {
                    if kind != TileKind::Solid {
                        return Err(GridError::OpenBorder { position, glyph });
                    }
                    continue;
                }

                grid.tiles[y * width + x] = kind;
            }
        }

        Ok(grid)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Tile classification; out-of-bounds cells read as [`TileKind::Solid`].
    pub fn classify(&self, position: Position) -> TileKind {
        self.index(position)
            .map_or(TileKind::Solid, |index| self.tiles[index])
    }

    pub fn blocks_movement(&self, position: Position) -> bool {
        self.classify(position).blocks_movement()
    }

    pub fn blocks_projectile(&self, position: Position) -> bool {
        self.classify(position).blocks_projectile()
    }

    /// Every cell on the straight line between two points, endpoints included.
    pub fn trace(&self, from: Position, to: Position) -> Vec<Position> {
        bresenham(from, to)
    }

    /// True when no cell strictly between `a` and `b` blocks projectiles.
    ///
    /// The line is always traced from the lexicographically smaller endpoint,
    /// so the answer does not depend on argument order.
    pub fn has_line_of_sight(&self, a: Position, b: Position) -> bool {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let line = bresenham(from, to);
        if line.len() <= 2 {
            return true;
        }
        !line[1..line.len() - 1]
            .iter()
            .any(|&cell| self.blocks_projectile(cell))
    }

    /// Walkable cells at least `margin` tiles away from every edge, row-major.
    pub fn find_open_cells(&self, margin: u32) -> Vec<Position> {
        let margin = margin as i32;
        let mut cells = Vec::new();
        for y in margin..(self.height as i32 - margin) {
            for x in margin..(self.width as i32 - margin) {
                let position = Position::new(x, y);
                if !self.blocks_movement(position) {
                    cells.push(position);
                }
            }
        }
        cells
    }

    /// Picks two open cells more than `min_separation` apart (Manhattan).
    ///
    /// Falls back to any two distinct open cells when no distant pair exists,
    /// and widens the search to the whole grid when the default spawn margin
    /// leaves fewer than two candidates.
    pub fn find_spawn_pair<R>(
        &self,
        min_separation: u32,
        rng: &mut R,
    ) -> Result<(Position, Position), SpawnError>
    where
        R: RngOracle + ?Sized,
    {
        let mut candidates = self.find_open_cells(DEFAULT_SPAWN_MARGIN);
        if candidates.len() < 2 {
            debug!(
                found = candidates.len(),
                "spawn margin too tight, searching the whole grid"
            );
            candidates = self.find_open_cells(0);
        }
        if candidates.len() < 2 {
            return Err(SpawnError::NotEnoughOpenCells {
                found: candidates.len(),
            });
        }

        let first = *choose(rng, &candidates).ok_or(SpawnError::NotEnoughOpenCells {
            found: candidates.len(),
        })?;

        let distant: Vec<Position> = candidates
            .iter()
            .copied()
            .filter(|cell| cell.manhattan_distance(first) > min_separation)
            .collect();

        let pool = if distant.is_empty() {
            debug!(min_separation, "no distant spawn cell, using any other cell");
            candidates
                .into_iter()
                .filter(|cell| *cell != first)
                .collect()
        } else {
            distant
        };

        let second = *choose(rng, &pool).ok_or(SpawnError::NotEnoughOpenCells { found: 1 })?;
        Ok((first, second))
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|tile| **tile == kind).count()
    }

    /// ASCII rendering, one line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for (index, tile) in self.tiles.iter().enumerate() {
            if index > 0 && index % self.width as usize == 0 {
                out.push('\n');
            }
            out.push(tile.glyph());
        }
        out
    }

    pub fn is_border(&self, position: Position) -> bool {
        self.is_in_bounds(position)
            && (position.x == 0
                || position.y == 0
                || position.x == self.width as i32 - 1
                || position.y == self.height as i32 - 1)
    }

    pub(crate) fn lay_border(&mut self) {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let position = Position::new(x, y);
                if self.is_border(position) {
                    let index = y as usize * self.width as usize + x as usize;
                    self.tiles[index] = TileKind::Solid;
                }
            }
        }
    }

    /// Writes `kind` onto a plain interior cell.
    ///
    /// Returns `false` and leaves the grid untouched for out-of-bounds,
    /// border or already-featured cells.
    pub(crate) fn place(&mut self, position: Position, kind: TileKind) -> bool {
        if self.is_border(position) {
            return false;
        }
        match self.index(position) {
            Some(index) if self.tiles[index].is_plain() => {
                self.tiles[index] = kind;
                true
            }
            _ => false,
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.is_in_bounds(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}

use bitflags::bitflags;

bitflags! {
    /// Physical properties of a tile. The two flags are independent.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        const BLOCKS_MOVEMENT = 1 << 0;
        const BLOCKS_PROJECTILE = 1 << 1;
    }
}

/// Terrain classification of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TileKind {
    #[default]
    Plain,
    /// Walls and the map border.
    Solid,
    Water,
    Tree,
    Rock,
    Cactus,
    /// Broken building walls.
    Ruin,
}

impl TileKind {
    pub const fn flags(self) -> TileFlags {
        match self {
            TileKind::Plain => TileFlags::empty(),
            TileKind::Water | TileKind::Cactus => TileFlags::BLOCKS_MOVEMENT,
            TileKind::Solid | TileKind::Tree | TileKind::Rock | TileKind::Ruin => {
                TileFlags::BLOCKS_MOVEMENT.union(TileFlags::BLOCKS_PROJECTILE)
            }
        }
    }

    pub const fn blocks_movement(self) -> bool {
        self.flags().contains(TileFlags::BLOCKS_MOVEMENT)
    }

    pub const fn blocks_projectile(self) -> bool {
        self.flags().contains(TileFlags::BLOCKS_PROJECTILE)
    }

    pub const fn is_plain(self) -> bool {
        matches!(self, TileKind::Plain)
    }

    /// ASCII glyph used by layouts and diagnostics.
    pub const fn glyph(self) -> char {
        match self {
            TileKind::Plain => '.',
            TileKind::Solid => '#',
            TileKind::Water => '~',
            TileKind::Tree => 'T',
            TileKind::Rock => 'o',
            TileKind::Cactus => 'i',
            TileKind::Ruin => '=',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<TileKind> {
        match glyph {
            '.' => Some(TileKind::Plain),
            '#' => Some(TileKind::Solid),
            '~' => Some(TileKind::Water),
            'T' => Some(TileKind::Tree),
            'o' => Some(TileKind::Rock),
            'i' => Some(TileKind::Cactus),
            '=' => Some(TileKind::Ruin),
            _ => None,
        }
    }
}

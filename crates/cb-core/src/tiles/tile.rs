//! Renderable tile kinds and their texture selectors

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use crate::level::{LevelId, RoomId};

/// Opaque texture selector handed out by the asset side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Floor variants
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum GroundVariant {
    #[default]
    Plain = 0,
    /// Floor directly below a wall
    Shaded = 1,
}

/// Wall variants, named by which orthogonal neighbours are open
///
/// The discriminant is the variant's index in the wall strip of the sprite
/// sheet.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum WallVariant {
    /// Open on all four sides
    Pillar = 0,
    EdgeNorth = 1,
    EdgeEast = 2,
    EdgeSouth = 3,
    EdgeWest = 4,
    /// Surrounded by walls
    #[default]
    Solid = 5,
    /// Outer wall ring of a room
    Perimeter = 6,
    CornerNorthEast = 7,
    CornerSouthEast = 8,
    CornerSouthWest = 9,
    CornerNorthWest = 10,
    /// Orthogonally enclosed, open only on the north-east diagonal
    InnerNorthEast = 11,
    InnerSouthEast = 12,
    InnerSouthWest = 13,
    InnerNorthWest = 14,
    /// Open north and south
    Horizontal = 15,
    /// Open east and west
    Vertical = 16,
    /// Open everywhere except south
    TipNorth = 17,
    TipEast = 18,
    TipSouth = 19,
    TipWest = 20,
}

impl WallVariant {
    pub const fn sheet_index(self) -> u32 {
        self as u32
    }
}

/// Where stepping onto a door tile leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorLink {
    pub level: LevelId,
    pub target: RoomId,
}

/// A single cell on one tile layer
///
/// Tiles are small `Copy` values, so every cell holding the same wall variant
/// holds an identical value instead of its own allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Ground(GroundVariant),
    Wall(WallVariant),
    Door(DoorLink),
    Spawner,
}

impl Tile {
    pub const PERIMETER: Tile = Tile::Wall(WallVariant::Perimeter);

    pub const fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall(_))
    }

    pub const fn is_door(&self) -> bool {
        matches!(self, Tile::Door(_))
    }

    pub const fn door_link(&self) -> Option<DoorLink> {
        match self {
            Tile::Door(link) => Some(*link),
            _ => None,
        }
    }

    /// Debug display character
    pub const fn to_ascii(&self) -> char {
        match self {
            Tile::Ground(GroundVariant::Plain) => '.',
            Tile::Ground(GroundVariant::Shaded) => ',',
            Tile::Wall(WallVariant::Perimeter) => 'X',
            Tile::Wall(_) => '#',
            Tile::Door(_) => '+',
            Tile::Spawner => '@',
        }
    }

    /// Resolve the texture for this tile
    pub fn texture(&self, atlas: &impl TextureAtlas) -> TextureId {
        match self {
            Tile::Ground(variant) => atlas.ground(*variant),
            Tile::Wall(variant) => atlas.wall(*variant),
            Tile::Door(_) => atlas.door(),
            Tile::Spawner => atlas.spawner(),
        }
    }
}

/// Maps tile variants to textures; implemented by the asset side
pub trait TextureAtlas {
    fn ground(&self, variant: GroundVariant) -> TextureId;
    fn wall(&self, variant: WallVariant) -> TextureId;
    fn door(&self) -> TextureId;
    fn spawner(&self) -> TextureId;
}

/// Atlas for a sprite sheet with one strip of ground and one strip of wall frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetAtlas {
    pub ground_base: u32,
    pub wall_base: u32,
    pub door: TextureId,
    pub spawner: TextureId,
}

impl Default for SheetAtlas {
    fn default() -> Self {
        let wall_base = GroundVariant::COUNT as u32;
        let door = wall_base + WallVariant::COUNT as u32;
        Self {
            ground_base: 0,
            wall_base,
            door: TextureId(door),
            spawner: TextureId(door + 1),
        }
    }
}

impl TextureAtlas for SheetAtlas {
    fn ground(&self, variant: GroundVariant) -> TextureId {
        TextureId(self.ground_base + variant as u32)
    }

    fn wall(&self, variant: WallVariant) -> TextureId {
        TextureId(self.wall_base + variant.sheet_index())
    }

    fn door(&self) -> TextureId {
        self.door
    }

    fn spawner(&self) -> TextureId {
        self.spawner
    }
}

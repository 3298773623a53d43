//! Tiles, tile layers and neighbour-pattern tile selection

mod pattern;
mod tile;
mod tilemap;

pub use pattern::{GroundPattern, NeighborCell, Neighborhood, TilePattern, WallPattern};
pub use tile::{DoorLink, GroundVariant, SheetAtlas, TextureAtlas, TextureId, Tile, WallVariant};
pub use tilemap::{TileLayer, TileMap};

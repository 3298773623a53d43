//! Fixed dimensions shared by generation, painting and rendering.

/// Width of one tile in pixels
pub const TILE_WIDTH: i32 = 32;

/// Height of one tile in pixels
pub const TILE_HEIGHT: i32 = 32;

/// Cells reserved on every side of the interior for perimeter walls and doors
pub const BORDER: usize = 2;

/// Door tiles span `center - DOOR_HALF_WIDTH ..= center + DOOR_HALF_WIDTH`
pub const DOOR_HALF_WIDTH: usize = 3;

/// Carved door corridors span `center - CORRIDOR_HALF_WIDTH ..= center + CORRIDOR_HALF_WIDTH`
pub const CORRIDOR_HALF_WIDTH: usize = 1;

/// Minimum inward depth of a door corridor, in cells
pub const MIN_CORRIDOR_DEPTH: usize = 2;

/// Largest accepted interior width or height
pub const MAX_ROOM_DIMENSION: usize = 512;

/// Cave density is a percentage; this is its upper bound
pub const MAX_DENSITY: u8 = 100;

/// Number of tile layers a room owns
pub const LAYER_COUNT: usize = 4;

//! Rooms of a level
//!
//! Contains the room orchestrator, door geometry and connectivity, the wall
//! mask and spawn derivation, and the viewport rendering contract.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod door;
mod render;
mod room;
mod room_gen;

pub use door::{Connections, DoorSides, DoorWindow, Side};
pub use render::{TileRenderer, Viewport};
pub use room::{Room, RoomState};
pub use room_gen::{RoomGenerator, WallMask, open_cells};

/// Identifier of a room within its level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of the level that owns a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LevelId(pub u32);

/// Entity currently associated with a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

//! Errors raised while generating or querying a room

use thiserror::Error;

use crate::level::RoomId;
use crate::tiles::TileLayer;

/// Everything that can go wrong in room generation and tile lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("invalid room dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("cave density {0} is outside 0..=100")]
    InvalidDensity(u8),

    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    #[error("no open cell left for a spawn after {attempts} generation attempts")]
    NoReachableSpawn { attempts: u32 },

    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("room {0} has already been generated")]
    AlreadyGenerated(RoomId),

    #[error("room {0} has not been generated yet")]
    NotGenerated(RoomId),

    #[error("the {0} layer is owned by room generation")]
    ReadOnlyLayer(TileLayer),
}

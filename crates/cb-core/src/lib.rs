//! cb-core: Cave room generation for a room-graph level
//!
//! This crate turns a room's dimensions and its compass-side connections into
//! four renderable tile layers: ground, walls and doors, the spawn marker, and
//! a free layer for level decoration. Apart from reading a generator config
//! file it performs no I/O; textures are opaque selectors resolved by the
//! caller.

pub mod config;
pub mod level;
pub mod map;
pub mod tiles;

mod consts;
mod error;
mod rng;

pub use config::GeneratorConfig;
pub use consts::*;
pub use error::RoomError;
pub use rng::RoomRng;

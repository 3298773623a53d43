//! Tile layers

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use super::Tile;
use crate::RoomError;
use crate::map::{Coord, Grid};

/// The four layers of a room, in draw order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum TileLayer {
    Background = 0,
    Foreground = 1,
    Spawner = 2,
    Misc = 3,
}

impl TileLayer {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A fixed-size grid of optional tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    tiles: Grid<Option<Tile>>,
}

impl TileMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: Grid::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    /// Tile at `(x, y)`, `Ok(None)` for an empty cell, an error off the map
    pub fn tile(&self, x: i32, y: i32) -> Result<Option<Tile>, RoomError> {
        self.tiles.try_get(Coord::new(x, y)).copied()
    }

    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) -> Result<(), RoomError> {
        self.tiles.set(Coord::new(x, y), Some(tile))
    }

    pub fn clear_tile(&mut self, x: i32, y: i32) -> Result<(), RoomError> {
        self.tiles.set(Coord::new(x, y), None)
    }

    /// Non-empty cells, row-major
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        self.tiles
            .iter()
            .filter_map(|(c, tile)| tile.as_ref().map(|t| (c, t)))
    }

    pub fn count(&self, pred: impl Fn(&Tile) -> bool) -> usize {
        self.tiles.count(|tile| tile.as_ref().is_some_and(&pred))
    }

    pub fn is_blank(&self) -> bool {
        self.count(|_| true) == 0
    }
}

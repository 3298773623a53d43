//! Door sides, room connections and the door window geometry
//!
//! Interior coordinates address the room's playable area; grid coordinates
//! address the bordered tile layers. [`to_grid`] and [`to_interior`] are the
//! only places the border offset is applied.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

use super::RoomId;
use crate::map::Coord;
use crate::{BORDER, CORRIDOR_HALF_WIDTH, DOOR_HALF_WIDTH, MIN_CORRIDOR_DEPTH};

/// Compass side of a room; the discriminant is the door index
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
pub enum Side {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Side {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Side> {
        Side::iter().nth(index)
    }

    pub const fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::East => Side::West,
            Side::South => Side::North,
            Side::West => Side::East,
        }
    }

    pub const fn flag(self) -> DoorSides {
        match self {
            Side::North => DoorSides::NORTH,
            Side::East => DoorSides::EAST,
            Side::South => DoorSides::SOUTH,
            Side::West => DoorSides::WEST,
        }
    }

    /// North and South doors run along the x axis
    pub const fn runs_along_x(self) -> bool {
        matches!(self, Side::North | Side::South)
    }
}

bitflags! {
    /// Sides of a room that have a door
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DoorSides: u8 {
        const NORTH = 0x01;
        const EAST = 0x02;
        const SOUTH = 0x04;
        const WEST = 0x08;
    }
}

impl DoorSides {
    pub fn has(self, side: Side) -> bool {
        self.contains(side.flag())
    }

    /// Door sides in door-index order
    pub fn sides(self) -> impl Iterator<Item = Side> {
        Side::iter().filter(move |s| self.has(*s))
    }
}

/// Neighbour room per side, indexed by door index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Connections([Option<RoomId>; 4]);

impl Connections {
    pub const NONE: Connections = Connections([None; 4]);

    pub const fn new(neighbors: [Option<RoomId>; 4]) -> Self {
        Self(neighbors)
    }

    /// Accept a level's sentinel array where any negative id means no neighbour
    pub fn from_raw(raw: [i32; 4]) -> Self {
        Self(raw.map(|id| u32::try_from(id).ok().map(RoomId)))
    }

    /// Back to the sentinel form, `-1` for missing neighbours
    pub fn to_raw(&self) -> [i32; 4] {
        self.0
            .map(|id| id.and_then(|RoomId(n)| i32::try_from(n).ok()).unwrap_or(-1))
    }

    pub const fn get(&self, side: Side) -> Option<RoomId> {
        self.0[side as usize]
    }

    pub fn set(&mut self, side: Side, neighbor: Option<RoomId>) {
        self.0[side.index()] = neighbor;
    }

    /// First side (in door-index order) connected to `room`
    pub fn side_of(&self, room: RoomId) -> Option<Side> {
        Side::iter().find(|s| self.get(*s) == Some(room))
    }

    pub fn door_sides(&self) -> DoorSides {
        Side::iter()
            .filter(|s| self.get(*s).is_some())
            .fold(DoorSides::empty(), |acc, s| acc | s.flag())
    }

    /// Connected sides with their neighbour
    pub fn iter(&self) -> impl Iterator<Item = (Side, RoomId)> + '_ {
        Side::iter().filter_map(|s| self.get(s).map(|id| (s, id)))
    }
}

/// Interior coordinate to bordered grid coordinate
pub const fn to_grid(interior: Coord) -> Coord {
    interior.offset(BORDER as i32, BORDER as i32)
}

/// Bordered grid coordinate to interior coordinate
pub const fn to_interior(grid: Coord) -> Coord {
    grid.offset(-(BORDER as i32), -(BORDER as i32))
}

/// Whether a grid coordinate falls in the border ring of a `width x height` room
pub fn is_border(grid: Coord, width: usize, height: usize) -> bool {
    let b = BORDER as i32;
    grid.x < b || grid.y < b || grid.x >= width as i32 + b || grid.y >= height as i32 + b
}

/// Span of cells along one side, centred on that side's midpoint
///
/// All values are grid coordinates. The span is clipped to the interior
/// extent, so a window never reaches into the perimeter corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorWindow {
    side: Side,
    center: i32,
    first: i32,
    last: i32,
    /// Grid row (North/South) or column (East/West) that holds the door tiles
    line: i32,
}

impl DoorWindow {
    pub fn new(side: Side, width: usize, height: usize, half_width: usize) -> Self {
        let b = BORDER as i32;
        let extent = (if side.runs_along_x() { width } else { height }) as i32;
        let center = (extent + 2 * b) / 2;
        let half = half_width as i32;
        let line = match side {
            Side::North | Side::West => b - 1,
            Side::East => width as i32 + b,
            Side::South => height as i32 + b,
        };
        Self {
            side,
            center,
            first: (center - half).max(b),
            last: (center + half).min(extent + b - 1),
            line,
        }
    }

    /// The window in which door tiles are painted
    pub fn door(side: Side, width: usize, height: usize) -> Self {
        Self::new(side, width, height, DOOR_HALF_WIDTH)
    }

    /// The narrower window the map generator carves open behind a door
    pub fn corridor(side: Side, width: usize, height: usize) -> Self {
        Self::new(side, width, height, CORRIDOR_HALF_WIDTH)
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Grid coordinate of the window centre along the side's axis
    pub fn center(&self) -> i32 {
        self.center
    }

    /// Grid coordinates covered along the side's axis
    pub fn span(&self) -> std::ops::RangeInclusive<i32> {
        self.first..=self.last
    }

    /// Whether `grid` lies within the window along the side's axis
    pub fn covers(&self, grid: Coord) -> bool {
        let along = if self.side.runs_along_x() { grid.x } else { grid.y };
        self.span().contains(&along)
    }

    /// Whether `grid` is a door cell: on the door line and within the window
    pub fn contains(&self, grid: Coord) -> bool {
        let across = if self.side.runs_along_x() { grid.y } else { grid.x };
        across == self.line && self.covers(grid)
    }
}

/// Single predicate shared by corridor carving and door painting
pub fn is_within_door_window(side: Side, grid: Coord, width: usize, height: usize) -> bool {
    DoorWindow::door(side, width, height).contains(grid)
}

/// First interior cell behind the centre of a door, in interior coordinates
pub fn entry_cell(side: Side, width: usize, height: usize) -> Coord {
    let center = DoorWindow::door(side, width, height).center() - BORDER as i32;
    let (w, h) = (width as i32, height as i32);
    match side {
        Side::North => Coord::new(center, 0),
        Side::East => Coord::new(w - 1, center),
        Side::South => Coord::new(center, h - 1),
        Side::West => Coord::new(0, center),
    }
}

/// How far a door corridor reaches into the interior
pub fn corridor_depth(side: Side, width: usize, height: usize) -> usize {
    let across = if side.runs_along_x() { height } else { width };
    (across / 4).max(MIN_CORRIDOR_DEPTH).min(across)
}

/// Innermost cell on the centre line of a door corridor, in interior coordinates
pub fn corridor_end(side: Side, width: usize, height: usize) -> Coord {
    let depth = corridor_depth(side, width, height) as i32 - 1;
    let entry = entry_cell(side, width, height);
    match side {
        Side::North => entry.offset(0, depth),
        Side::East => entry.offset(-depth, 0),
        Side::South => entry.offset(0, -depth),
        Side::West => entry.offset(depth, 0),
    }
}

//! Binary cave maps
//!
//! Contains the bounds-checked grid type, the open/solid cell classification
//! and the cellular-automaton cave generator.

mod cell;
mod generator;
mod grid;
mod region;

pub use cell::{BinaryCell, BinaryGrid};
pub use generator::MapGenerator;
pub use grid::{Coord, Grid, PixelPos};
pub use region::RegionMap;

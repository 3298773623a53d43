//! Open/solid classification produced by the cave generator

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Grid;

/// A cell of the binary cave map
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum BinaryCell {
    Open,
    #[default]
    Solid,
}

impl BinaryCell {
    pub const fn is_open(self) -> bool {
        matches!(self, BinaryCell::Open)
    }

    pub const fn is_solid(self) -> bool {
        matches!(self, BinaryCell::Solid)
    }

    /// Debug display character
    pub const fn symbol(self) -> char {
        match self {
            BinaryCell::Open => '.',
            BinaryCell::Solid => '#',
        }
    }
}

/// Interior-sized map of open and solid cells
pub type BinaryGrid = Grid<BinaryCell>;

impl BinaryGrid {
    pub fn open_count(&self) -> usize {
        self.count(|c| c.is_open())
    }

    /// One line per row, `.` for open and `#` for solid
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for (c, cell) in self.iter() {
            if c.x == 0 && c.y > 0 {
                out.push('\n');
            }
            out.push(cell.symbol());
        }
        out
    }
}

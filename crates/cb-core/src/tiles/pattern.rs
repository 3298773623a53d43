//! Neighbour-pattern tile selection (autotiling)
//!
//! A [`Neighborhood`] is the 3x3 signature around a cell, stored row-major:
//! index `(dy + 1) * 3 + (dx + 1)`. Cells off the map are [`NeighborCell::Unknown`].
//! Each [`TilePattern`] turns any signature into a tile, so selection is total.

use strum::{EnumIter, IntoEnumIterator};

use super::{GroundVariant, Tile, WallVariant};
use crate::map::{Coord, Grid};

/// One entry of a neighbourhood signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum NeighborCell {
    /// Outside the map
    Unknown,
    #[default]
    Open,
    Solid,
}

impl NeighborCell {
    /// `0` is open, `1` is solid; anything else, including `-1`, is unknown
    pub const fn from_raw(raw: i8) -> Self {
        match raw {
            0 => NeighborCell::Open,
            1 => NeighborCell::Solid,
            _ => NeighborCell::Unknown,
        }
    }

    pub const fn to_raw(self) -> i8 {
        match self {
            NeighborCell::Unknown => -1,
            NeighborCell::Open => 0,
            NeighborCell::Solid => 1,
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, NeighborCell::Open)
    }
}

/// 3x3 signature centred on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Neighborhood([NeighborCell; 9]);

impl Neighborhood {
    /// All open: the signature used for uniform ground
    pub const OPEN: Neighborhood = Neighborhood([NeighborCell::Open; 9]);

    pub const fn new(cells: [NeighborCell; 9]) -> Self {
        Self(cells)
    }

    pub fn from_raw(raw: [i8; 9]) -> Self {
        Self(raw.map(NeighborCell::from_raw))
    }

    pub fn to_raw(&self) -> [i8; 9] {
        self.0.map(NeighborCell::to_raw)
    }

    /// Signature of `c` in a wall mask, where `true` is solid
    pub fn around(mask: &Grid<bool>, c: Coord) -> Self {
        let mut cells = [NeighborCell::Unknown; 9];
        for dy in -1..=1 {
            for dx in -1..=1 {
                cells[Self::slot(dx, dy)] = match mask.get(c.offset(dx, dy)) {
                    Some(true) => NeighborCell::Solid,
                    Some(false) => NeighborCell::Open,
                    None => NeighborCell::Unknown,
                };
            }
        }
        Self(cells)
    }

    const fn slot(dx: i32, dy: i32) -> usize {
        ((dy + 1) * 3 + (dx + 1)) as usize
    }

    /// Entry at offset `(dx, dy)`, each in `-1..=1`
    pub const fn at(&self, dx: i32, dy: i32) -> NeighborCell {
        self.0[Self::slot(dx, dy)]
    }

    /// Every signature over the three cell values, 3^9 in all
    pub fn all() -> impl Iterator<Item = Neighborhood> {
        (0..3u32.pow(9)).map(|mut n| {
            let mut cells = [NeighborCell::Unknown; 9];
            for cell in &mut cells {
                *cell = NeighborCell::iter()
                    .nth((n % 3) as usize)
                    .unwrap_or_default();
                n /= 3;
            }
            Neighborhood(cells)
        })
    }
}

/// Chooses a tile from a neighbourhood signature
pub trait TilePattern {
    fn tile_for(&self, neighborhood: &Neighborhood) -> Tile;
}

/// Floor selection; shades floor that sits directly below a wall
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundPattern;

impl GroundPattern {
    pub fn select_variant(&self, n: &Neighborhood) -> GroundVariant {
        match n.at(0, -1) {
            NeighborCell::Solid => GroundVariant::Shaded,
            NeighborCell::Open | NeighborCell::Unknown => GroundVariant::Plain,
        }
    }
}

impl TilePattern for GroundPattern {
    fn tile_for(&self, neighborhood: &Neighborhood) -> Tile {
        Tile::Ground(self.select_variant(neighborhood))
    }
}

/// Wall selection from which neighbours are open
///
/// Only `Open` neighbours break a wall's outline: `Unknown` cells lie beyond
/// the interior, where the perimeter wall continues, so they join like `Solid`.
/// The centre entry is ignored. A wall with no open orthogonal neighbour
/// takes the first inner corner whose diagonal is open (NE, SE, SW, NW), or
/// `Solid`, the fallback variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallPattern;

impl WallPattern {
    pub fn select_variant(&self, n: &Neighborhood) -> WallVariant {
        let north = n.at(0, -1).is_open();
        let east = n.at(1, 0).is_open();
        let south = n.at(0, 1).is_open();
        let west = n.at(-1, 0).is_open();

        match (north, east, south, west) {
            (true, true, true, true) => WallVariant::Pillar,

            (true, true, false, true) => WallVariant::TipNorth,
            (true, true, true, false) => WallVariant::TipEast,
            (false, true, true, true) => WallVariant::TipSouth,
            (true, false, true, true) => WallVariant::TipWest,

            (true, false, true, false) => WallVariant::Horizontal,
            (false, true, false, true) => WallVariant::Vertical,

            (true, true, false, false) => WallVariant::CornerNorthEast,
            (false, true, true, false) => WallVariant::CornerSouthEast,
            (false, false, true, true) => WallVariant::CornerSouthWest,
            (true, false, false, true) => WallVariant::CornerNorthWest,

            (true, false, false, false) => WallVariant::EdgeNorth,
            (false, true, false, false) => WallVariant::EdgeEast,
            (false, false, true, false) => WallVariant::EdgeSouth,
            (false, false, false, true) => WallVariant::EdgeWest,

            (false, false, false, false) => {
                if n.at(1, -1).is_open() {
                    WallVariant::InnerNorthEast
                } else if n.at(1, 1).is_open() {
                    WallVariant::InnerSouthEast
                } else if n.at(-1, 1).is_open() {
                    WallVariant::InnerSouthWest
                } else if n.at(-1, -1).is_open() {
                    WallVariant::InnerNorthWest
                } else {
                    WallVariant::Solid
                }
            }
        }
    }
}

impl TilePattern for WallPattern {
    fn tile_for(&self, neighborhood: &Neighborhood) -> Tile {
        Tile::Wall(self.select_variant(neighborhood))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const U: i8 = -1;

    #[test]
    fn test_raw_round_trip_and_unknowns() {
        let raw = [U, 0, 1, 0, 1, 0, 1, 0, U];
        assert_eq!(Neighborhood::from_raw(raw).to_raw(), raw);
        assert_eq!(NeighborCell::from_raw(7), NeighborCell::Unknown);
    }

    #[test]
    fn test_index_order_is_row_major() {
        let n = Neighborhood::from_raw([1, 0, 0, 0, 0, 0, 0, 0, U]);
        assert_eq!(n.at(-1, -1), NeighborCell::Solid);
        assert_eq!(n.at(1, 1), NeighborCell::Unknown);
        assert_eq!(n.at(0, 0), NeighborCell::Open);
    }

    #[test]
    fn test_all_signatures_enumerated_once() {
        let all: HashSet<_> = Neighborhood::all().collect();
        assert_eq!(all.len(), 19_683);
    }

    #[test]
    fn test_wall_pattern_is_total() {
        let mut used = HashSet::new();
        for n in Neighborhood::all() {
            let variant = WallPattern.select_variant(&n);
            assert_ne!(variant, WallVariant::Perimeter);
            used.insert(variant);
            assert_eq!(WallPattern.tile_for(&n), Tile::Wall(variant));
        }
        // Every variant except the perimeter ring is reachable
        assert_eq!(used.len(), WallVariant::iter().count() - 1);
    }

    #[test]
    fn test_ground_pattern_is_total() {
        for n in Neighborhood::all() {
            assert!(matches!(GroundPattern.tile_for(&n), Tile::Ground(_)));
        }
        assert_eq!(
            GroundPattern.tile_for(&Neighborhood::OPEN),
            Tile::Ground(GroundVariant::Plain)
        );
        let under_wall = Neighborhood::from_raw([0, 1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(GroundPattern.select_variant(&under_wall), GroundVariant::Shaded);
    }

    #[test]
    fn test_wall_variants() {
        let solid = Neighborhood::from_raw([1; 9]);
        assert_eq!(WallPattern.select_variant(&solid), WallVariant::Solid);

        let top_edge = Neighborhood::from_raw([0, 0, 0, 1, 1, 1, 1, 1, 1]);
        assert_eq!(WallPattern.select_variant(&top_edge), WallVariant::EdgeNorth);

        let corner = Neighborhood::from_raw([0, 0, 0, 1, 1, 0, 1, 1, 0]);
        assert_eq!(
            WallPattern.select_variant(&corner),
            WallVariant::CornerNorthEast
        );

        let inner = Neighborhood::from_raw([1, 1, 1, 1, 1, 1, 1, 1, 0]);
        assert_eq!(
            WallPattern.select_variant(&inner),
            WallVariant::InnerSouthEast
        );

        let pillar = Neighborhood::from_raw([1, 0, 1, 0, 1, 0, 1, 0, 1]);
        assert_eq!(WallPattern.select_variant(&pillar), WallVariant::Pillar);

        let beam = Neighborhood::from_raw([0, 0, 0, 1, 1, 1, 0, 0, 0]);
        assert_eq!(WallPattern.select_variant(&beam), WallVariant::Horizontal);
    }

    #[test]
    fn test_unknown_joins_like_solid() {
        let at_edge = Neighborhood::from_raw([U, U, U, 1, 1, 1, 0, 0, 0]);
        assert_eq!(WallPattern.select_variant(&at_edge), WallVariant::EdgeSouth);
        let all_unknown = Neighborhood::from_raw([U; 9]);
        assert_eq!(WallPattern.select_variant(&all_unknown), WallVariant::Solid);
    }

    #[test]
    fn test_around_marks_off_map_unknown() {
        let mut mask: Grid<bool> = Grid::new(2, 2);
        mask.set(Coord::new(1, 0), true).unwrap();
        let n = Neighborhood::around(&mask, Coord::new(0, 0));
        assert_eq!(n.to_raw(), [U, U, U, U, 0, 1, U, 0, 0]);
    }
}

//! Binary map to wall mask and spawn point

use crate::map::{BinaryGrid, Coord, Grid};

/// `true` where a wall stands; interior-sized
pub type WallMask = Grid<bool>;

/// Derives the foreground wall mask and the spawn cell from a binary map
#[derive(Debug, Clone, Copy)]
pub struct RoomGenerator<'a> {
    map: &'a BinaryGrid,
}

impl<'a> RoomGenerator<'a> {
    pub fn new(map: &'a BinaryGrid) -> Self {
        Self { map }
    }

    /// Wall wherever the map is Solid
    pub fn derive_foreground_mask(&self) -> WallMask {
        self.map.map(|_, cell| cell.is_solid())
    }

    /// The open cell nearest the interior centre
    ///
    /// Distance is squared Euclidean from `(width / 2, height / 2)`; ties go to
    /// the first cell in row-major order. Returns `None` only when the mask has
    /// no open cell at all.
    pub fn derive_spawn(&self, mask: &WallMask) -> Option<Coord> {
        let center = Coord::new(mask.width() as i32 / 2, mask.height() as i32 / 2);
        mask.iter()
            .filter(|(_, wall)| !**wall)
            .map(|(c, _)| c)
            .min_by_key(|c| (c.dist2(center), c.y, c.x))
    }
}

/// Number of open cells in a wall mask
pub fn open_cells(mask: &WallMask) -> usize {
    mask.count(|wall| !*wall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::BinaryCell;

    fn map_from(rows: &[&str]) -> BinaryGrid {
        let mut map = BinaryGrid::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    map[Coord::new(x as i32, y as i32)] = BinaryCell::Open;
                }
            }
        }
        map
    }

    #[test]
    fn test_mask_mirrors_solid_cells() {
        let map = map_from(&["#.#", "..#"]);
        let mask = RoomGenerator::new(&map).derive_foreground_mask();
        assert_eq!(mask.width(), 3);
        assert_eq!(mask.height(), 2);
        assert!(mask[Coord::new(0, 0)]);
        assert!(!mask[Coord::new(1, 0)]);
        assert!(!mask[Coord::new(0, 1)]);
        assert!(mask[Coord::new(2, 1)]);
        assert_eq!(open_cells(&mask), 3);
    }

    #[test]
    fn test_spawn_prefers_centre() {
        let map = map_from(&[".....", ".....", ".....", "....."]);
        let generator = RoomGenerator::new(&map);
        let mask = generator.derive_foreground_mask();
        assert_eq!(generator.derive_spawn(&mask), Some(Coord::new(2, 2)));
    }

    #[test]
    fn test_spawn_never_solid() {
        let map = map_from(&["#####", "#####", "###.#", "#...#"]);
        let generator = RoomGenerator::new(&map);
        let mask = generator.derive_foreground_mask();
        let spawn = generator.derive_spawn(&mask).unwrap();
        assert!(!mask[spawn]);
        assert_eq!(spawn, Coord::new(3, 2));
    }

    #[test]
    fn test_spawn_tie_break_is_row_major() {
        // (0,1) and (4,1) are both 2 cells from the centre (2,1)
        let map = map_from(&["#####", ".###.", "#####"]);
        let generator = RoomGenerator::new(&map);
        let mask = generator.derive_foreground_mask();
        assert_eq!(generator.derive_spawn(&mask), Some(Coord::new(0, 1)));
    }

    #[test]
    fn test_no_open_cell_has_no_spawn() {
        let map = BinaryGrid::new(4, 4);
        let generator = RoomGenerator::new(&map);
        let mask = generator.derive_foreground_mask();
        assert_eq!(generator.derive_spawn(&mask), None);
    }
}

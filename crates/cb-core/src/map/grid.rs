//! Rectangular grids addressed by integer coordinates

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{RoomError, TILE_HEIGHT, TILE_WIDTH};

/// A cell address in grid space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Squared Euclidean distance
    pub const fn dist2(self, other: Coord) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// The four orthogonal neighbours, in N, E, S, W order
    pub const fn neighbors4(self) -> [Coord; 4] {
        [
            self.offset(0, -1),
            self.offset(1, 0),
            self.offset(0, 1),
            self.offset(-1, 0),
        ]
    }

    /// Top-left pixel of this cell
    pub const fn to_pixels(self) -> PixelPos {
        PixelPos {
            x: self.x * TILE_WIDTH,
            y: self.y * TILE_HEIGHT,
        }
    }
}

/// A position in pixel space (grid coordinate times tile size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const ORIGIN: PixelPos = PixelPos { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Owned row-major buffer of `width * height` cells
///
/// Reads and writes through [`Grid::get`] and [`Grid::set`] are bounds-checked;
/// indexing with a [`Coord`] panics out of range like slice indexing does and
/// is meant for coordinates produced by [`Grid::coords`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell at its default value
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Build a new grid by applying `f` to every cell
    pub fn map<U>(&self, mut f: impl FnMut(Coord, &T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self
                .coords()
                .zip(self.cells.iter())
                .map(|(c, v)| f(c, v))
                .collect(),
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.width && (c.y as usize) < self.height
    }

    fn offset_of(&self, c: Coord) -> Option<usize> {
        self.contains(c)
            .then(|| c.y as usize * self.width + c.x as usize)
    }

    fn out_of_bounds(&self, c: Coord) -> RoomError {
        RoomError::OutOfBounds {
            x: c.x,
            y: c.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Bounds-checked read; `None` outside the grid
    pub fn get(&self, c: Coord) -> Option<&T> {
        self.offset_of(c).map(|i| &self.cells[i])
    }

    /// Bounds-checked read that reports out-of-range coordinates as an error
    pub fn try_get(&self, c: Coord) -> Result<&T, RoomError> {
        self.get(c).ok_or_else(|| self.out_of_bounds(c))
    }

    /// Bounds-checked write
    pub fn set(&mut self, c: Coord, value: T) -> Result<(), RoomError> {
        match self.offset_of(c) {
            Some(i) => {
                self.cells[i] = value;
                Ok(())
            }
            None => Err(self.out_of_bounds(c)),
        }
    }

    /// Write only when `c` is inside the grid; returns whether it was
    pub fn set_clipped(&mut self, c: Coord, value: T) -> bool {
        match self.offset_of(c) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Cells paired with their coordinates, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.coords().zip(self.cells.iter())
    }

    /// Number of cells matching `pred`
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.cells.iter().filter(|v| pred(v)).count()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, c: Coord) -> &T {
        match self.offset_of(c) {
            Some(i) => &self.cells[i],
            None => panic!(
                "coordinate ({}, {}) outside {}x{} grid",
                c.x, c.y, self.width, self.height
            ),
        }
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, c: Coord) -> &mut T {
        match self.offset_of(c) {
            Some(i) => &mut self.cells[i],
            None => panic!(
                "coordinate ({}, {}) outside {}x{} grid",
                c.x, c.y, self.width, self.height
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_default_filled() {
        let grid: Grid<u8> = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.count(|v| *v == 0), 12);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid: Grid<u8> = Grid::new(4, 3);
        grid.set(Coord::new(3, 2), 7).unwrap();
        assert_eq!(grid.get(Coord::new(3, 2)), Some(&7));
        assert_eq!(grid[Coord::new(3, 2)], 7);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut grid: Grid<u8> = Grid::new(4, 3);
        assert_eq!(grid.get(Coord::new(4, 0)), None);
        assert_eq!(grid.get(Coord::new(-1, 0)), None);
        assert_eq!(
            grid.set(Coord::new(0, 3), 1),
            Err(RoomError::OutOfBounds {
                x: 0,
                y: 3,
                width: 4,
                height: 3
            })
        );
        assert!(grid.try_get(Coord::new(0, -1)).is_err());
        assert!(!grid.set_clipped(Coord::new(9, 9), 1));
        assert_eq!(grid.count(|v| *v != 0), 0);
    }

    #[test]
    fn test_coords_are_row_major() {
        let grid: Grid<u8> = Grid::new(2, 2);
        let coords: Vec<_> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_map_preserves_shape() {
        let mut grid: Grid<u8> = Grid::new(3, 2);
        grid.set(Coord::new(1, 1), 5).unwrap();
        let doubled = grid.map(|_, v| u32::from(*v) * 2);
        assert_eq!(doubled.width(), 3);
        assert_eq!(doubled[Coord::new(1, 1)], 10);
    }

    #[test]
    fn test_to_pixels() {
        assert_eq!(
            Coord::new(2, 3).to_pixels(),
            PixelPos::new(2 * TILE_WIDTH, 3 * TILE_HEIGHT)
        );
    }
}

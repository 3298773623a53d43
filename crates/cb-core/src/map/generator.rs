//! Cellular-automaton cave carving
//!
//! The generator seeds an interior-sized grid with random solid cells, smooths
//! it into organic caves, then opens a straight corridor behind every door and
//! makes sure all doors share a single open region.

use log::{debug, trace};

use super::{BinaryCell, BinaryGrid, Coord, RegionMap};
use crate::level::door::{self, DoorSides, DoorWindow, Side};
use crate::rng::RoomRng;
use crate::{BORDER, GeneratorConfig, MAX_DENSITY, MAX_ROOM_DIMENSION, RoomError};

/// Produces the binary open/solid map for one room interior
#[derive(Debug, Clone)]
pub struct MapGenerator<'a> {
    width: usize,
    height: usize,
    density: u8,
    config: &'a GeneratorConfig,
}

impl<'a> MapGenerator<'a> {
    /// Validate the room size, cave density and generator config
    pub fn new(
        width: usize,
        height: usize,
        density: u8,
        config: &'a GeneratorConfig,
    ) -> Result<Self, RoomError> {
        if width == 0 || height == 0 || width > MAX_ROOM_DIMENSION || height > MAX_ROOM_DIMENSION
        {
            return Err(RoomError::InvalidDimension { width, height });
        }
        if density > MAX_DENSITY {
            return Err(RoomError::InvalidDensity(density));
        }
        config.validate()?;
        Ok(Self {
            width,
            height,
            density,
            config,
        })
    }

    /// Generate a map with corridors opened on every side in `doors`
    ///
    /// The result always has at least one open cell, and all open cells form
    /// a single 4-connected region that touches every requested door.
    pub fn generate(&self, doors: DoorSides, rng: &mut RoomRng) -> BinaryGrid {
        let fill = self.config.fill_percent(self.density);
        let mut map = self.seed(fill, rng);
        for pass in 0..self.config.smoothing_passes {
            map = smooth(&map, self.config.solid_threshold);
            trace!("smoothing pass {}: {} open cells", pass, map.open_count());
        }

        for side in doors.sides() {
            self.carve_corridor(&mut map, side);
        }
        self.connect_doors(&mut map, doors);
        self.ensure_open(&mut map);
        self.fill_pockets(&mut map, doors);

        debug!(
            "generated {}x{} cave at density {} (fill {}%): {} open cells",
            self.width,
            self.height,
            self.density,
            fill,
            map.open_count()
        );
        map
    }

    /// Random initial state, optionally enclosed by a solid ring
    fn seed(&self, fill: u32, rng: &mut RoomRng) -> BinaryGrid {
        let mut map = BinaryGrid::new(self.width, self.height);
        let (w, h) = (self.width as i32, self.height as i32);
        for c in map.coords() {
            let solid = rng.percent(fill);
            let edge = c.x == 0 || c.y == 0 || c.x == w - 1 || c.y == h - 1;
            map[c] = if solid || (edge && self.config.solid_border) {
                BinaryCell::Solid
            } else {
                BinaryCell::Open
            };
        }
        map
    }

    /// Open a straight corridor from the side's edge inward
    fn carve_corridor(&self, map: &mut BinaryGrid, side: Side) {
        let window = DoorWindow::corridor(side, self.width, self.height);
        let depth = door::corridor_depth(side, self.width, self.height) as i32;
        let (w, h) = (self.width as i32, self.height as i32);
        let b = BORDER as i32;

        for along in window.span() {
            let along = along - b;
            for step in 0..depth {
                let c = match side {
                    Side::North => Coord::new(along, step),
                    Side::East => Coord::new(w - 1 - step, along),
                    Side::South => Coord::new(along, h - 1 - step),
                    Side::West => Coord::new(step, along),
                };
                map.set_clipped(c, BinaryCell::Open);
            }
        }
    }

    /// Tunnel from any door the caves did not already join to the first door
    fn connect_doors(&self, map: &mut BinaryGrid, doors: DoorSides) {
        let mut sides = doors.sides();
        let Some(first) = sides.next() else {
            return;
        };
        let hub_entry = door::entry_cell(first, self.width, self.height);
        let hub_end = door::corridor_end(first, self.width, self.height);

        for side in sides {
            let entry = door::entry_cell(side, self.width, self.height);
            if RegionMap::label(map).connected(hub_entry, entry) {
                continue;
            }
            debug!("door {} is cut off from door {}; tunnelling", side, first);
            let end = door::corridor_end(side, self.width, self.height);
            carve_tunnel(map, end, hub_end);
        }
    }

    /// Carve a small chamber at the centre of a fully solid map
    fn ensure_open(&self, map: &mut BinaryGrid) {
        if map.open_count() > 0 {
            return;
        }
        let center = Coord::new(self.width as i32 / 2, self.height as i32 / 2);
        debug!("cave sealed completely; opening a chamber at {:?}", center);
        for dy in -1..=1 {
            for dx in -1..=1 {
                map.set_clipped(center.offset(dx, dy), BinaryCell::Open);
            }
        }
    }

    /// Close every open pocket outside the main region
    fn fill_pockets(&self, map: &mut BinaryGrid, doors: DoorSides) {
        let regions = RegionMap::label(map);
        let main = match doors.sides().next() {
            Some(side) => regions.region_of(door::entry_cell(side, self.width, self.height)),
            None => regions.largest(),
        };
        if regions.len() <= 1 {
            return;
        }
        for c in map.coords() {
            if map[c].is_open() && regions.region_of(c) != main {
                map[c] = BinaryCell::Solid;
            }
        }
    }
}

/// Number of solid cells among the 8 neighbours; outside the map counts as solid
fn solid_neighbors(map: &BinaryGrid, c: Coord) -> u32 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if map.get(c.offset(dx, dy)).is_none_or(|cell| cell.is_solid()) {
                count += 1;
            }
        }
    }
    count
}

/// One automaton step: Solid iff more than `threshold` neighbours are Solid
fn smooth(map: &BinaryGrid, threshold: u32) -> BinaryGrid {
    map.map(|c, _| {
        if solid_neighbors(map, c) > threshold {
            BinaryCell::Solid
        } else {
            BinaryCell::Open
        }
    })
}

/// Three-wide L-shaped tunnel: along x at `from.y`, then along y at `to.x`
fn carve_tunnel(map: &mut BinaryGrid, from: Coord, to: Coord) {
    let (x0, x1) = (from.x.min(to.x), from.x.max(to.x));
    for x in x0..=x1 {
        for dy in -1..=1 {
            map.set_clipped(Coord::new(x, from.y + dy), BinaryCell::Open);
        }
    }
    let (y0, y1) = (from.y.min(to.y), from.y.max(to.y));
    for y in y0..=y1 {
        for dx in -1..=1 {
            map.set_clipped(Coord::new(to.x + dx, y), BinaryCell::Open);
        }
    }
}

//! The room orchestrator
//!
//! A [`Room`] owns four tile layers sized to its interior plus a two-cell
//! border on every side. Generation runs the cave generator, derives the wall
//! mask and spawn, then paints ground, walls, doors and the spawn marker.

use log::{debug, warn};
use strum::{Display, IntoEnumIterator};

use super::door::{self, Connections, Side};
use super::room_gen::{RoomGenerator, WallMask};
use super::{EntityId, LevelId, RoomId};
use crate::map::{Coord, MapGenerator, PixelPos};
use crate::tiles::{
    DoorLink, GroundPattern, Neighborhood, Tile, TileLayer, TileMap, TilePattern, WallPattern,
};
use crate::{BORDER, GeneratorConfig, LAYER_COUNT, MAX_ROOM_DIMENSION, RoomError, RoomRng};

/// Lifecycle of a room; generation is the only transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum RoomState {
    #[default]
    Uninitialized,
    Generated,
}

/// A rectangular playable area with up to four neighbouring rooms
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    level: LevelId,
    width: usize,
    height: usize,
    /// Indexed by [`TileLayer::index`]
    layers: [TileMap; LAYER_COUNT],
    connections: Connections,
    state: RoomState,
    /// Grid coordinate of the spawn marker
    player_spawn: Option<Coord>,
    start_pos: Option<PixelPos>,
    entities: Vec<EntityId>,
}

fn blank_layers(width: usize, height: usize) -> [TileMap; LAYER_COUNT] {
    std::array::from_fn(|_| TileMap::new(width + 2 * BORDER, height + 2 * BORDER))
}

impl Room {
    /// Create an ungenerated room with a `width x height` interior
    pub fn new(
        id: RoomId,
        level: LevelId,
        width: usize,
        height: usize,
        connections: Connections,
    ) -> Result<Self, RoomError> {
        if width == 0 || height == 0 || width > MAX_ROOM_DIMENSION || height > MAX_ROOM_DIMENSION
        {
            return Err(RoomError::InvalidDimension { width, height });
        }
        Ok(Self {
            id,
            level,
            width,
            height,
            layers: blank_layers(width, height),
            connections,
            state: RoomState::Uninitialized,
            player_spawn: None,
            start_pos: None,
            entities: Vec::new(),
        })
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn level(&self) -> LevelId {
        self.level
    }

    /// Interior width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Interior height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the tile layers, border included
    pub fn grid_width(&self) -> usize {
        self.width + 2 * BORDER
    }

    /// Height of the tile layers, border included
    pub fn grid_height(&self) -> usize {
        self.height + 2 * BORDER
    }

    pub fn connections(&self) -> &Connections {
        &self.connections
    }

    pub fn state(&self) -> RoomState {
        self.state
    }

    pub fn is_generated(&self) -> bool {
        self.state == RoomState::Generated
    }

    /// Grid coordinate of the spawn, once generated
    pub fn player_spawn(&self) -> Option<Coord> {
        self.player_spawn
    }

    /// Pixel position computed by the last [`Room::compute_entry`]
    pub fn start_pos(&self) -> Option<PixelPos> {
        self.start_pos
    }

    /// Generate the room's layers
    ///
    /// Runs at most once per room: a second call fails with
    /// [`RoomError::AlreadyGenerated`]. On any error the room stays
    /// uninitialized with blank layers.
    pub fn generate_room(
        &mut self,
        cave_density: u8,
        config: &GeneratorConfig,
        rng: &mut RoomRng,
    ) -> Result<(), RoomError> {
        if self.is_generated() {
            return Err(RoomError::AlreadyGenerated(self.id));
        }
        config.validate()?;

        let doors = self.connections.door_sides();
        let min_open = (self.width * self.height * usize::from(config.min_open_percent))
            .div_ceil(100);
        let mut density = cave_density;
        let mut attempts = 0;
        let map = loop {
            attempts += 1;
            let map = MapGenerator::new(self.width, self.height, density, config)?
                .generate(doors, rng);
            let open = map.open_count();
            if open >= min_open {
                break map;
            }
            if attempts >= config.max_attempts {
                warn!(
                    "room {}: keeping attempt {} with {} open cells (wanted {})",
                    self.id, attempts, open, min_open
                );
                break map;
            }
            warn!(
                "room {}: attempt {} at density {} left {} open cells (wanted {}), retrying",
                self.id, attempts, density, open, min_open
            );
            density = density.saturating_sub(config.density_retry_step);
        };

        let generator = RoomGenerator::new(&map);
        let mask = generator.derive_foreground_mask();
        let spawn = generator
            .derive_spawn(&mask)
            .map(door::to_grid)
            .ok_or(RoomError::NoReachableSpawn { attempts })?;

        let mut layers = blank_layers(self.width, self.height);
        self.paint_background(&mut layers[TileLayer::Background.index()], &GroundPattern)?;
        self.paint_foreground(
            &mut layers[TileLayer::Foreground.index()],
            &mask,
            &WallPattern,
        )?;
        layers[TileLayer::Spawner.index()].set_tile(spawn.x, spawn.y, Tile::Spawner)?;
        layers[TileLayer::Misc.index()] = self.layers[TileLayer::Misc.index()].clone();

        self.layers = layers;
        self.player_spawn = Some(spawn);
        self.state = RoomState::Generated;
        debug!(
            "room {}: generated {}x{} after {} attempt(s), spawn at {:?}",
            self.id, self.width, self.height, attempts, spawn
        );
        Ok(())
    }

    /// Uniform ground under the whole interior
    fn paint_background(
        &self,
        layer: &mut TileMap,
        pattern: &impl TilePattern,
    ) -> Result<(), RoomError> {
        let tile = pattern.tile_for(&Neighborhood::OPEN);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let c = door::to_grid(Coord::new(x, y));
                layer.set_tile(c.x, c.y, tile)?;
            }
        }
        Ok(())
    }

    /// Perimeter walls and doors on the border ring, autotiled walls inside
    fn paint_foreground(
        &self,
        layer: &mut TileMap,
        mask: &WallMask,
        pattern: &impl TilePattern,
    ) -> Result<(), RoomError> {
        for y in 0..self.grid_height() as i32 {
            for x in 0..self.grid_width() as i32 {
                let c = Coord::new(x, y);
                let tile = if door::is_border(c, self.width, self.height) {
                    match self.border_door(c) {
                        Some(link) => Tile::Door(link),
                        None => Tile::PERIMETER,
                    }
                } else {
                    let interior = door::to_interior(c);
                    if !mask[interior] {
                        continue;
                    }
                    pattern.tile_for(&Neighborhood::around(mask, interior))
                };
                layer.set_tile(x, y, tile)?;
            }
        }
        Ok(())
    }

    /// Door leading out through border cell `c`, if any
    fn border_door(&self, c: Coord) -> Option<DoorLink> {
        self.connections
            .iter()
            .find(|(side, _)| door::is_within_door_window(*side, c, self.width, self.height))
            .map(|(_, target)| DoorLink {
                level: self.level,
                target,
            })
    }

    /// Side through which a room entered from `entered_from` is reached
    pub fn entry_side(&self, entered_from: Option<RoomId>) -> Option<Side> {
        let from = entered_from?;
        let side = self.connections.side_of(from);
        if side.is_none() {
            debug!(
                "room {}: entered from unconnected room {}, using spawn",
                self.id, from
            );
        }
        side
    }

    /// Where an entity arriving from `entered_from` appears, in pixels
    ///
    /// Arrivals through a door land on the first interior cell behind the
    /// door's centre. A fresh entry (`None`) or a room that is not a neighbour
    /// lands on the spawn. The result is also kept as [`Room::start_pos`].
    pub fn compute_entry(
        &mut self,
        entered_from: Option<RoomId>,
    ) -> Result<PixelPos, RoomError> {
        let spawn = self.player_spawn.ok_or(RoomError::NotGenerated(self.id))?;
        let pos = match self.entry_side(entered_from) {
            Some(side) => {
                door::to_grid(door::entry_cell(side, self.width, self.height)).to_pixels()
            }
            None => spawn.to_pixels(),
        };
        self.start_pos = Some(pos);
        Ok(pos)
    }

    pub fn layer(&self, layer: TileLayer) -> &TileMap {
        &self.layers[layer.index()]
    }

    /// Bounds-checked tile lookup in grid coordinates
    pub fn tile_at(&self, layer: TileLayer, x: i32, y: i32) -> Result<Option<Tile>, RoomError> {
        self.layer(layer).tile(x, y)
    }

    /// Place a decoration tile
    ///
    /// Only [`TileLayer::Misc`] is writable; the other layers belong to
    /// generation. Decorations placed before generation are kept.
    pub fn set_tile(
        &mut self,
        layer: TileLayer,
        x: i32,
        y: i32,
        tile: Tile,
    ) -> Result<(), RoomError> {
        if layer != TileLayer::Misc {
            return Err(RoomError::ReadOnlyLayer(layer));
        }
        self.layers[layer.index()].set_tile(x, y, tile)
    }

    /// The door at `(x, y)` on the foreground layer, for the level to act on
    pub fn door_link_at(&self, x: i32, y: i32) -> Result<Option<DoorLink>, RoomError> {
        Ok(self
            .tile_at(TileLayer::Foreground, x, y)?
            .and_then(|tile| tile.door_link()))
    }

    /// Associate an entity with this room; returns false if it already was
    pub fn add_entity(&mut self, entity: EntityId) -> bool {
        if self.entities.contains(&entity) {
            return false;
        }
        self.entities.push(entity);
        true
    }

    pub fn remove_entity(&mut self, entity: EntityId) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| *e != entity);
        self.entities.len() != before
    }

    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    /// Composed layers as text, topmost non-empty tile per cell
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.grid_width() + 1) * self.grid_height());
        for y in 0..self.grid_height() as i32 {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.grid_width() as i32 {
                let top = TileLayer::iter()
                    .rev()
                    .find_map(|layer| self.tile_at(layer, x, y).ok().flatten());
                out.push(top.map_or(' ', |tile| tile.to_ascii()));
            }
        }
        out
    }
}

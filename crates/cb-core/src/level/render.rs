//! Viewport-clipped drawing of a room's layers

use std::ops::Range;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use super::Room;
use crate::tiles::{Tile, TileLayer};
use crate::{TILE_HEIGHT, TILE_WIDTH};

/// Camera rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Column and row ranges whose cells intersect this viewport, clamped to the grid
    pub fn visible_cells(&self, grid_width: usize, grid_height: usize) -> (Range<i32>, Range<i32>) {
        (
            visible_span(self.x, self.width, TILE_WIDTH, grid_width),
            visible_span(self.y, self.height, TILE_HEIGHT, grid_height),
        )
    }
}

fn visible_span(origin: i32, extent: i32, tile: i32, cells: usize) -> Range<i32> {
    if extent <= 0 {
        return 0..0;
    }
    let start = origin.div_euclid(tile).clamp(0, cells as i32);
    let end = origin
        .saturating_add(extent)
        .saturating_add(tile - 1)
        .div_euclid(tile)
        .min(cells as i32);
    start..end.max(start)
}

/// Draw target for [`Room::render`]
pub trait TileRenderer {
    /// Draw `tile` with its top-left corner at the given screen position
    fn draw_tile(&mut self, layer: TileLayer, tile: &Tile, screen_x: i32, screen_y: i32);
}

impl Room {
    /// Draw every non-empty cell intersecting `viewport`, layer by layer
    ///
    /// Layers go Background, Foreground, Spawner, Misc, so later layers land
    /// on top. Reads only; nothing is generated here.
    pub fn render(&self, viewport: &Viewport, renderer: &mut impl TileRenderer) {
        let (columns, rows) = viewport.visible_cells(self.grid_width(), self.grid_height());
        for layer in TileLayer::iter() {
            let map = self.layer(layer);
            for y in rows.clone() {
                for x in columns.clone() {
                    if let Ok(Some(tile)) = map.tile(x, y) {
                        renderer.draw_tile(
                            layer,
                            &tile,
                            (x * TILE_WIDTH).saturating_sub(viewport.x),
                            (y * TILE_HEIGHT).saturating_sub(viewport.y),
                        );
                    }
                }
            }
        }
    }
}

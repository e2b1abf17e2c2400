//! Web-Mercator tile math and viewport projection for the map panel.
//!
//! Markers, circles, and tile images are all placed in the same Mercator
//! pixel space so they line up with standard slippy-map tiles.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use std::f64::consts::PI;

use records::{BoundingBox, LatLon};

pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the square Web-Mercator world.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

const EARTH_CIRCUMFERENCE_KM: f64 = 40_075.016_686;

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

/// A position in world pixels at some zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

#[must_use]
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1_u32 << zoom.min(22))
}

/// Project to world pixels. Latitude is clamped to the Mercator limit.
#[must_use]
pub fn project(zoom: u8, point: LatLon) -> Pixel {
    let size = world_size(zoom);
    let lat = point.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let x = (point.lon + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    Pixel { x, y }
}

/// Tile containing `point` at `zoom`.
#[must_use]
pub fn lat_lon_to_tile(zoom: u8, point: LatLon) -> TileCoord {
    let px = project(zoom, point);
    let max = (1_u32 << zoom.min(22)) - 1;
    TileCoord { z: zoom, x: tile_index(px.x, max), y: tile_index(px.y, max) }
}

fn tile_index(pixel: f64, max: u32) -> u32 {
    let idx = (pixel / TILE_SIZE).floor().max(0.0);
    // Bounded by `max` below, and `max` fits in u32.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let idx = idx.min(f64::from(max)) as u32;
    idx
}

/// Every tile intersecting `bbox`, row by row from the north-west corner.
#[must_use]
pub fn tiles_covering(bbox: &BoundingBox, zoom: u8) -> Vec<TileCoord> {
    let nw = lat_lon_to_tile(zoom, LatLon::new(bbox.north, bbox.west));
    let se = lat_lon_to_tile(zoom, LatLon::new(bbox.south, bbox.east));
    (nw.y..=se.y)
        .flat_map(|y| (nw.x..=se.x).map(move |x| TileCoord { z: zoom, x, y }))
        .collect()
}

/// Expand a `{z}/{x}/{y}` tile URL template. `{s}` picks a subdomain
/// deterministically so a tile always maps to the same host.
#[must_use]
pub fn tile_url(template: &str, tile: TileCoord) -> String {
    let sub = SUBDOMAINS[((tile.x + tile.y) % 3) as usize];
    template
        .replace("{s}", sub)
        .replace("{z}", &tile.z.to_string())
        .replace("{x}", &tile.x.to_string())
        .replace("{y}", &tile.y.to_string())
}

/// A fixed map window: a zoom level plus its north-west pixel origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: u8,
    pub origin: Pixel,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Viewport whose top-left corner is the north-west corner of `bbox`.
    #[must_use]
    pub fn fit(bbox: &BoundingBox, zoom: u8) -> Self {
        let nw = project(zoom, LatLon::new(bbox.north, bbox.west));
        let se = project(zoom, LatLon::new(bbox.south, bbox.east));
        Self { zoom, origin: nw, width: se.x - nw.x, height: se.y - nw.y }
    }

    /// Position of `point` relative to the viewport's top-left corner.
    #[must_use]
    pub fn to_screen(&self, point: LatLon) -> Pixel {
        let px = project(self.zoom, point);
        Pixel { x: px.x - self.origin.x, y: px.y - self.origin.y }
    }

    /// Screen offset of a tile's top-left corner.
    #[must_use]
    pub fn tile_offset(&self, tile: TileCoord) -> Pixel {
        Pixel {
            x: f64::from(tile.x) * TILE_SIZE - self.origin.x,
            y: f64::from(tile.y) * TILE_SIZE - self.origin.y,
        }
    }

    /// Radius in screen pixels for a ground distance centred at `lat`.
    #[must_use]
    pub fn km_to_px(&self, km: f64, lat: f64) -> f64 {
        let km_per_px = EARTH_CIRCUMFERENCE_KM * lat.to_radians().cos() / world_size(self.zoom);
        if km_per_px <= 0.0 { 0.0 } else { km / km_per_px }
    }

    #[must_use]
    pub fn contains(&self, p: Pixel) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

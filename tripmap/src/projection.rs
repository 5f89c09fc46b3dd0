//! Spherical Web-Mercator (EPSG:3857) projection into world pixel space.
//!
//! World pixel space at zoom `z` is a square of `TILE_SIZE * 2^z` pixels with
//! (0, 0) at the north-west corner, matching the slippy-map tile scheme.

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

use std::f64::consts::PI;

use crate::consts::{MAX_LATITUDE, TILE_SIZE};
use crate::geo::LatLng;

/// A point in world or screen pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

/// Edge length of the world square at `zoom`, in pixels.
#[must_use]
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(31))
}

/// Project a coordinate to world pixels at `zoom`. Latitude is clamped to
/// the Mercator limit.
#[must_use]
pub fn project(latlng: LatLng, zoom: u8) -> Point {
    let size = world_size(zoom);
    let lat = latlng.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let sin_lat = lat.to_radians().sin();
    let x = (latlng.lng + 180.0) / 360.0 * size;
    let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * size;
    Point::new(x, y)
}

/// Inverse of [`project`].
#[must_use]
pub fn unproject(point: Point, zoom: u8) -> LatLng {
    let size = world_size(zoom);
    let lng = point.x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * point.y / size;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const ORIGIN: Self = Self { lat: 0.0, lng: 0.0 };

    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Replace a non-finite coordinate with the origin.
    ///
    /// Markers whose coordinate could not be resolved cluster at (0, 0)
    /// instead of breaking the projection.
    #[must_use]
    pub fn or_origin(self) -> Self {
        if self.is_finite() { self } else { Self::ORIGIN }
    }
}

impl Add for LatLng {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { lat: self.lat + rhs.lat, lng: self.lng + rhs.lng }
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned lat/lng rectangle. Does not handle antimeridian crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Degenerate bounds covering a single point.
    #[must_use]
    pub fn from_point(point: LatLng) -> Self {
        Self { south_west: point, north_east: point }
    }

    /// Smallest bounds covering every point, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self::from_point(first);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    #[must_use]
    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north_east.lat, self.south_west.lng)
    }

    #[must_use]
    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south_west.lat, self.north_east.lng)
    }

    #[must_use]
    pub fn is_point(&self) -> bool {
        self.south_west == self.north_east
    }
}

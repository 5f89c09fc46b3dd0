//! Map view state and bounds fitting.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map component keeps one [`MapView`] per map instance. Whenever the
//! placed list or the instance itself changes, [`ViewportFitter::refit`]
//! yields a new view that frames every marker inside a fixed padding; user
//! zoom and pan changes in between are left alone.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{DEFAULT_ZOOM, FALLBACK_CENTER, FIT_PADDING_PX, MAX_ZOOM, MIN_ZOOM};
use crate::geo::{LatLng, LatLngBounds};
use crate::place::PlacedPlace;
use crate::projection::{Point, project, unproject, world_size};

/// Map container size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

impl MapSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: width.max(1.0), height: height.max(1.0) }
    }

    #[must_use]
    pub fn half(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

impl Default for MapSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Visible center and integer zoom of a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self::fallback()
    }
}

impl MapView {
    #[must_use]
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self { center, zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM) }
    }

    /// Country-level view used when there are no places.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(FALLBACK_CENTER, DEFAULT_ZOOM)
    }

    /// World-pixel position of the container's top-left corner.
    #[must_use]
    pub fn pixel_origin(&self, size: MapSize) -> Point {
        project(self.center, self.zoom).sub(size.half())
    }

    /// Screen position of `latlng` relative to the container's top-left corner.
    #[must_use]
    pub fn to_screen(&self, latlng: LatLng, size: MapSize) -> Point {
        project(latlng, self.zoom).sub(self.pixel_origin(size))
    }

    #[must_use]
    pub fn to_latlng(&self, screen: Point, size: MapSize) -> LatLng {
        unproject(screen.add(self.pixel_origin(size)), self.zoom)
    }

    /// Center moved by `offset` screen pixels at the current zoom. Vertical
    /// movement stops at the edges of the world.
    #[must_use]
    pub fn panned_by(&self, offset: Point) -> Self {
        let world = world_size(self.zoom);
        let moved = project(self.center, self.zoom).add(offset);
        let moved = Point::new(moved.x, moved.y.clamp(0.0, world));
        Self::new(unproject(moved, self.zoom), self.zoom)
    }

    /// Same center, zoom shifted by `delta` and clamped.
    #[must_use]
    pub fn zoomed_by(&self, delta: i16) -> Self {
        let zoom = (i16::from(self.zoom) + delta).clamp(i16::from(MIN_ZOOM), i16::from(MAX_ZOOM));
        Self::new(self.center, u8::try_from(zoom).unwrap_or(MAX_ZOOM))
    }
}

/// Largest integer zoom at which `bounds` fits inside `size` minus `padding`
/// on each side, centered on the bounds. A single point fits at max zoom.
#[must_use]
pub fn fit_bounds(bounds: LatLngBounds, size: MapSize, padding: f64) -> MapView {
    let inner_w = (size.width - 2.0 * padding).max(1.0);
    let inner_h = (size.height - 2.0 * padding).max(1.0);

    let nw = project(bounds.north_west(), MAX_ZOOM);
    let se = project(bounds.south_east(), MAX_ZOOM);
    let span = se.sub(nw);

    let scale_x = if span.x > 0.0 { inner_w / span.x } else { f64::INFINITY };
    let scale_y = if span.y > 0.0 { inner_h / span.y } else { f64::INFINITY };
    let scale = scale_x.min(scale_y);

    let zoom = if scale.is_finite() {
        let exact = f64::from(MAX_ZOOM) + scale.log2();
        snap_zoom(exact)
    } else {
        MAX_ZOOM
    };

    let center = unproject(
        project(bounds.north_west(), zoom).midpoint(project(bounds.south_east(), zoom)),
        zoom,
    );
    MapView::new(center, zoom)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn snap_zoom(exact: f64) -> u8 {
    exact.floor().clamp(f64::from(MIN_ZOOM), f64::from(MAX_ZOOM)) as u8
}

/// View framing every placed place with the standard padding, or the
/// fallback view when there are none.
#[must_use]
pub fn fit_view(placed: &[PlacedPlace], size: MapSize) -> MapView {
    match LatLngBounds::from_points(placed.iter().map(PlacedPlace::render_position)) {
        Some(bounds) => fit_bounds(bounds, size, FIT_PADDING_PX),
        None => MapView::fallback(),
    }
}

/// View shown before the first fit: the first place at the default zoom.
#[must_use]
pub fn initial_view(placed: &[PlacedPlace]) -> MapView {
    placed
        .first()
        .map_or_else(MapView::fallback, |place| MapView::new(place.render_position(), DEFAULT_ZOOM))
}

#[derive(Debug, Clone, PartialEq)]
struct FitKey {
    map_id: u64,
    places: Vec<(String, u64, u64)>,
}

impl FitKey {
    fn new(map_id: u64, placed: &[PlacedPlace]) -> Self {
        let places = placed
            .iter()
            .map(|p| (p.place_name.clone(), p.lat.to_bits(), p.lng.to_bits()))
            .collect();
        Self { map_id, places }
    }
}

/// Remembers what the viewport was last fitted to.
#[derive(Debug, Clone, Default)]
pub struct ViewportFitter {
    last: Option<FitKey>,
}

impl ViewportFitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a freshly fitted view if the map instance or the placed list
    /// changed since the previous call; `None` otherwise.
    pub fn refit(&mut self, map_id: u64, placed: &[PlacedPlace], size: MapSize) -> Option<MapView> {
        let key = FitKey::new(map_id, placed);
        if self.last.as_ref() == Some(&key) {
            return None;
        }
        self.last = Some(key);
        Some(fit_view(placed, size))
    }
}

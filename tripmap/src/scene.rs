//! Map instance state and the composed scene handed to a renderer.
//!
//! ARCHITECTURE
//! ============
//! [`TripMap`] is the long-lived part: container size, current view, and the
//! fit tracker. [`MapScene`] is a throwaway snapshot computed from a
//! `TripMap` plus the current places and selection; renderers draw it
//! verbatim and route clicks back through [`MapScene::activate`].

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::layout::layout_builtin;
use crate::marker::{Marker, build_markers};
use crate::place::{Place, PlacedPlace};
use crate::projection::Point;
use crate::tiles::{TilePlacement, TileSource};
use crate::viewport::{MapSize, MapView, ViewportFitter, fit_view, initial_view};

static NEXT_MAP_ID: AtomicU64 = AtomicU64::new(1);

fn next_map_id() -> u64 {
    NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed)
}

/// A marker positioned in container pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenMarker {
    pub marker: Marker,
    /// Where the marker's coordinate falls in the container.
    pub anchor: Point,
    /// Top-left corner of the icon and its shadow.
    pub icon_origin: Point,
}

/// Everything needed to draw one frame of the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub view: MapView,
    pub size: MapSize,
    pub tiles: Vec<TilePlacement>,
    pub markers: Vec<ScreenMarker>,
    pub attribution: String,
}

impl MapScene {
    #[must_use]
    pub fn compose(
        view: MapView,
        size: MapSize,
        source: &TileSource,
        placed: &[PlacedPlace],
        selected: &HashSet<String>,
    ) -> Self {
        let markers = build_markers(placed, selected)
            .into_iter()
            .map(|marker| {
                let anchor = view.to_screen(marker.position, size);
                let icon_origin = marker.icon().top_left(anchor);
                ScreenMarker { marker, anchor, icon_origin }
            })
            .collect();

        Self {
            view,
            size,
            tiles: source.visible_tiles(&view, size),
            markers,
            attribution: source.attribution.clone(),
        }
    }

    #[must_use]
    pub fn marker(&self, place_name: &str) -> Option<&ScreenMarker> {
        self.markers.iter().find(|m| m.marker.place_name == place_name)
    }

    /// Activate the marker keyed by `place_name`.
    ///
    /// Returns whether such a marker exists. The handler, when supplied, runs
    /// exactly once for an existing marker and never for an unknown name.
    pub fn activate(&self, place_name: &str, on_click: Option<&dyn Fn(&str)>) -> bool {
        match self.marker(place_name) {
            Some(found) => {
                found.marker.activate(on_click);
                true
            }
            None => false,
        }
    }
}

/// One interactive map: container size, current view, and fit tracking.
#[derive(Debug, Clone)]
pub struct TripMap {
    id: u64,
    size: MapSize,
    view: MapView,
    fitter: ViewportFitter,
    source: TileSource,
}

impl TripMap {
    #[must_use]
    pub fn new(size: MapSize) -> Self {
        Self {
            id: next_map_id(),
            size,
            view: MapView::fallback(),
            fitter: ViewportFitter::new(),
            source: TileSource::default(),
        }
    }

    /// Show the first of `placed` until the first [`TripMap::sync`] fits.
    #[must_use]
    pub fn starting_at(mut self, placed: &[PlacedPlace]) -> Self {
        self.view = initial_view(placed);
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: TileSource) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn view(&self) -> MapView {
        self.view
    }

    #[must_use]
    pub fn size(&self) -> MapSize {
        self.size
    }

    /// Refit to `placed` when it differs from the last fitted list.
    /// Returns whether the view changed.
    pub fn sync(&mut self, placed: &[PlacedPlace]) -> bool {
        match self.fitter.refit(self.id, placed, self.size) {
            Some(view) => {
                let changed = view != self.view;
                self.view = view;
                changed
            }
            None => false,
        }
    }

    pub fn zoom_in(&mut self) {
        self.view = self.view.zoomed_by(1);
    }

    pub fn zoom_out(&mut self) {
        self.view = self.view.zoomed_by(-1);
    }

    /// Move the view by `offset` screen pixels; a drag by `d` pans by `-d`.
    /// Kept until the placed list changes.
    pub fn pan_by(&mut self, offset: Point) {
        self.view = self.view.panned_by(offset);
    }

    #[must_use]
    pub fn scene(&self, placed: &[PlacedPlace], selected: &HashSet<String>) -> MapScene {
        MapScene::compose(self.view, self.size, &self.source, placed, selected)
    }
}

/// Lay out `places`, fit them into `size`, and compose the scene in one step.
#[must_use]
pub fn render_trip(places: &[Place], selected: &HashSet<String>, size: MapSize) -> MapScene {
    let placed = layout_builtin(places);
    let view = fit_view(&placed, size);
    MapScene::compose(view, size, &TileSource::default(), &placed, selected)
}

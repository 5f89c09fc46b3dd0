//! Markers, their two icon variants, and popup content.
//!
//! A marker is either selected or unselected; there is no other visual
//! state. Click handling is an explicit capability passed by the caller
//! rather than an event binding stored on the marker.

#[cfg(test)]
#[path = "marker_test.rs"]
mod marker_test;

use std::collections::HashSet;
use std::sync::mpsc::{SendError, Sender};

use crate::consts::{
    MARKER_ICON_ANCHOR, MARKER_ICON_SIZE, MARKER_POPUP_ANCHOR, MARKER_SHADOW_SIZE, MARKER_SHADOW_URL,
    SELECTED_ICON_URL, UNSELECTED_ICON_URL,
};
use crate::geo::LatLng;
use crate::place::PlacedPlace;
use crate::projection::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerVariant {
    Selected,
    Unselected,
}

impl MarkerVariant {
    #[must_use]
    pub fn from_selected(is_selected: bool) -> Self {
        if is_selected { Self::Selected } else { Self::Unselected }
    }

    #[must_use]
    pub fn icon(self) -> MarkerIcon {
        let icon_url = match self {
            Self::Selected => SELECTED_ICON_URL,
            Self::Unselected => UNSELECTED_ICON_URL,
        };
        MarkerIcon {
            icon_url,
            shadow_url: MARKER_SHADOW_URL,
            icon_size: MARKER_ICON_SIZE,
            icon_anchor: MARKER_ICON_ANCHOR,
            popup_anchor: MARKER_POPUP_ANCHOR,
            shadow_size: MARKER_SHADOW_SIZE,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Unselected => "unselected",
        }
    }
}

/// Image and geometry of a marker icon, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerIcon {
    pub icon_url: &'static str,
    pub shadow_url: &'static str,
    pub icon_size: (f64, f64),
    pub icon_anchor: (f64, f64),
    pub popup_anchor: (f64, f64),
    pub shadow_size: (f64, f64),
}

impl MarkerIcon {
    /// Top-left corner of the icon image when its anchor sits on `at`.
    /// The shadow shares the icon anchor.
    #[must_use]
    pub fn top_left(&self, at: Point) -> Point {
        Point::new(at.x - self.icon_anchor.0, at.y - self.icon_anchor.1)
    }

    /// Where an open popup's tip points when the marker sits on `at`.
    #[must_use]
    pub fn popup_tip(&self, at: Point) -> Point {
        Point::new(at.x + self.popup_anchor.0, at.y + self.popup_anchor.1)
    }
}

/// Text shown in a marker's popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub description: String,
    pub category: String,
    pub rating: f64,
}

impl PopupContent {
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("★ {}", self.rating)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Marker key and the value passed to the click handler.
    pub place_name: String,
    pub position: LatLng,
    pub variant: MarkerVariant,
    pub popup: PopupContent,
}

impl Marker {
    #[must_use]
    pub fn from_place(place: &PlacedPlace, is_selected: bool) -> Self {
        Self {
            place_name: place.place_name.clone(),
            position: place.render_position(),
            variant: MarkerVariant::from_selected(is_selected),
            popup: PopupContent {
                title: place.place_name.clone(),
                description: place.description.clone(),
                category: place.category.clone(),
                rating: place.rating,
            },
        }
    }

    #[must_use]
    pub fn icon(&self) -> MarkerIcon {
        self.variant.icon()
    }

    /// Report activation to `on_click`, if one was supplied.
    pub fn activate(&self, on_click: Option<&dyn Fn(&str)>) {
        if let Some(handler) = on_click {
            handler(&self.place_name);
        }
    }
}

/// One marker per placed place, in input order.
#[must_use]
pub fn build_markers(placed: &[PlacedPlace], selected: &HashSet<String>) -> Vec<Marker> {
    placed
        .iter()
        .map(|place| Marker::from_place(place, selected.contains(&place.place_name)))
        .collect()
}

/// Adapt a channel into a click handler. Sends after the receiver is gone
/// are dropped.
pub fn channel_handler(tx: Sender<String>) -> impl Fn(&str) {
    move |place_name: &str| {
        if let Err(SendError(unheard)) = tx.send(place_name.to_owned()) {
            // Receiver gone: nobody is listening for clicks any more.
            drop(unheard);
        }
    }
}

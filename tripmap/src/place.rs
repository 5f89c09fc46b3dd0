//! Itinerary place records.

#[cfg(test)]
#[path = "place_test.rs"]
mod place_test;

use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

/// A place as it arrives from the itinerary. Coordinates are optional and
/// are always recomputed by [`crate::layout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub city: String,
    /// Unique within one rendering call; used as the marker key.
    pub place_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// A place after layout; `lat` and `lng` are always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlace {
    pub city: String,
    pub place_name: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub rating: f64,
    pub lat: f64,
    pub lng: f64,
}

impl PlacedPlace {
    #[must_use]
    pub fn new(place: Place, position: LatLng) -> Self {
        Self {
            city: place.city,
            place_name: place.place_name,
            category: place.category,
            description: place.description,
            image: place.image,
            rating: place.rating,
            lat: position.lat,
            lng: position.lng,
        }
    }

    #[must_use]
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Position used for drawing; unresolvable coordinates fall back to (0, 0).
    #[must_use]
    pub fn render_position(&self) -> LatLng {
        self.position().or_origin()
    }
}

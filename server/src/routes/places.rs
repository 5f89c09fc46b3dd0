//! Places routes: read-only itinerary catalog and supported cities.

#[cfg(test)]
#[path = "places_test.rs"]
mod places_test;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tripmap::cities::CityCatalog;
use tripmap::geo::LatLng;
use tripmap::place::Place;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PlacesQuery {
    pub city: Option<String>,
}

/// A supported city with its map center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitySummary {
    pub key: String,
    pub center: LatLng,
    pub places: usize,
}

/// `GET /api/places?city=<key>`: places for one city, or all when absent.
pub async fn list_places(State(state): State<AppState>, Query(query): Query<PlacesQuery>) -> Json<Vec<Place>> {
    let city = query.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
    Json(state.places.for_city(city))
}

/// `GET /api/cities`: built-in cities in key order.
pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<CitySummary>> {
    let cities = CityCatalog::builtin()
        .iter()
        .map(|(key, profile)| CitySummary {
            key: key.to_owned(),
            center: profile.center,
            places: state.places.count_for(key),
        })
        .collect();
    Json(cities)
}

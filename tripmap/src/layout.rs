//! Deterministic coordinate assignment.
//!
//! Placement depends only on the place's city key and its position in the
//! input list. Unknown cities land on (0, 0); that is the documented
//! behavior, not an error.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::cities::CityCatalog;
use crate::geo::LatLng;
use crate::place::{Place, PlacedPlace};

/// Coordinate for the place at `index` in `city`.
#[must_use]
pub fn position_for(catalog: &CityCatalog, city: &str, index: usize) -> LatLng {
    catalog.center_of(city) + catalog.offset_of(city, index)
}

/// Lay out `places` against `catalog`, preserving input order.
///
/// Any coordinates on the input are ignored and overwritten.
#[must_use]
pub fn layout(places: &[Place], catalog: &CityCatalog) -> Vec<PlacedPlace> {
    places
        .iter()
        .enumerate()
        .map(|(index, place)| {
            let position = position_for(catalog, &place.city, index);
            PlacedPlace::new(place.clone(), position)
        })
        .collect()
}

/// [`layout`] against the built-in city catalog.
#[must_use]
pub fn layout_builtin(places: &[Place]) -> Vec<PlacedPlace> {
    layout(places, CityCatalog::builtin())
}

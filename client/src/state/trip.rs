//! Trip page state: current city, its places, and the selected set.

#[cfg(test)]
#[path = "trip_test.rs"]
mod trip_test;

use std::collections::HashSet;

use crate::net::types::{CitySummary, Place};

pub const DEFAULT_CITY: &str = "andaman";

#[derive(Clone, Debug, PartialEq)]
pub struct TripState {
    pub city: String,
    pub cities: Vec<CitySummary>,
    pub places: Vec<Place>,
    /// Selected `place_name`s; drives the marker icon variant.
    pub selected: HashSet<String>,
    /// A place list request for `city` is in flight.
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for TripState {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_owned(),
            cities: Vec::new(),
            places: Vec::new(),
            selected: HashSet::new(),
            loading: false,
            error: None,
        }
    }
}

impl TripState {
    /// Switch city. Clears places and selection until the new list arrives.
    /// Returns false when `city` is already current.
    pub fn set_city(&mut self, city: &str) -> bool {
        let city = city.trim().to_lowercase();
        if city.is_empty() || city == self.city {
            return false;
        }
        self.city = city;
        self.places.clear();
        self.selected.clear();
        self.error = None;
        true
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Install a fetched place list. Selections naming places that are no
    /// longer present are dropped.
    pub fn set_places(&mut self, places: Vec<Place>) {
        let names: HashSet<&str> = places.iter().map(|p| p.place_name.as_str()).collect();
        self.selected.retain(|name| names.contains(name.as_str()));
        self.places = places;
        self.loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Flip one place's selection. Returns whether it is now selected.
    pub fn toggle(&mut self, place_name: &str) -> bool {
        if self.selected.remove(place_name) {
            false
        } else {
            self.selected.insert(place_name.to_owned());
            true
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

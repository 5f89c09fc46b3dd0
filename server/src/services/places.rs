//! Places catalog: demo itinerary places per city, loaded once at start-up.

#[cfg(test)]
#[path = "places_test.rs"]
mod places_test;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tripmap::place::Place;

const BUNDLED_PLACES: &str = include_str!("../../data/places.yaml");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read places file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid places yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("duplicate place {place_name:?} in city {city:?}; names must be unique across the catalog")]
    DuplicateName { city: String, place_name: String },
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    places: Vec<Place>,
}

#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled YAML is invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUNDLED_PLACES)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&text)
    }

    /// Parse a catalog. City keys are normalised to lowercase. Place names
    /// key the map markers and the unfiltered list holds every city, so they
    /// must be unique across the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed YAML or a duplicate place name.
    pub fn from_yaml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(text)?;
        let mut seen = HashSet::new();
        let mut places = Vec::with_capacity(file.places.len());
        for mut place in file.places {
            place.city = place.city.trim().to_lowercase();
            if !seen.insert(place.place_name.clone()) {
                return Err(CatalogError::DuplicateName { city: place.city, place_name: place.place_name });
            }
            places.push(place);
        }
        Ok(Self { places })
    }

    /// Places for one city (case-insensitive), or every place when `city`
    /// is `None`. Catalog order is preserved; it drives layout offsets.
    #[must_use]
    pub fn for_city(&self, city: Option<&str>) -> Vec<Place> {
        match city.map(|c| c.trim().to_lowercase()) {
            None => self.places.clone(),
            Some(city) => self.places.iter().filter(|p| p.city == city).cloned().collect(),
        }
    }

    /// Number of places per city key.
    #[must_use]
    pub fn count_for(&self, city: &str) -> usize {
        let city = city.to_lowercase();
        self.places.iter().filter(|p| p.city == city).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

//! City centers and per-city marker offset tables.
//!
//! DESIGN
//! ======
//! There is no geocoder. Each supported city has a fixed center and an
//! ordered table of small (lat, lng) deltas; the i-th place in a trip is put
//! at `center + offsets[i mod len]` so same-city markers do not stack. The
//! deltas are tuning constants and carry no geometric meaning.
//!
//! The built-in catalog is assembled once per process and shared read-only.

#[cfg(test)]
#[path = "cities_test.rs"]
mod cities_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::geo::LatLng;

/// Center and offset table for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct CityProfile {
    pub center: LatLng,
    pub offsets: Vec<LatLng>,
}

impl CityProfile {
    #[must_use]
    pub fn new(center: LatLng, offsets: Vec<LatLng>) -> Self {
        Self { center, offsets }
    }

    /// Offset for the place at `index`, wrapping around the table.
    /// An empty table yields no offset.
    #[must_use]
    pub fn offset_at(&self, index: usize) -> LatLng {
        if self.offsets.is_empty() {
            return LatLng::ORIGIN;
        }
        self.offsets[index % self.offsets.len()]
    }
}

/// Immutable lookup from lowercase city key to [`CityProfile`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityCatalog {
    cities: BTreeMap<String, CityProfile>,
}

static BUILTIN: LazyLock<CityCatalog> = LazyLock::new(|| {
    let mut catalog = CityCatalog::default();
    for (key, center, offsets) in BUILTIN_TABLE {
        let offsets = offsets.iter().copied().map(LatLng::from).collect();
        catalog = catalog.with_city(key, CityProfile::new(LatLng::from(*center), offsets));
    }
    catalog
});

type CityRow = (&'static str, (f64, f64), &'static [(f64, f64)]);

const BUILTIN_TABLE: &[CityRow] = &[
    (
        "andaman",
        (11.6234, 92.7265),
        &[(0.1, 0.05), (-0.1, 0.05), (0.05, -0.1), (-0.05, -0.1), (0.15, -0.05)],
    ),
    (
        "manali",
        (32.2396, 77.1887),
        &[(0.08, 0.06), (-0.08, 0.06), (0.06, -0.08), (-0.06, -0.08), (0.12, -0.04)],
    ),
    (
        "chikmagalur",
        (13.3161, 75.7720),
        &[
            (0.1, 0.08),
            (-0.1, 0.08),
            (0.08, -0.1),
            (-0.08, -0.1),
            (0.15, -0.05),
            (-0.15, 0.05),
            (0.05, 0.15),
        ],
    ),
    (
        "bihar",
        (25.0961, 85.3131),
        &[(0.2, 0.15), (-0.2, 0.15), (0.15, -0.2), (-0.15, -0.2)],
    ),
];

impl CityCatalog {
    /// The process-wide built-in catalog.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Add or replace a city. The key is stored lowercase.
    #[must_use]
    pub fn with_city(mut self, key: &str, profile: CityProfile) -> Self {
        self.cities.insert(key.to_lowercase(), profile);
        self
    }

    /// Case-insensitive lookup.
    #[must_use]
    pub fn get(&self, city: &str) -> Option<&CityProfile> {
        self.cities.get(&city.to_lowercase())
    }

    /// Center for `city`, or the origin when the city is unknown.
    #[must_use]
    pub fn center_of(&self, city: &str) -> LatLng {
        self.get(city).map_or(LatLng::ORIGIN, |profile| profile.center)
    }

    /// Offset for the place at `index` in `city`, or none when unknown.
    #[must_use]
    pub fn offset_of(&self, city: &str, index: usize) -> LatLng {
        self.get(city).map_or(LatLng::ORIGIN, |profile| profile.offset_at(index))
    }

    /// Supported city keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CityProfile)> {
        self.cities.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

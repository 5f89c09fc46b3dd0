#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn builtin_has_four_cities_in_key_order() {
    let keys: Vec<&str> = CityCatalog::builtin().keys().collect();
    assert_eq!(keys, vec!["andaman", "bihar", "chikmagalur", "manali"]);
}

#[test]
fn builtin_offset_table_lengths() {
    let catalog = CityCatalog::builtin();
    assert_eq!(catalog.get("andaman").unwrap().offsets.len(), 5);
    assert_eq!(catalog.get("manali").unwrap().offsets.len(), 5);
    assert_eq!(catalog.get("chikmagalur").unwrap().offsets.len(), 7);
    assert_eq!(catalog.get("bihar").unwrap().offsets.len(), 4);
}

#[test]
fn builtin_is_shared() {
    assert!(std::ptr::eq(CityCatalog::builtin(), CityCatalog::builtin()));
}

#[test]
fn lookup_is_case_insensitive() {
    let catalog = CityCatalog::builtin();
    assert_eq!(catalog.center_of("Manali"), LatLng::new(32.2396, 77.1887));
    assert_eq!(catalog.center_of("MANALI"), LatLng::new(32.2396, 77.1887));
}

#[test]
fn unknown_city_resolves_to_origin() {
    let catalog = CityCatalog::builtin();
    assert!(catalog.get("atlantis").is_none());
    assert_eq!(catalog.center_of("atlantis"), LatLng::ORIGIN);
    assert_eq!(catalog.offset_of("atlantis", 3), LatLng::ORIGIN);
}

#[test]
fn offset_wraps_around_table() {
    let bihar = CityCatalog::builtin().get("bihar").unwrap();
    assert_eq!(bihar.offset_at(0), LatLng::new(0.2, 0.15));
    assert_eq!(bihar.offset_at(4), bihar.offset_at(0));
    assert_eq!(bihar.offset_at(6), LatLng::new(0.15, -0.2));
}

#[test]
fn empty_offset_table_yields_no_offset() {
    let profile = CityProfile::new(LatLng::new(1.0, 1.0), Vec::new());
    assert_eq!(profile.offset_at(0), LatLng::ORIGIN);
    assert_eq!(profile.offset_at(9), LatLng::ORIGIN);
}

#[test]
fn with_city_lowercases_key_and_replaces() {
    let catalog = CityCatalog::default()
        .with_city("Goa", CityProfile::new(LatLng::new(15.0, 74.0), Vec::new()))
        .with_city("goa", CityProfile::new(LatLng::new(15.5, 73.8), Vec::new()));
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.center_of("GOA"), LatLng::new(15.5, 73.8));
}

#[test]
fn default_catalog_is_empty() {
    let catalog = CityCatalog::default();
    assert!(catalog.is_empty());
    assert_eq!(catalog.iter().count(), 0);
}

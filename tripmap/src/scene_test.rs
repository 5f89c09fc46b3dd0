use std::cell::Cell;

use super::*;
use crate::consts::{FALLBACK_CENTER, FIT_PADDING_PX};
use crate::marker::MarkerVariant;

fn place(city: &str, name: &str) -> Place {
    Place {
        city: city.to_owned(),
        place_name: name.to_owned(),
        category: "Sight".to_owned(),
        description: String::new(),
        image: String::new(),
        rating: 4.2,
        lat: None,
        lng: None,
    }
}

fn manali() -> Vec<Place> {
    vec![
        place("manali", "Hadimba Temple"),
        place("manali", "Solang Valley"),
        place("manali", "Old Manali"),
        place("manali", "Jogini Falls"),
    ]
}

fn names(list: &[&str]) -> HashSet<String> {
    list.iter().map(|n| (*n).to_owned()).collect()
}

#[test]
fn render_trip_places_every_marker_inside_padding() {
    let size = MapSize::new(900.0, 500.0);
    let scene = render_trip(&manali(), &HashSet::new(), size);
    assert_eq!(scene.markers.len(), 4);
    for m in &scene.markers {
        assert!(m.anchor.x >= FIT_PADDING_PX - 1e-6 && m.anchor.x <= size.width - FIT_PADDING_PX + 1e-6);
        assert!(m.anchor.y >= FIT_PADDING_PX - 1e-6 && m.anchor.y <= size.height - FIT_PADDING_PX + 1e-6);
    }
    assert!(!scene.tiles.is_empty());
    assert!(scene.attribution.contains("OpenStreetMap"));
}

#[test]
fn render_trip_empty_uses_fallback_center() {
    let scene = render_trip(&[], &HashSet::new(), MapSize::default());
    assert!(scene.markers.is_empty());
    assert_eq!(scene.view.center, FALLBACK_CENTER);
}

#[test]
fn render_trip_is_idempotent() {
    let selected = names(&["Old Manali"]);
    let a = render_trip(&manali(), &selected, MapSize::default());
    let b = render_trip(&manali(), &selected, MapSize::default());
    assert_eq!(a, b);
}

#[test]
fn icon_origin_offsets_anchor() {
    let scene = render_trip(&manali(), &HashSet::new(), MapSize::default());
    let m = &scene.markers[0];
    assert!((m.anchor.x - m.icon_origin.x - 12.0).abs() < 1e-9);
    assert!((m.anchor.y - m.icon_origin.y - 41.0).abs() < 1e-9);
}

#[test]
fn selection_sets_variant() {
    let scene = render_trip(&manali(), &names(&["Solang Valley"]), MapSize::default());
    assert_eq!(scene.marker("Solang Valley").unwrap().marker.variant, MarkerVariant::Selected);
    assert_eq!(scene.marker("Hadimba Temple").unwrap().marker.variant, MarkerVariant::Unselected);
}

#[test]
fn activate_calls_handler_exactly_once() {
    let scene = render_trip(&manali(), &HashSet::new(), MapSize::default());
    let count = Cell::new(0);
    let last = std::cell::RefCell::new(String::new());
    let handler = |name: &str| {
        count.set(count.get() + 1);
        *last.borrow_mut() = name.to_owned();
    };
    assert!(scene.activate("Jogini Falls", Some(&handler)));
    assert_eq!(count.get(), 1);
    assert_eq!(*last.borrow(), "Jogini Falls");
}

#[test]
fn activate_without_handler_reports_marker_only() {
    let scene = render_trip(&manali(), &HashSet::new(), MapSize::default());
    assert!(scene.activate("Jogini Falls", None));
}

#[test]
fn activate_unknown_name_skips_handler() {
    let scene = render_trip(&manali(), &HashSet::new(), MapSize::default());
    let count = Cell::new(0);
    let handler = |_: &str| count.set(count.get() + 1);
    assert!(!scene.activate("Atlantis", Some(&handler)));
    assert_eq!(count.get(), 0);
}

// --- TripMap ---

#[test]
fn new_map_starts_at_fallback() {
    let map = TripMap::new(MapSize::default());
    assert_eq!(map.view(), MapView::fallback());
}

#[test]
fn sync_fits_once_per_list() {
    let mut map = TripMap::new(MapSize::default());
    let placed = layout_builtin(&manali());
    assert!(map.sync(&placed));
    let fitted = map.view();
    map.zoom_out();
    assert!(!map.sync(&placed));
    assert_eq!(map.view(), fitted.zoomed_by(-1));
}

#[test]
fn sync_refits_after_list_change() {
    let mut map = TripMap::new(MapSize::default());
    map.sync(&layout_builtin(&manali()));
    let mut more = manali();
    more.push(place("andaman", "Havelock"));
    assert!(map.sync(&layout_builtin(&more)));
}

#[test]
fn zoom_controls_step_by_one() {
    let mut map = TripMap::new(MapSize::default());
    let start = map.view().zoom;
    map.zoom_in();
    assert_eq!(map.view().zoom, start + 1);
    map.zoom_out();
    map.zoom_out();
    assert_eq!(map.view().zoom, start - 1);
}

#[test]
fn starting_at_shows_first_place_until_fit() {
    let placed = layout_builtin(&manali());
    let mut map = TripMap::new(MapSize::default()).starting_at(&placed);
    assert_eq!(map.view(), initial_view(&placed));
    assert!(map.sync(&placed));
    assert_eq!(map.view(), fit_view(&placed, map.size()));
}

fn offscreen(scene: &MapScene) -> Vec<String> {
    scene
        .markers
        .iter()
        .filter(|m| {
            m.anchor.x < 0.0 || m.anchor.y < 0.0 || m.anchor.x > scene.size.width || m.anchor.y > scene.size.height
        })
        .map(|m| m.marker.place_name.clone())
        .collect()
}

#[test]
fn panning_brings_markers_back_after_zooming_in() {
    let size = MapSize::new(800.0, 600.0);
    let placed = layout_builtin(&manali());
    let mut map = TripMap::new(size);
    map.sync(&placed);
    map.zoom_in();
    map.zoom_in();

    let scene = map.scene(&placed, &HashSet::new());
    let target = scene.marker("Hadimba Temple").unwrap().anchor;
    assert!(offscreen(&scene).contains(&"Hadimba Temple".to_owned()));

    map.pan_by(target.sub(size.half()));
    let scene = map.scene(&placed, &HashSet::new());
    let anchor = scene.marker("Hadimba Temple").unwrap().anchor;
    assert!((anchor.x - 400.0).abs() < 1e-6);
    assert!((anchor.y - 300.0).abs() < 1e-6);
    assert!(!offscreen(&scene).contains(&"Hadimba Temple".to_owned()));
}

#[test]
fn pan_survives_sync_of_same_list() {
    let placed = layout_builtin(&manali());
    let mut map = TripMap::new(MapSize::default());
    map.sync(&placed);
    map.pan_by(Point::new(120.0, 40.0));
    let panned = map.view();
    assert!(!map.sync(&placed));
    assert_eq!(map.view(), panned);
}

#[test]
fn new_list_refits_over_pan() {
    let mut map = TripMap::new(MapSize::default());
    map.sync(&layout_builtin(&manali()));
    map.pan_by(Point::new(-300.0, 0.0));
    let bihar = layout_builtin(&[place("bihar", "Nalanda"), place("bihar", "Bodh Gaya")]);
    assert!(map.sync(&bihar));
    assert_eq!(map.view(), fit_view(&bihar, map.size()));
}

#[test]
fn custom_tile_source_flows_into_scene() {
    let source = TileSource {
        url_template: "https://tiles.example/{z}/{x}/{y}.png".to_owned(),
        subdomains: Vec::new(),
        attribution: "Example".to_owned(),
    };
    let map = TripMap::new(MapSize::default()).with_source(source);
    let scene = map.scene(&[], &HashSet::new());
    assert_eq!(scene.attribution, "Example");
    assert!(scene.tiles.iter().all(|t| t.url.starts_with("https://tiles.example/")));
}

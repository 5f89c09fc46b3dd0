use tripmap::geo::LatLng;

use super::*;

#[test]
fn city_label_capitalises_first_letter() {
    assert_eq!(city_label("chikmagalur"), "Chikmagalur");
    assert_eq!(city_label(""), "");
}

#[test]
fn city_options_fall_back_to_builtin_catalog() {
    assert_eq!(city_options(&[]), ["andaman", "bihar", "chikmagalur", "manali"]);
}

#[test]
fn city_options_prefer_server_list() {
    let fetched = vec![CitySummary { key: "goa".to_owned(), center: LatLng::new(15.3, 74.1), places: 3 }];
    assert_eq!(city_options(&fetched), ["goa"]);
}

#[test]
fn selection_summary_wording() {
    assert_eq!(selection_summary(0, 0, false), "No places for this city yet");
    assert_eq!(selection_summary(0, 5, false), "5 places");
    assert_eq!(selection_summary(2, 5, false), "2 of 5 selected");
}

#[test]
fn selection_summary_while_loading() {
    assert_eq!(selection_summary(0, 0, true), "Loading places...");
    assert_eq!(selection_summary(0, 5, true), "5 places");
}

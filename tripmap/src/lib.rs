//! Place layout and map scene composition for the trip planner.
//!
//! This crate is UI-framework agnostic: it turns a list of itinerary places
//! into positioned markers, a fitted viewport, and the raster tiles needed to
//! draw it. The Leptos client renders the resulting [`scene::MapScene`]; the
//! server reuses [`place::Place`] as its wire type.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geo`] | `LatLng` and `LatLngBounds` |
//! | [`cities`] | Built-in city centers and per-city offset tables |
//! | [`place`] | `Place` input records and laid-out `PlacedPlace`s |
//! | [`layout`] | Deterministic coordinate assignment |
//! | [`projection`] | Web-Mercator projection to world pixels |
//! | [`viewport`] | Map view, bounds fitting, re-fit tracking |
//! | [`tiles`] | Slippy-map tile coverage and tile URLs |
//! | [`marker`] | Marker variants, icons, popups |
//! | [`scene`] | Stateful map instance and composed scene |
//! | [`consts`] | Shared numeric and URL constants |

pub mod cities;
pub mod consts;
pub mod geo;
pub mod layout;
pub mod marker;
pub mod place;
pub mod projection;
pub mod scene;
pub mod tiles;
pub mod viewport;

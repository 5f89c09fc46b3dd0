//! Shared constants for the tripmap crate.

use crate::geo::LatLng;

// ── Viewport ────────────────────────────────────────────────────

/// Country-level view used when there is nothing to fit.
pub const FALLBACK_CENTER: LatLng = LatLng { lat: 20.5937, lng: 78.9629 };

/// Zoom used for the initial view before any bounds fit.
pub const DEFAULT_ZOOM: u8 = 10;

pub const MIN_ZOOM: u8 = 0;

pub const MAX_ZOOM: u8 = 18;

/// Padding kept free on every side when fitting bounds, in CSS pixels.
pub const FIT_PADDING_PX: f64 = 50.0;

/// Latitude limit of the square Web-Mercator world.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

// ── Tiles ───────────────────────────────────────────────────────

/// Edge length of one raster tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const TILE_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

// ── Markers ─────────────────────────────────────────────────────

pub const SELECTED_ICON_URL: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-blue.png";

pub const UNSELECTED_ICON_URL: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-2x-grey.png";

pub const MARKER_SHADOW_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-shadow.png";

/// Icon size (w, h) in pixels.
pub const MARKER_ICON_SIZE: (f64, f64) = (25.0, 41.0);

/// Hot-spot inside the icon that sits on the coordinate.
pub const MARKER_ICON_ANCHOR: (f64, f64) = (12.0, 41.0);

/// Popup tip position relative to the icon anchor.
pub const MARKER_POPUP_ANCHOR: (f64, f64) = (1.0, -34.0);

pub const MARKER_SHADOW_SIZE: (f64, f64) = (41.0, 41.0);

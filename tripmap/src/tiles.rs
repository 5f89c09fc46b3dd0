//! Slippy-map tile coverage for a view.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

use crate::consts::{TILE_ATTRIBUTION, TILE_SIZE, TILE_SUBDOMAINS, TILE_URL_TEMPLATE};
use crate::projection::Point;
use crate::viewport::{MapSize, MapView};

/// Tile address in the z/x/y scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

/// A tile and where its top-left corner sits in the container.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    pub coord: TileCoord,
    pub url: String,
    pub screen: Point,
}

/// Raster tile server description.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSource {
    pub url_template: String,
    pub subdomains: Vec<String>,
    /// HTML attribution the tile provider requires to be shown.
    pub attribution: String,
}

impl Default for TileSource {
    fn default() -> Self {
        Self::openstreetmap()
    }
}

impl TileSource {
    #[must_use]
    pub fn openstreetmap() -> Self {
        Self {
            url_template: TILE_URL_TEMPLATE.to_owned(),
            subdomains: TILE_SUBDOMAINS.iter().map(|s| (*s).to_owned()).collect(),
            attribution: TILE_ATTRIBUTION.to_owned(),
        }
    }

    /// Subdomain for a tile, rotating by `(x + y) mod n` to spread requests.
    #[must_use]
    pub fn subdomain(&self, coord: TileCoord) -> &str {
        if self.subdomains.is_empty() {
            return "";
        }
        let index = (u64::from(coord.x) + u64::from(coord.y)) % self.subdomains.len() as u64;
        usize::try_from(index).map_or("", |i| self.subdomains[i].as_str())
    }

    #[must_use]
    pub fn url(&self, coord: TileCoord) -> String {
        self.url_template
            .replace("{s}", self.subdomain(coord))
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }

    /// Every tile intersecting the container for `view`.
    ///
    /// Columns wrap around the antimeridian; rows beyond the poles are
    /// skipped.
    #[must_use]
    pub fn visible_tiles(&self, view: &MapView, size: MapSize) -> Vec<TilePlacement> {
        let origin = view.pixel_origin(size);
        let tiles_per_axis = 1_i64 << view.zoom;

        let first_col = tile_index(origin.x);
        let last_col = tile_index(origin.x + size.width - 1.0);
        let first_row = tile_index(origin.y).max(0);
        let last_row = tile_index(origin.y + size.height - 1.0).min(tiles_per_axis - 1);

        let mut out = Vec::new();
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                let wrapped = col.rem_euclid(tiles_per_axis);
                let (Ok(x), Ok(y)) = (u32::try_from(wrapped), u32::try_from(row)) else {
                    continue;
                };
                let coord = TileCoord { z: view.zoom, x, y };
                #[allow(clippy::cast_precision_loss)]
                let screen = Point::new(col as f64 * TILE_SIZE - origin.x, row as f64 * TILE_SIZE - origin.y);
                out.push(TilePlacement { coord, url: self.url(coord), screen });
            }
        }
        out
    }
}

#[allow(clippy::cast_possible_truncation)]
fn tile_index(pixel: f64) -> i64 {
    (pixel / TILE_SIZE).floor() as i64
}

//! Catalog record types.

use serde::{Deserialize, Serialize};

/// Column/row of a tile in the chart grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoords {
    pub x: u32,
    pub y: u32,
}

/// Scaled position on the chart canvas, rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvgPos {
    pub x: f64,
    pub y: f64,
}

/// One named star extracted from the chart.
///
/// Field order matches the serialized catalog layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    /// Zero-based, assigned in sorted name order
    pub id: usize,
    pub name: String,
    /// Right ascension in hours
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    pub magnitude: f64,
    pub tile_id: u32,
    pub tile_coords: TileCoords,
    pub svg_pos: SvgPos,
}

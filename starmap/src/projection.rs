//! Chart canvas to celestial coordinate conversion.
//!
//! The chart is a plate carrée projection of the whole sky: the canvas width
//! spans 24 hours of right ascension and the height spans declination from
//! +90° at the top edge to -90° at the bottom edge.

use crate::config::{CanvasSize, TileGrid};
use crate::record::TileCoords;

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value, so `239.475` (stored just below the tie)
/// goes down; exact ties such as `58.625` go to even.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Maps scaled canvas positions to RA/Dec and tile cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasProjection {
    pub canvas: CanvasSize,
    pub grid: TileGrid,
}

impl CanvasProjection {
    pub fn new(canvas: CanvasSize, grid: TileGrid) -> Self {
        Self { canvas, grid }
    }

    /// Right ascension in hours, rounded to 4 decimals
    pub fn ra_hours(&self, x: f64) -> f64 {
        round_to((x / self.canvas.width) * 24.0, 4)
    }

    /// Declination in degrees, rounded to 4 decimals
    pub fn dec_degrees(&self, y: f64) -> f64 {
        let half_height = self.canvas.height / 2.0;
        round_to((half_height - y) / half_height * 90.0, 4)
    }

    /// `(ra, dec)` for a scaled canvas position
    pub fn to_celestial(&self, x: f64, y: f64) -> (f64, f64) {
        (self.ra_hours(x), self.dec_degrees(y))
    }

    /// Grid cell containing a scaled canvas position.
    ///
    /// Positions are not clamped, so points drawn past the canvas edge land
    /// in cells beyond the grid.
    pub fn tile_of(&self, x: f64, y: f64) -> TileCoords {
        let tile_width = self.canvas.width / self.grid.cols as f64;
        let tile_height = self.canvas.height / self.grid.rows as f64;
        TileCoords {
            x: (x / tile_width).floor() as u32,
            y: (y / tile_height).floor() as u32,
        }
    }

    /// Row-major tile index for a cell
    pub fn tile_id(&self, coords: TileCoords) -> u32 {
        self.grid.tile_id(coords.x, coords.y)
    }
}

impl Default for CanvasProjection {
    fn default() -> Self {
        Self::new(CanvasSize::default(), TileGrid::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1.23456, 4, 1.2346)]
    #[case(-1.23444, 4, -1.2344)]
    #[case(200.004, 2, 200.0)]
    #[case(58.625, 2, 58.62)]
    #[case(58.635, 2, 58.63)]
    #[case(0.125, 2, 0.12)]
    #[case(239.475, 2, 239.47)]
    #[case(1943.025, 2, 1943.03)]
    #[case(1800.435, 2, 1800.43)]
    fn test_round_to(#[case] value: f64, #[case] decimals: usize, #[case] expected: f64) {
        assert_eq!(round_to(value, decimals), expected);
    }

    #[test]
    fn test_canvas_edges() {
        let projection = CanvasProjection::default();
        let (w, h) = (projection.canvas.width, projection.canvas.height);

        assert_relative_eq!(projection.ra_hours(0.0), 0.0);
        assert_relative_eq!(projection.ra_hours(w / 2.0), 12.0);
        assert_relative_eq!(projection.dec_degrees(0.0), 90.0);
        assert_relative_eq!(projection.dec_degrees(h / 2.0), 0.0);
        assert_relative_eq!(projection.dec_degrees(h), -90.0);
    }

    #[test]
    fn test_vega_scenario() {
        let projection = CanvasProjection::default();
        let (ra, dec) = projection.to_celestial(200.0, 100.0);

        let expected_ra = round_to((200.0 / 2010.7097) * 24.0, 4);
        let expected_dec = round_to((561.26015 - 100.0) / 561.26015 * 90.0, 4);
        assert_relative_eq!(ra, expected_ra);
        assert_relative_eq!(dec, expected_dec);
        assert_relative_eq!(ra, 2.3872);
        assert_relative_eq!(dec, 73.9647);

        let tile = projection.tile_of(200.0, 100.0);
        assert_eq!(tile, TileCoords { x: 0, y: 0 });
        assert_eq!(projection.tile_id(tile), 0);
    }

    #[rstest]
    #[case(0.0, 0.0, 0)]
    #[case(502.7, 0.0, 1)]
    #[case(1005.4, 374.2, 6)]
    #[case(2010.0, 1122.0, 11)]
    #[case(1600.0, 800.0, 11)]
    fn test_tile_placement(#[case] x: f64, #[case] y: f64, #[case] expected: u32) {
        let projection = CanvasProjection::default();
        let tile = projection.tile_of(x, y);
        assert_eq!(projection.tile_id(tile), expected);
        assert_eq!(projection.tile_id(tile), tile.y * 4 + tile.x);
    }
}

//! Extraction configuration.
//!
//! Everything the extractor treats as a fixed constant of the chart lives here:
//! canvas dimensions, the tile grid shape, the lookback window, and the list of
//! structural labels that are never stars. The defaults describe the bundled
//! all-sky chart. A JSON file may override any subset of fields.

use crate::error::{ExtractError, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Width of the bundled chart's drawing canvas in SVG user units
pub const DEFAULT_CANVAS_WIDTH: f64 = 2010.7097;

/// Height of the bundled chart's drawing canvas in SVG user units
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1122.5203;

/// Labels that match the naming convention but belong to chart furniture
pub const DEFAULT_EXCLUDED_NAMES: [&str; 7] = [
    "Grids", "Source", "Legend", "Border", "Axis", "Ecliptic", "Equator",
];

/// Drawing canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// Grid of tiles laid over the canvas, indexed row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    /// Number of columns (horizontal divisions)
    pub cols: u32,
    /// Number of rows (vertical divisions)
    pub rows: u32,
}

impl TileGrid {
    /// Total number of tiles
    pub fn tile_count(&self) -> u32 {
        self.cols * self.rows
    }

    /// Row-major tile index for a column/row pair, saturating far off the grid
    pub fn tile_id(&self, x: u32, y: u32) -> u32 {
        y.saturating_mul(self.cols).saturating_add(x)
    }

    /// Inverse of [`TileGrid::tile_id`], returning `(row, col)`
    pub fn row_col(&self, tile_id: u32) -> (u32, u32) {
        (tile_id / self.cols, tile_id % self.cols)
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self { cols: 4, rows: 3 }
    }
}

/// Parameters for a single extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub canvas: CanvasSize,
    pub grid: TileGrid,
    /// Lines searched backward from a label, the label line included
    pub lookback_lines: usize,
    pub excluded_names: Vec<String>,
    /// Substring that marks the opening line of a star's path element
    pub element_marker: String,
    /// Magnitude written for every star until real photometry is available
    pub placeholder_magnitude: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            grid: TileGrid::default(),
            lookback_lines: 10,
            excluded_names: DEFAULT_EXCLUDED_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            element_marker: "    <path".to_string(),
            placeholder_magnitude: 2.0,
        }
    }
}

impl ExtractionConfig {
    /// Whether `name` is one of the excluded structural labels
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_names.iter().any(|n| n == name)
    }

    /// Reject configurations that would divide by zero or never search.
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(ExtractError::Config(format!(
                "canvas must have positive size, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if self.grid.cols == 0 || self.grid.rows == 0 {
            return Err(ExtractError::Config(format!(
                "tile grid must have at least one row and column, got {}x{}",
                self.grid.rows, self.grid.cols
            )));
        }
        if self.grid.cols.checked_mul(self.grid.rows).is_none() {
            return Err(ExtractError::Config(format!(
                "tile grid {}x{} has too many tiles",
                self.grid.rows, self.grid.cols
            )));
        }
        if self.lookback_lines == 0 {
            return Err(ExtractError::Config(
                "lookback window must cover at least the label line".to_string(),
            ));
        }
        if self.element_marker.is_empty() {
            return Err(ExtractError::Config(
                "element marker cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from JSON file. Missing fields take their default values.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        info!("Loaded extraction config from {}", path.display());
        Ok(config)
    }

    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| ExtractError::io(path, e))
    }
}

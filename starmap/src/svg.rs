//! Line-oriented lookup of path geometry in Inkscape SVG text.
//!
//! This is not an SVG parser. Inkscape writes one attribute per line, so the
//! element that owns a label is found by walking backward from the label line
//! to the nearest `<path` opener, then forward again to its `d` attribute.

use crate::error::{ExtractError, Result};
use regex::Regex;

/// Relative move-to at the start of path data: `d="m X,Y`
const MOVE_TO_PATTERN: &str = r#" d="m ([0-9.]+),([0-9.]+)"#;

/// Uniform scale transform: `transform="scale(S)"`
const SCALE_PATTERN: &str = r#"transform="scale\(([0-9.]+)\)""#;

/// Marker for a line that carries path data
const PATH_DATA_MARKER: &str = " d=\"";

/// Raw drawing-space point before scaling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
}

/// Compiled geometry patterns, built once per extraction run.
#[derive(Debug, Clone)]
pub struct GeometryParser {
    move_to: Regex,
    scale: Regex,
}

fn parse_number(text: &str, line_idx: usize) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| ExtractError::MalformedNumber {
            line: line_idx + 1,
            text: text.to_string(),
        })
}

impl GeometryParser {
    pub fn new() -> Self {
        Self {
            move_to: Regex::new(MOVE_TO_PATTERN).expect("move-to pattern is valid"),
            scale: Regex::new(SCALE_PATTERN).expect("scale pattern is valid"),
        }
    }

    /// Parse the leading move-to of a path data line.
    ///
    /// Returns `Ok(None)` when the line has no path data or the data does not
    /// open with a relative move-to. `line_idx` is only used for error reports.
    pub fn move_to(&self, line: &str, line_idx: usize) -> Result<Option<RawPoint>> {
        if !line.contains(PATH_DATA_MARKER) {
            return Ok(None);
        }
        let Some(caps) = self.move_to.captures(line) else {
            return Ok(None);
        };
        let x = parse_number(&caps[1], line_idx)?;
        let y = parse_number(&caps[2], line_idx)?;
        Ok(Some(RawPoint { x, y }))
    }

    /// Uniform scale applied to the element, 1.0 when the line has none
    pub fn scale(&self, line: &str, line_idx: usize) -> Result<f64> {
        match self.scale.captures(line) {
            Some(caps) => parse_number(&caps[1], line_idx),
            None => Ok(1.0),
        }
    }

    /// Find the move-to point of the element that owns the label on `anchor`.
    ///
    /// Scans backward over `lookback` lines ending at `anchor` (inclusive) for
    /// lines containing `element_marker`. For each opener, nearest first, the
    /// lines from the opener through the anchor are searched for the first
    /// move-to. An opener without one falls through to the next opener further
    /// back. `Ok(None)` means the window held no usable element.
    pub fn locate_move_to<S: AsRef<str>>(
        &self,
        lines: &[S],
        anchor: usize,
        lookback: usize,
        element_marker: &str,
    ) -> Result<Option<RawPoint>> {
        if anchor >= lines.len() {
            return Ok(None);
        }
        let window_start = (anchor + 1).saturating_sub(lookback);

        for start in (window_start..=anchor).rev() {
            if !lines[start].as_ref().contains(element_marker) {
                continue;
            }
            for (idx, line) in lines.iter().enumerate().take(anchor + 1).skip(start) {
                if let Some(point) = self.move_to(line.as_ref(), idx)? {
                    return Ok(Some(point));
                }
            }
        }
        Ok(None)
    }
}

impl Default for GeometryParser {
    fn default() -> Self {
        Self::new()
    }
}

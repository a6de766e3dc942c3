//! The extraction pass: labels in, star records out.

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::label::{LabelIndex, LabelScanner};
use crate::projection::{round_to, CanvasProjection};
use crate::record::{StarRecord, SvgPos};
use crate::svg::GeometryParser;
use log::debug;

/// Runs label scanning and geometry resolution against one configuration.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractionConfig,
    projection: CanvasProjection,
    labels: LabelScanner,
    geometry: GeometryParser,
}

impl Extractor {
    pub fn new(config: ExtractionConfig) -> Result<Self> {
        config.validate()?;
        let projection = CanvasProjection::new(config.canvas, config.grid);
        Ok(Self {
            config,
            projection,
            labels: LabelScanner::new(),
            geometry: GeometryParser::new(),
        })
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Qualifying star names and the lines they are labeled on
    pub fn scan_labels<S: AsRef<str>>(&self, lines: &[S]) -> LabelIndex {
        self.labels.scan(lines, &self.config)
    }

    /// Resolve each labeled name to a record, in sorted name order.
    ///
    /// Names without a resolvable element are skipped, so ids stay contiguous
    /// over the records actually produced.
    pub fn resolve<S: AsRef<str>>(
        &self,
        lines: &[S],
        labels: &LabelIndex,
    ) -> Result<Vec<StarRecord>> {
        let mut records = Vec::with_capacity(labels.len());

        for (name, line_indices) in labels {
            let Some(&anchor) = line_indices.iter().next() else {
                continue;
            };

            let point = self.geometry.locate_move_to(
                lines,
                anchor,
                self.config.lookback_lines,
                &self.config.element_marker,
            )?;
            let Some(point) = point else {
                debug!("No path element for {name} near line {}", anchor + 1);
                continue;
            };

            let scale = self.geometry.scale(lines[anchor].as_ref(), anchor)?;
            let record = self.build_record(records.len(), name, point.x * scale, point.y * scale);
            debug!(
                "{name}: ra={:.4}h dec={:.4}° tile={}",
                record.ra, record.dec, record.tile_id
            );
            records.push(record);
        }

        Ok(records)
    }

    fn build_record(&self, id: usize, name: &str, x: f64, y: f64) -> StarRecord {
        let (ra, dec) = self.projection.to_celestial(x, y);
        let tile_coords = self.projection.tile_of(x, y);
        StarRecord {
            id,
            name: name.to_string(),
            ra,
            dec,
            magnitude: self.config.placeholder_magnitude,
            tile_id: self.projection.tile_id(tile_coords),
            tile_coords,
            svg_pos: SvgPos {
                x: round_to(x, 2),
                y: round_to(y, 2),
            },
        }
    }

    /// Scan and resolve a whole chart
    pub fn extract(&self, source_text: &str) -> Result<Vec<StarRecord>> {
        let lines: Vec<&str> = source_text.lines().collect();
        let labels = self.scan_labels(&lines);
        self.resolve(&lines, &labels)
    }
}

/// Extract every resolvable named star from chart text.
pub fn extract_all(source_text: &str, config: &ExtractionConfig) -> Result<Vec<StarRecord>> {
    Extractor::new(config.clone())?.extract(source_text)
}

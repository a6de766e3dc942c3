//! Catalog serialization and per-tile statistics.

use crate::config::TileGrid;
use crate::error::{ExtractError, Result};
use crate::record::StarRecord;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the compact catalog
pub const COMPACT_FILE_NAME: &str = "stars.json";

/// File name of the indented catalog
pub const PRETTY_FILE_NAME: &str = "stars_pretty.json";

/// Locations of the two catalog files written by [`write_catalog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub compact: PathBuf,
    pub pretty: PathBuf,
}

fn sorted_by_name(records: &[StarRecord]) -> Vec<&StarRecord> {
    let mut sorted: Vec<&StarRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));
    sorted
}

/// Encode records, sorted by name, as `(compact, pretty)` JSON.
pub fn serialize(records: &[StarRecord]) -> Result<(Vec<u8>, Vec<u8>)> {
    let sorted = sorted_by_name(records);
    let compact = serde_json::to_vec(&sorted)?;
    let pretty = serde_json::to_vec_pretty(&sorted)?;
    Ok((compact, pretty))
}

/// Decode either catalog form
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<StarRecord>> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Write both catalog forms into `output_dir`, creating it if needed.
pub fn write_catalog(records: &[StarRecord], output_dir: &Path) -> Result<CatalogPaths> {
    std::fs::create_dir_all(output_dir).map_err(|e| ExtractError::io(output_dir, e))?;

    let (compact, pretty) = serialize(records)?;
    let paths = CatalogPaths {
        compact: output_dir.join(COMPACT_FILE_NAME),
        pretty: output_dir.join(PRETTY_FILE_NAME),
    };
    std::fs::write(&paths.compact, compact).map_err(|e| ExtractError::io(&paths.compact, e))?;
    std::fs::write(&paths.pretty, pretty).map_err(|e| ExtractError::io(&paths.pretty, e))?;
    Ok(paths)
}

/// Star count for every tile of the grid, empty tiles included.
///
/// Records whose tile lies outside the grid are counted under their own id.
pub fn tile_histogram(records: &[StarRecord], grid: &TileGrid) -> BTreeMap<u32, usize> {
    let mut counts: BTreeMap<u32, usize> = (0..grid.tile_count()).map(|t| (t, 0)).collect();
    for record in records {
        *counts.entry(record.tile_id).or_insert(0) += 1;
    }
    counts
}

/// One report line per grid tile, row-major.
pub fn format_histogram(histogram: &BTreeMap<u32, usize>, grid: &TileGrid) -> Vec<String> {
    (0..grid.tile_count())
        .map(|tile| {
            let (row, col) = grid.row_col(tile);
            let count = histogram.get(&tile).copied().unwrap_or(0);
            format!("  Tile {tile:2} (row {row}, col {col}): {count:3} stars")
        })
        .collect()
}

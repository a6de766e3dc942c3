//! Star catalog extraction from hand-labeled star charts.
//!
//! The source chart is an Inkscape SVG where each plotted star is a `<path>`
//! element carrying an `inkscape:label` such as `"path1024 Ori- Betelgeuse"`.
//! Extraction is a single linear pass over the file's lines:
//!
//! 1. **Label scan**: collect proper names from label annotations
//! 2. **Element lookup**: walk back a bounded window to the owning `<path>`
//! 3. **Projection**: convert the path's move-to point into RA/Dec
//! 4. **Tiling**: bucket the point into a coarse grid over the canvas
//!
//! Names whose element or coordinates cannot be resolved are dropped
//! silently; only malformed numbers and I/O failures are errors.
//!
//! # Usage
//!
//! ```rust
//! use starmap::{extract_all, ExtractionConfig};
//!
//! let svg = concat!(
//!     "    <path\n",
//!     "       d=\"m 100.0,50.0 1,1\"\n",
//!     "       inkscape:label=\"path1 Lyr- Vega\" />\n",
//! );
//! let stars = extract_all(svg, &ExtractionConfig::default()).unwrap();
//! assert_eq!(stars.len(), 1);
//! assert_eq!(stars[0].name, "Vega");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod label;
pub mod projection;
pub mod record;
pub mod svg;

pub use catalog::{
    format_histogram, parse_catalog, serialize, tile_histogram, write_catalog, CatalogPaths,
};
pub use config::{CanvasSize, ExtractionConfig, TileGrid};
pub use error::{ExtractError, Result};
pub use extract::extract_all;
pub use record::{StarRecord, SvgPos, TileCoords};

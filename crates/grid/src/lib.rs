//! # notus-grid
//!
//! Raster grid data model for the Notus drought index pipeline.
//!
//! A [`Grid`] is a single-band 2-D raster of `f64` values with NaN as the
//! no-data marker, anchored to map coordinates by an [`Extent`]. All
//! arithmetic and reductions require identical shape and extent across
//! participating grids and propagate no-data per pixel.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `grid` | The raster type and no-data semantics |
//! | `extent` | Pixel-to-coordinate anchoring |
//! | `ops` | Elementwise subtract / divide between two grids |
//! | `reduce` | Pixelwise sum / mean / cross-grid statistics |
//! | `region` | Polygon region of interest and clipping |
//! | `error` | Error types |

mod error;
mod extent;
mod grid;
pub mod ops;
pub mod reduce;
mod region;

pub use error::GridError;
pub use extent::Extent;
pub use grid::{is_no_data, Grid};
pub use reduce::CrossStats;
pub use region::{clip, Region};

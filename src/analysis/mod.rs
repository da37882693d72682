//! Color analysis of decoded raster images
//!
//! This module contains the statistics side of mosaic composition:
//! - Explicit three-channel color values and packed-RGB conversions
//! - Per-pixel color grid extraction
//! - Stride-sampled average color computation

/// Stride-sampled averaging and per-pixel color grid extraction
pub mod average;
/// Color value type, packed-RGB conversions, and distance metric
pub mod color;

pub use average::{average_color, color_grid};
pub use color::{Color, color_distance};

//! Composition constants and runtime configuration defaults

/// Pixel sampling step used when averaging source images and model subregions
pub const DEFAULT_STRIDE: u32 = 10;

// Default sample composition layout
/// Default number of tiles horizontally
pub const DEFAULT_GRID_WIDTH: u32 = 4;
/// Default number of tiles vertically
pub const DEFAULT_GRID_HEIGHT: u32 = 4;
/// Default width of each tile in pixels
pub const DEFAULT_TILE_WIDTH: u32 = 500;
/// Default height of each tile in pixels
pub const DEFAULT_TILE_HEIGHT: u32 = 750;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension in pixels
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

// Output settings
/// Directory composed mosaics are saved into
pub const SAVE_DIRECTORY: &str = "mosaics";
/// Default base name for output files
pub const DEFAULT_OUTPUT_NAME: &str = "mosaic";

/// File extensions accepted when scanning a source directory
///
/// Matched case-sensitively against the substring after the final `.`.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["png", "jpg"];

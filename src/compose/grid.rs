//! Output grid geometry and validation

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Layout of the output canvas
///
/// Defines a canvas of `grid_width * tile_width` by `grid_height *
/// tile_height` pixels, subdivided into `grid_width * grid_height`
/// equal-size tiles. All fields must be at least 1 for composition to
/// proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of tiles horizontally
    pub grid_width: u32,
    /// Number of tiles vertically
    pub grid_height: u32,
    /// Width of each tile in pixels
    pub tile_width: u32,
    /// Height of each tile in pixels
    pub tile_height: u32,
}

impl GridSpec {
    /// Create a grid specification
    pub const fn new(grid_width: u32, grid_height: u32, tile_width: u32, tile_height: u32) -> Self {
        Self {
            grid_width,
            grid_height,
            tile_width,
            tile_height,
        }
    }

    /// Validate the grid and return the implied canvas size in pixels
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`](crate::MosaicError) if any
    /// dimension is zero, or if the canvas would overflow `u32` or exceed
    /// [`MAX_CANVAS_DIMENSION`] on either axis.
    pub fn validate(&self) -> Result<(u32, u32)> {
        let fields = [
            ("grid_width", self.grid_width),
            ("grid_height", self.grid_height),
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
        ];
        for (parameter, value) in fields {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
        }

        let canvas_width = self
            .grid_width
            .checked_mul(self.tile_width)
            .filter(|width| *width <= MAX_CANVAS_DIMENSION)
            .ok_or_else(|| {
                invalid_parameter(
                    "grid_width",
                    &self.grid_width,
                    &format!(
                        "canvas width exceeds the maximum of {MAX_CANVAS_DIMENSION} pixels"
                    ),
                )
            })?;

        let canvas_height = self
            .grid_height
            .checked_mul(self.tile_height)
            .filter(|height| *height <= MAX_CANVAS_DIMENSION)
            .ok_or_else(|| {
                invalid_parameter(
                    "grid_height",
                    &self.grid_height,
                    &format!(
                        "canvas height exceeds the maximum of {MAX_CANVAS_DIMENSION} pixels"
                    ),
                )
            })?;

        Ok((canvas_width, canvas_height))
    }

    /// Total number of grid cells
    pub const fn cell_count(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }

    /// Pixel offset of the cell at the given row and column
    pub const fn cell_offset(&self, row: u32, col: u32) -> (u32, u32) {
        (col * self.tile_width, row * self.tile_height)
    }
}

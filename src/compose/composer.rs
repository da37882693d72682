//! Canvas rendering for tiled, average-color, and model-matched mosaics

use crate::analysis::average::average_color;
use crate::compose::grid::GridSpec;
use crate::compose::selection::matched_sequence;
use crate::io::configuration::DEFAULT_STRIDE;
use crate::io::error::{MosaicError, Result};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

/// Composes source images into a mosaic canvas
///
/// All modes traverse the grid row-major (all columns of row 0 first) and
/// own their canvas exclusively for the duration of the call: nothing can
/// observe a partially drawn composite. The sampling stride controls every
/// internal average-color computation.
#[derive(Debug, Clone, Copy)]
pub struct MosaicComposer {
    stride: u32,
}

impl Default for MosaicComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl MosaicComposer {
    /// Create a composer with the default sampling stride
    pub const fn new() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
        }
    }

    /// Create a composer with an explicit sampling stride
    pub const fn with_stride(stride: u32) -> Self {
        Self { stride }
    }

    /// The sampling stride used for internal average-color computations
    pub const fn stride(&self) -> u32 {
        self.stride
    }

    /// Compose a mosaic by cycling through the sources in order
    ///
    /// The cell at row `r`, column `c` receives the source at index
    /// `(r * grid_width + c) mod sources.len()`, scaled to exactly the tile
    /// size. Scale factors are computed per axis, so sources with a
    /// different aspect ratio are stretched rather than letterboxed.
    ///
    /// # Errors
    ///
    /// Returns an error if the source collection is empty or the grid fails
    /// validation.
    pub fn compose_tiled(&self, sources: &[RgbImage], grid: &GridSpec) -> Result<RgbImage> {
        grid.validate()?;
        let order = Self::cyclic_sequence(sources, grid)?;
        Self::render(sources, &order, grid)
    }

    /// Compose a mosaic of solid rectangles of each source's average color
    ///
    /// Cell selection and traversal are identical to [`Self::compose_tiled`],
    /// but each cell is filled with the selected source's stride-sampled
    /// average color instead of a scaled copy. Averages are recomputed per
    /// cell, never cached. Intended for fast previews rather than final
    /// output.
    ///
    /// # Errors
    ///
    /// Returns an error if the source collection is empty or the grid fails
    /// validation.
    pub fn compose_average(&self, sources: &[RgbImage], grid: &GridSpec) -> Result<RgbImage> {
        if sources.is_empty() {
            return Err(MosaicError::EmptySourceCollection);
        }

        let (canvas_width, canvas_height) = grid.validate()?;
        let mut canvas = RgbImage::new(canvas_width, canvas_height);

        for row in 0..grid.grid_height {
            for col in 0..grid.grid_width {
                let index = Self::cyclic_index(row, col, grid, sources.len());
                let source = Self::source_at(sources, index)?;
                let average = average_color(source, self.stride)?;
                Self::fill_cell(&mut canvas, grid, row, col, Rgb::from(average));
            }
        }

        Ok(canvas)
    }

    /// Compose a mosaic whose tiles are chosen to approximate a model image
    ///
    /// Every source's average color is computed once; each cell then takes
    /// the source nearest to the average color of the corresponding model
    /// subregion, with equal distances resolved in favor of the lowest
    /// index. The selected sequence is rendered exactly as
    /// [`Self::compose_tiled`] renders its cyclic one.
    ///
    /// # Errors
    ///
    /// Returns an error if the source collection is empty, the grid fails
    /// validation, or the model is smaller than the canvas.
    pub fn compose_matched(
        &self,
        sources: &[RgbImage],
        model: &RgbImage,
        grid: &GridSpec,
    ) -> Result<RgbImage> {
        let order = matched_sequence(sources, model, grid, self.stride)?;
        Self::render(sources, &order, grid)
    }

    /// Source index for a cell under cyclic selection
    const fn cyclic_index(row: u32, col: u32, grid: &GridSpec, source_count: usize) -> usize {
        (row as usize * grid.grid_width as usize + col as usize) % source_count
    }

    fn cyclic_sequence(sources: &[RgbImage], grid: &GridSpec) -> Result<Vec<usize>> {
        if sources.is_empty() {
            return Err(MosaicError::EmptySourceCollection);
        }

        let mut order = Vec::with_capacity(grid.cell_count());
        for row in 0..grid.grid_height {
            for col in 0..grid.grid_width {
                order.push(Self::cyclic_index(row, col, grid, sources.len()));
            }
        }

        Ok(order)
    }

    fn source_at(sources: &[RgbImage], index: usize) -> Result<&RgbImage> {
        sources
            .get(index)
            .ok_or_else(|| MosaicError::SourceIndexOutOfRange {
                index,
                source_count: sources.len(),
            })
    }

    /// Render a selected-index sequence onto a fresh canvas
    ///
    /// Each selected source is scaled to the tile size with independent
    /// per-axis linear interpolation and blitted at its cell offset.
    fn render(sources: &[RgbImage], order: &[usize], grid: &GridSpec) -> Result<RgbImage> {
        let (canvas_width, canvas_height) = grid.validate()?;
        let mut canvas = RgbImage::new(canvas_width, canvas_height);

        for (cell, &index) in order.iter().enumerate() {
            let row = (cell / grid.grid_width as usize) as u32;
            let col = (cell % grid.grid_width as usize) as u32;

            let source = Self::source_at(sources, index)?;
            let scaled = imageops::resize(
                source,
                grid.tile_width,
                grid.tile_height,
                FilterType::Triangle,
            );

            let (x, y) = grid.cell_offset(row, col);
            imageops::replace(&mut canvas, &scaled, i64::from(x), i64::from(y));
        }

        Ok(canvas)
    }

    fn fill_cell(canvas: &mut RgbImage, grid: &GridSpec, row: u32, col: u32, pixel: Rgb<u8>) {
        let (x0, y0) = grid.cell_offset(row, col);
        for y in 0..grid.tile_height {
            for x in 0..grid.tile_width {
                canvas.put_pixel(x0 + x, y0 + y, pixel);
            }
        }
    }
}

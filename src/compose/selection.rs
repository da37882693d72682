//! Nearest-color tile selection against a model image

use crate::analysis::average::average_color;
use crate::analysis::color::{Color, color_distance};
use crate::compose::grid::GridSpec;
use crate::io::error::{MosaicError, Result};
use image::{RgbImage, imageops};

/// Find the palette entry closest to the target color
///
/// Linear scan over the palette using a strict less-than comparison against
/// the best distance so far, so when two entries are at equal distance the
/// first one encountered (lowest index) wins. Returns `None` only for an
/// empty palette.
pub fn nearest_color_index(target: Color, palette: &[Color]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, candidate) in palette.iter().enumerate() {
        let distance = color_distance(target, *candidate);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }

    best.map(|(index, _)| index)
}

/// Select the nearest source image for every grid cell of the model
///
/// Precomputes the average color of every source once, then walks the grid
/// row-major: for each cell the exact model subregion at that cell's offset
/// and size is averaged and matched against the source palette. Selection is
/// greedy and independent per cell, so one source may win any number of
/// cells. Returned indices are in cell traversal order.
///
/// # Errors
///
/// Returns an error if:
/// - The source collection is empty
/// - The grid fails validation
/// - The model is smaller than the canvas the grid defines
pub fn matched_sequence(
    sources: &[RgbImage],
    model: &RgbImage,
    grid: &GridSpec,
    stride: u32,
) -> Result<Vec<usize>> {
    if sources.is_empty() {
        return Err(MosaicError::EmptySourceCollection);
    }

    let (canvas_width, canvas_height) = grid.validate()?;
    let (model_width, model_height) = model.dimensions();
    if model_width < canvas_width || model_height < canvas_height {
        return Err(MosaicError::ModelTooSmall {
            required: (canvas_width, canvas_height),
            actual: (model_width, model_height),
        });
    }

    let palette = sources
        .iter()
        .map(|source| average_color(source, stride))
        .collect::<Result<Vec<_>>>()?;

    let mut selected = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.grid_height {
        for col in 0..grid.grid_width {
            let (x, y) = grid.cell_offset(row, col);
            let region = imageops::crop_imm(model, x, y, grid.tile_width, grid.tile_height);
            let goal = average_color(&*region, stride)?;

            // Non-empty palette, so a winner always exists
            let index = nearest_color_index(goal, &palette)
                .ok_or(MosaicError::EmptySourceCollection)?;
            selected.push(index);
        }
    }

    Ok(selected)
}

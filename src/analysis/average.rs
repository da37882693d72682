//! Per-pixel color extraction and stride-sampled averaging
//!
//! Averaging every pixel of every source image is the dominant cost of
//! model-matched composition, so the sampling stride is exposed directly:
//! stride 1 is exact, larger strides trade accuracy for speed.

use crate::analysis::color::Color;
use crate::io::error::{Result, invalid_parameter};
use image::{GenericImageView, Rgb, RgbImage};
use ndarray::Array2;

/// Extract the color of every pixel as a `[row][col]` grid
///
/// Decodes each pixel into an explicit three-channel value. Pure function of
/// the input raster.
pub fn color_grid(raster: &RgbImage) -> Array2<Color> {
    let (width, height) = raster.dimensions();

    Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        Color::from(*raster.get_pixel(col as u32, row as u32))
    })
}

/// Compute the average color of a raster, sampling every `stride` pixels
///
/// Rows and columns are both stepped by `stride` starting from zero, each
/// channel is summed over the sampled pixels, and the sums are divided by
/// the sample count using truncating integer division. A stride of 1 samples
/// every pixel; a stride exceeding both dimensions samples only the pixel at
/// (0, 0).
///
/// Works on any view with RGB pixels, so model subregions can be averaged
/// without copying them out first.
///
/// # Errors
///
/// Returns [`MosaicError::InvalidParameter`](crate::MosaicError) if `stride`
/// is zero or the raster contains no pixels.
pub fn average_color<I>(raster: &I, stride: u32) -> Result<Color>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    if stride == 0 {
        return Err(invalid_parameter(
            "stride",
            &stride,
            &"sampling stride must be at least 1",
        ));
    }

    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(invalid_parameter(
            "raster",
            &format!("{width}x{height}"),
            &"raster must contain at least one pixel",
        ));
    }

    let mut sum_red: u64 = 0;
    let mut sum_green: u64 = 0;
    let mut sum_blue: u64 = 0;
    let mut samples: u64 = 0;

    for row in (0..height).step_by(stride as usize) {
        for col in (0..width).step_by(stride as usize) {
            let Rgb([red, green, blue]) = raster.get_pixel(col, row);
            sum_red += u64::from(red);
            sum_green += u64::from(green);
            sum_blue += u64::from(blue);
            samples += 1;
        }
    }

    // Both loops execute at least once for any non-empty raster
    Ok(Color {
        red: (sum_red / samples) as u8,
        green: (sum_green / samples) as u8,
        blue: (sum_blue / samples) as u8,
    })
}

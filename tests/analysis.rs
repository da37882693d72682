//! Validates average-color computation, sampling strides, and the distance metric

use image::{Rgb, RgbImage};
use photomosaic::analysis::{Color, average_color, color_distance, color_grid};
use photomosaic::MosaicError;

#[test]
fn test_average_is_exact_truncated_mean_at_stride_one() {
    // 4x4 raster: red sums to 400, green to 200 (half the columns), blue to 0
    let raster = RgbImage::from_fn(4, 4, |x, _y| {
        let green = if x < 2 { 25 } else { 0 };
        Rgb([25, green, 0])
    });

    let average = average_color(&raster, 1).expect("averaging a 4x4 raster should succeed");
    assert_eq!(
        average,
        Color::new(25, 12, 0),
        "400/16 = 25, 200/16 truncates 12.5 to 12, 0/16 = 0"
    );
}

#[test]
fn test_average_of_solid_color_is_exact_for_every_stride() {
    let color = Color::new(201, 57, 9);
    let raster = RgbImage::from_pixel(17, 11, Rgb::from(color));

    for stride in [1, 2, 3, 5, 10, 16] {
        let average = average_color(&raster, stride).expect("averaging should succeed");
        assert_eq!(
            average, color,
            "a solid raster must average to its own color at stride {stride}"
        );
    }
}

#[test]
fn test_stride_exceeding_both_dimensions_samples_origin_pixel() {
    let mut raster = RgbImage::from_pixel(3, 3, Rgb([255, 255, 255]));
    raster.put_pixel(0, 0, Rgb([10, 20, 30]));

    let average = average_color(&raster, 50).expect("averaging should succeed");
    assert_eq!(
        average,
        Color::new(10, 20, 30),
        "only the pixel at (0, 0) should be sampled"
    );
}

#[test]
fn test_stride_samples_only_step_multiples() {
    // Only (0,0), (2,0), (0,2), and (2,2) land on the stride-2 lattice
    let raster = RgbImage::from_fn(4, 4, |x, y| {
        if x % 2 == 0 && y % 2 == 0 {
            Rgb([100, 0, 0])
        } else {
            Rgb([0, 200, 0])
        }
    });

    let average = average_color(&raster, 2).expect("averaging should succeed");
    assert_eq!(
        average,
        Color::new(100, 0, 0),
        "off-lattice pixels must not contribute"
    );
}

#[test]
fn test_average_channels_stay_in_range() {
    let raster = RgbImage::from_fn(8, 8, |x, y| Rgb([255, (x * 31) as u8, (y * 31) as u8]));

    let average = average_color(&raster, 1).expect("averaging should succeed");
    assert_eq!(average.red, 255, "a saturated channel averages to 255");
}

#[test]
fn test_zero_stride_is_rejected() {
    let raster = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));

    let err = average_color(&raster, 0).unwrap_err();
    assert!(
        matches!(err, MosaicError::InvalidParameter { parameter: "stride", .. }),
        "stride 0 must fail parameter validation, got: {err}"
    );
}

#[test]
fn test_color_distance_properties() {
    let a = Color::new(0, 0, 0);
    let b = Color::new(3, 4, 0);
    let c = Color::new(120, 45, 200);

    assert!(
        (color_distance(a, b) - 5.0).abs() < f64::EPSILON,
        "3-4-5 triangle in RGB space"
    );
    assert!(color_distance(c, c).abs() < f64::EPSILON, "identity");
    assert!(
        (color_distance(a, c) - color_distance(c, a)).abs() < f64::EPSILON,
        "symmetry"
    );
}

#[test]
fn test_color_grid_is_indexed_row_major() {
    let mut raster = RgbImage::from_pixel(3, 2, Rgb([0, 0, 0]));
    raster.put_pixel(2, 0, Rgb([255, 0, 0]));
    raster.put_pixel(0, 1, Rgb([0, 255, 0]));

    let grid = color_grid(&raster);
    assert_eq!(grid.dim(), (2, 3), "grid is (rows, cols)");
    assert_eq!(grid[[0, 2]], Color::new(255, 0, 0), "[row 0][col 2]");
    assert_eq!(grid[[1, 0]], Color::new(0, 255, 0), "[row 1][col 0]");
}

#[test]
fn test_packed_conversion_round_trips() {
    let color = Color::from_packed(0x00_12_34_56);
    assert_eq!(color, Color::new(0x12, 0x34, 0x56));
    assert_eq!(color.to_packed(), 0x00_12_34_56);
}

//! Validates command-line defaults and end-to-end batch composition

use clap::Parser;
use image::{Rgb, RgbImage};
use photomosaic::io::cli::{Cli, Mode, MosaicProcessor};
use std::fs;

#[test]
fn test_defaults_match_sample_composition() {
    let cli = Cli::try_parse_from(["photomosaic", "sources"]).expect("parse should succeed");

    assert_eq!(cli.grid_width, 4);
    assert_eq!(cli.grid_height, 4);
    assert_eq!(cli.tile_width, 500);
    assert_eq!(cli.tile_height, 750);
    assert_eq!(cli.stride, 10);
    assert_eq!(cli.output, "mosaic");
    assert!(cli.mode.is_none(), "no mode means every supported mode");
    assert!(cli.should_show_progress());
}

#[test]
fn test_mode_labels_name_output_files() {
    assert_eq!(Mode::Tiled.label(), "tiled");
    assert_eq!(Mode::Average.label(), "average");
    assert_eq!(Mode::Matched.label(), "matched");
}

#[test]
fn test_matched_mode_without_model_is_rejected() {
    let cli = Cli::try_parse_from(["photomosaic", "sources", "-M", "matched", "--quiet"])
        .expect("parse should succeed");

    let mut processor = MosaicProcessor::new(cli);
    let err = processor.process().unwrap_err();
    assert!(
        err.to_string().contains("requires --model"),
        "matched without a model must fail, got: {err}"
    );
}

#[test]
fn test_processor_composes_and_saves_every_supported_mode() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let sources_dir = dir.path().join("sources");
    fs::create_dir(&sources_dir).expect("failed to create sources dir");

    RgbImage::from_pixel(5, 5, Rgb([255, 0, 0]))
        .save(sources_dir.join("red.png"))
        .expect("failed to write red.png");
    RgbImage::from_pixel(5, 5, Rgb([0, 0, 255]))
        .save(sources_dir.join("blue.png"))
        .expect("failed to write blue.png");

    let model_path = dir.path().join("model.png");
    RgbImage::from_pixel(40, 40, Rgb([250, 5, 5]))
        .save(&model_path)
        .expect("failed to write model.png");

    let out_dir = dir.path().join("out");
    let cli = Cli::try_parse_from([
        "photomosaic",
        sources_dir.to_str().expect("utf-8 path"),
        "--model",
        model_path.to_str().expect("utf-8 path"),
        "--grid-width",
        "2",
        "--grid-height",
        "2",
        "--tile-width",
        "10",
        "--tile-height",
        "10",
        "--stride",
        "1",
        "--output",
        "test",
        "--output-dir",
        out_dir.to_str().expect("utf-8 path"),
        "--quiet",
    ])
    .expect("parse should succeed");

    let mut processor = MosaicProcessor::new(cli);
    processor.process().expect("batch composition should succeed");

    for mode in ["tiled", "average", "matched"] {
        assert!(
            out_dir.join(format!("test_{mode}.png")).exists(),
            "missing {mode} output"
        );
    }

    // The all-red model should match the red source in every cell
    let matched = image::open(out_dir.join("test_matched.png"))
        .expect("matched output should decode")
        .to_rgb8();
    assert_eq!(matched.dimensions(), (20, 20));
    assert_eq!(*matched.get_pixel(10, 10), Rgb([255, 0, 0]));
}

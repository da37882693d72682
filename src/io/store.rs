//! Image decoding, directory scanning, and PNG persistence
//!
//! Directory loading uses partial-failure semantics: an unreadable file is
//! skipped with a warning and the scan continues. This is a property of the
//! loading step alone; composition fails fast instead.

use crate::io::configuration::{SAVE_DIRECTORY, SUPPORTED_EXTENSIONS};
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Load every supported image from a directory, in directory-listing order
///
/// Entries that are not files are skipped, as is any file whose extension
/// (the substring after the final `.`, matched case-sensitively) is not
/// supported. A file that fails to decode is skipped with a warning rather
/// than failing the whole load. A missing or unlistable directory yields an
/// empty collection.
// Allow print for user feedback on skipped files and missing directories
#[allow(clippy::print_stderr)]
pub fn load_images_from_directory(directory: &Path) -> Vec<RgbImage> {
    let Ok(entries) = fs::read_dir(directory) else {
        eprintln!(
            "Failed to read from directory - no valid directory at '{}'",
            directory.display()
        );
        return Vec::new();
    };

    let mut images = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || !has_supported_extension(&path) {
            continue;
        }

        match load_image(&path) {
            Ok(image) => images.push(image),
            Err(error) => eprintln!("Skipping unreadable file: {error}"),
        }
    }

    images
}

/// Decode a single image file into an RGB raster
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] if the file cannot be read or decoded.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|source| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decoded.to_rgb8())
}

/// Save a raster as a PNG into the fixed save directory
///
/// # Errors
///
/// Returns an error if the save directory cannot be created or the image
/// cannot be encoded.
pub fn save_image(raster: &RgbImage, name: &str) -> Result<PathBuf> {
    save_image_to(raster, Path::new(SAVE_DIRECTORY), name)
}

/// Save a raster as a PNG into an explicit directory, creating it if absent
///
/// Logs the saved filename and returns the path written.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot
/// be encoded.
// Allow print for user feedback on the saved filename
#[allow(clippy::print_stderr)]
pub fn save_image_to(raster: &RgbImage, directory: &Path, name: &str) -> Result<PathBuf> {
    fs::create_dir_all(directory).map_err(|source| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create directory",
        source,
    })?;

    let path = directory.join(format!("{name}.png"));
    raster.save(&path).map_err(|source| MosaicError::ImageExport {
        path: path.clone(),
        source,
    })?;

    eprintln!("Saved image to file {}", path.display());
    Ok(path)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| SUPPORTED_EXTENSIONS.contains(&extension))
}

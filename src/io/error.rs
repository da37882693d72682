//! Error types for analysis, composition, and image persistence

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to load a source or model image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a composed mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Composition parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Composition was invoked with no source images
    EmptySourceCollection,

    /// Model image is smaller than the composite it must cover
    ModelTooSmall {
        /// Minimum model dimensions (width, height) required by the grid
        required: (u32, u32),
        /// Actual model dimensions (width, height)
        actual: (u32, u32),
    },

    /// Source index exceeds the collection size
    SourceIndexOutOfRange {
        /// The invalid source index
        index: usize,
        /// Number of images in the collection
        source_count: usize,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptySourceCollection => {
                write!(f, "Source collection is empty; nothing to compose")
            }
            Self::ModelTooSmall { required, actual } => {
                write!(
                    f,
                    "Model image is {}x{} but the composite requires at least {}x{}",
                    actual.0, actual.1, required.0, required.1
                )
            }
            Self::SourceIndexOutOfRange {
                index,
                source_count,
            } => {
                write!(
                    f,
                    "Source index {index} is out of range for a collection of {source_count}"
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("grid_width", &0, &"must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'grid_width' = '0': must be at least 1"
        );
    }

    #[test]
    fn test_model_too_small_display() {
        let err = MosaicError::ModelTooSmall {
            required: (200, 100),
            actual: (150, 100),
        };
        assert_eq!(
            err.to_string(),
            "Model image is 150x100 but the composite requires at least 200x100"
        );
    }
}

//! Error types for dataset loading and patch extraction

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pipeline operations
///
/// Decode failures (`ImageLoad`, `InvalidImageData`) are absorbed by the image
/// cache and only surface as log lines. Every other variant ends the run.
#[derive(Debug)]
pub enum PipelineError {
    /// Annotation table is missing, lacks a column, or holds a mistyped value
    AnnotationParse {
        /// Path to the annotation table
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Failed to decode a source slide image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Decoded pixels could not be arranged into a (height, width, channel) buffer
    InvalidImageData {
        /// Path to the image file
        path: PathBuf,
        /// Description of the shape mismatch
        reason: String,
    },

    /// Diagnostic label has no class code
    UnknownLabel {
        /// Raw `bethesda_system` value from the table
        label: String,
        /// Cell whose row carried the label
        cell_id: String,
    },

    /// Failed to encode or write a cropped patch
    ImageExport {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Cropped patch cannot be represented as an encodable image
    InvalidPatch {
        /// Destination of the patch
        path: PathBuf,
        /// Description of the problem
        reason: String,
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
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnnotationParse { path, source } => {
                write!(
                    f,
                    "Failed to parse annotations '{}': {source}",
                    path.display()
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidImageData { path, reason } => {
                write!(f, "Invalid image data in '{}': {reason}", path.display())
            }
            Self::UnknownLabel { label, cell_id } => {
                write!(f, "Unknown Bethesda label '{label}' for cell {cell_id}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export patch to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidPatch { path, reason } => {
                write!(f, "Invalid patch for '{}': {reason}", path.display())
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
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AnnotationParse { source, .. } => Some(source),
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidImageData { .. } | Self::UnknownLabel { .. } | Self::InvalidPatch { .. } => {
                None
            }
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Create a file system error for a failed directory creation
pub fn create_dir_error(path: impl Into<PathBuf>, source: std::io::Error) -> PipelineError {
    PipelineError::FileSystem {
        path: path.into(),
        operation: "create directory",
        source,
    }
}

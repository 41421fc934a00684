//! Extraction constants and runtime configuration

use std::path::PathBuf;

/// Half the side length of a cropped patch, in pixels
pub const CROP_HALF_SIZE: usize = 50;

/// Channels kept per decoded pixel (RGB)
pub const IMAGE_CHANNELS: usize = 3;

/// Field delimiter of the annotation table
pub const ANNOTATION_DELIMITER: u8 = b',';

// Logging
/// Environment variable consulted for the log filter
pub const LOG_FILTER_ENV: &str = "RUST_LOG";
/// Log target of the end-of-run failure count, shown even with `--quiet`
pub const SUMMARY_LOG_TARGET: &str = "cellcrop::summary";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Paths supplied by the caller for a single extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Annotation table (CSV with a header row)
    pub annotations_path: PathBuf,
    /// Directory holding the slide images named in the table
    pub images_root: PathBuf,
    /// Directory that receives one subdirectory per class code
    pub output_root: PathBuf,
}

impl PipelineConfig {
    /// Bundle the three run paths
    pub fn new(
        annotations_path: impl Into<PathBuf>,
        images_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            annotations_path: annotations_path.into(),
            images_root: images_root.into(),
            output_root: output_root.into(),
        }
    }
}

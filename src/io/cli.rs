//! Command-line interface for a single extraction run

use crate::io::configuration::PipelineConfig;
use crate::io::error::Result;
use crate::io::logging::{init_logging, level_for};
use crate::io::progress::ProgressManager;
use crate::pipeline::{CellPipeline, ExtractionSummary};
use clap::Parser;
use log::error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cellcrop")]
#[command(
    author,
    version,
    about = "Crop annotated cell nuclei out of cytology slides into per-class folders"
)]
/// Command-line arguments for the patch extraction tool
pub struct Cli {
    /// Annotation table (CSV with image_filename, cell_id, nucleus_x, nucleus_y, bethesda_system)
    #[arg(value_name = "ANNOTATIONS")]
    pub annotations: PathBuf,

    /// Directory containing the slide images named in the table
    #[arg(value_name = "IMAGES_DIR")]
    pub images: PathBuf,

    /// Directory that receives one subdirectory per class code
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: PathBuf,

    /// Suppress progress bars and informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-image and per-class details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Paths for the run described by these arguments
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::new(&self.annotations, &self.images, &self.output)
    }

    /// Progress manager matching the `--quiet` flag
    pub const fn progress_manager(&self) -> ProgressManager {
        if self.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        }
    }
}

/// Install logging, then load the dataset and extract every annotated cell
///
/// # Errors
///
/// Returns an error if the annotation table cannot be parsed, a label is not
/// a known Bethesda class, or a patch cannot be written
pub fn run(cli: &Cli) -> Result<ExtractionSummary> {
    init_logging(level_for(cli.quiet, cli.verbose));

    let progress = cli.progress_manager();
    let pipeline = CellPipeline::new(&cli.pipeline_config(), &progress)?;
    pipeline.run(&progress)
}

/// Log a failed run with the error's message and hand back a successful summary
///
/// `main` turns `None` into a failing exit status.
pub fn report(result: Result<ExtractionSummary>) -> Option<ExtractionSummary> {
    match result {
        Ok(summary) => Some(summary),
        Err(e) => {
            error!("{e}");
            None
        }
    }
}

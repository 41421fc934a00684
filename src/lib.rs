//! Per-class nucleus patch extraction for annotated cervical cytology slides
//!
//! The pipeline reads a cell annotation table, decodes every slide it
//! references, crops a fixed-size window around each annotated nucleus and
//! writes the patch under a folder named for its Bethesda class.

/// Annotation table, Bethesda label lookup and slide image cache
pub mod dataset;
/// Patch cropping and the per-cell extraction loop
pub mod extraction;
/// Input/output operations, configuration and error handling
pub mod io;
/// Dataset-level driver for a full extraction run
pub mod pipeline;

pub use io::error::{PipelineError, Result};

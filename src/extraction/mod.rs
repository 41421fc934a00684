//! Patch cropping and the per-cell extraction loop

/// Bounds-clamped window cropping
pub mod crop;
/// Extraction loop and output layout
pub mod extractor;

pub use extractor::{CellExtractor, ExtractionSummary, ensure_output_root};

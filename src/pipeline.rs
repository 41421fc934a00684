//! Dataset-level driver tying the annotation store, image cache and extractor together

use crate::dataset::{AnnotationStore, ImageCache};
use crate::extraction::CellExtractor;
use crate::io::configuration::PipelineConfig;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use log::debug;

pub use crate::extraction::ExtractionSummary;

/// A loaded dataset ready for extraction
///
/// Construction parses the table and decodes every referenced slide, so all
/// images stay in memory for the lifetime of the pipeline.
#[derive(Debug)]
pub struct CellPipeline {
    store: AnnotationStore,
    cache: ImageCache,
    extractor: CellExtractor,
}

impl CellPipeline {
    /// Load the annotation table, then decode every image it references
    ///
    /// # Errors
    ///
    /// Returns an error if the annotation table is missing or malformed.
    /// Undecodable images are not errors.
    pub fn new(config: &PipelineConfig, progress: &ProgressManager) -> Result<Self> {
        let store = AnnotationStore::load(&config.annotations_path)?;
        debug!(
            "{} annotated cells, labels: {:?}",
            store.len(),
            store.distinct_labels()
        );

        let cache = ImageCache::build(
            &config.images_root,
            store.distinct_image_filenames(),
            progress,
        );

        Ok(Self::from_parts(
            store,
            cache,
            CellExtractor::new(&config.output_root),
        ))
    }

    /// Assemble a pipeline from already-built parts
    pub const fn from_parts(
        store: AnnotationStore,
        cache: ImageCache,
        extractor: CellExtractor,
    ) -> Self {
        Self {
            store,
            cache,
            extractor,
        }
    }

    /// Extract every annotated cell into the output root
    ///
    /// # Errors
    ///
    /// Returns an error on an unknown Bethesda label or a failed write
    pub fn run(&self, progress: &ProgressManager) -> Result<ExtractionSummary> {
        self.extractor
            .extract_all(self.store.records(), &self.cache, progress)
    }

    /// The parsed annotation table
    pub const fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// The decoded slide images
    pub const fn cache(&self) -> &ImageCache {
        &self.cache
    }
}

//! Per-cell extraction loop: crop, classify, persist, count failures

use crate::dataset::{AnnotationRecord, BethesdaClass, ImageCache, map_label};
use crate::extraction::crop::{crop, has_signal};
use crate::io::configuration::{CROP_HALF_SIZE, SUMMARY_LOG_TARGET};
use crate::io::error::{Result, create_dir_error};
use crate::io::image::save_patch;
use crate::io::progress::ProgressManager;
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Outcome counts of a completed extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Rows visited
    pub processed: usize,
    /// Patches written to disk
    pub written: usize,
    /// Rows skipped because the crop was empty or blank
    pub failed: usize,
    /// Patches written per class
    pub per_class: BTreeMap<BethesdaClass, usize>,
}

impl ExtractionSummary {
    fn record_written(&mut self, class: BethesdaClass) {
        self.processed += 1;
        self.written += 1;
        *self.per_class.entry(class).or_insert(0) += 1;
    }

    const fn record_failed(&mut self) {
        self.processed += 1;
        self.failed += 1;
    }

    /// Patches written for `class`
    pub fn written_for(&self, class: BethesdaClass) -> usize {
        self.per_class.get(&class).copied().unwrap_or(0)
    }
}

/// Create `path` and any missing parents; succeeds if it already exists
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_output_root(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| create_dir_error(path, e))
}

/// Writes one patch per annotated cell under `<output_root>/<class_code>/`
#[derive(Debug, Clone)]
pub struct CellExtractor {
    output_root: PathBuf,
}

impl CellExtractor {
    /// Create an extractor writing below `output_root`
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Root directory of the class folders
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Directory receiving patches of `class`
    pub fn class_dir(&self, class: BethesdaClass) -> PathBuf {
        self.output_root.join(class.code())
    }

    /// Destination of the patch for `record`: `<class_code>/<cell_id>_<image_filename>`
    pub fn patch_path(&self, class: BethesdaClass, record: &AnnotationRecord) -> PathBuf {
        self.class_dir(class)
            .join(format!("{}_{}", record.cell_id, record.image_filename))
    }

    /// Crop, classify and write every record in order
    ///
    /// Missing images and blank crops are counted as failures and logged.
    ///
    /// # Errors
    ///
    /// Stops at the first record that:
    /// - Carries a label outside the six known Bethesda diagnoses
    /// - Needs a class directory that cannot be created
    /// - Produces a patch that cannot be encoded or written
    pub fn extract_all<'a, I>(
        &self,
        records: I,
        cache: &ImageCache,
        progress: &ProgressManager,
    ) -> Result<ExtractionSummary>
    where
        I: IntoIterator<Item = &'a AnnotationRecord>,
        I::IntoIter: ExactSizeIterator,
    {
        info!("Extracting cells...");
        ensure_output_root(&self.output_root)?;

        let records = records.into_iter();
        let phase = progress.start_phase("cells", records.len());
        let mut summary = ExtractionSummary::default();

        for record in records {
            let buffer = cache.get(&record.image_filename);
            let patch = crop(buffer, record.nucleus_x, record.nucleus_y, CROP_HALF_SIZE);

            let class = map_label(&record.bethesda_system, &record.cell_id)?;
            let class_dir = self.class_dir(class);
            ensure_output_root(&class_dir)?;

            if has_signal(&patch) {
                save_patch(&patch, &self.patch_path(class, record))?;
                summary.record_written(class);
            } else {
                summary.record_failed();
                phase.suspend(|| {
                    warn!(
                        "Cell {} from image {} is empty!",
                        record.cell_id, record.image_filename
                    );
                });
            }
            phase.advance();
        }
        phase.finish();

        for (class, count) in &summary.per_class {
            debug!("{class}: {count} patches");
        }
        info!(
            target: SUMMARY_LOG_TARGET,
            "Cells extracted successfully! ({} failed)",
            summary.failed
        );

        Ok(summary)
    }
}

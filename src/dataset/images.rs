//! Eagerly decoded slide images keyed by filename

use crate::io::image::decode_rgb;
use crate::io::progress::ProgressManager;
use log::{debug, info, warn};
use ndarray::{Array3, ArrayView3};
use std::collections::HashMap;
use std::path::Path;

/// Filename to decoded pixels, built once and read-only afterwards
///
/// Every requested filename has an entry. Files that failed to decode hold
/// `None`, which the extractor later treats as an empty crop.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: HashMap<String, Option<Array3<u8>>>,
}

impl ImageCache {
    /// Decode `root_dir/<filename>` for each filename
    ///
    /// Decode failures are logged and stored as absent entries rather than
    /// returned.
    pub fn build<'a, I>(root_dir: &Path, filenames: I, progress: &ProgressManager) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let filenames: Vec<&str> = filenames.into_iter().collect();
        info!("Loading images from {}...", root_dir.display());

        let phase = progress.start_phase("images", filenames.len());
        let mut entries = HashMap::with_capacity(filenames.len());

        for filename in filenames {
            let path = root_dir.join(filename);
            let buffer = match decode_rgb(&path) {
                Ok(pixels) => {
                    debug!("Decoded {} ({:?})", path.display(), pixels.dim());
                    Some(pixels)
                }
                Err(e) => {
                    phase.suspend(|| warn!("{e}"));
                    None
                }
            };
            entries.insert(filename.to_string(), buffer);
            phase.advance();
        }
        phase.finish();

        let cache = Self { entries };
        info!("Total of images loaded: {}", cache.loaded_count());
        cache
    }

    /// Assemble a cache from pre-decoded entries
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Option<Array3<u8>>)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Pixels for `filename`, or `None` if it is unknown or failed to decode
    pub fn get(&self, filename: &str) -> Option<ArrayView3<'_, u8>> {
        self.entries
            .get(filename)
            .and_then(Option::as_ref)
            .map(Array3::view)
    }

    /// Whether `filename` has an entry, decoded or not
    pub fn contains(&self, filename: &str) -> bool {
        self.entries.contains_key(filename)
    }

    /// Number of entries, including absent ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that decoded successfully
    pub fn loaded_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.is_some()).count()
    }
}

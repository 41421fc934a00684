//! Typed annotation table with row iteration and distinct-value queries

use crate::io::configuration::ANNOTATION_DELIMITER;
use crate::io::error::{PipelineError, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::path::{Path, PathBuf};

/// One annotated cell
///
/// Columns of the table that are not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnnotationRecord {
    /// Slide image the cell belongs to, used verbatim as the cache key
    pub image_filename: String,
    /// Cell identifier, unique within its image
    pub cell_id: String,
    /// Nucleus column in pixels
    pub nucleus_x: i64,
    /// Nucleus row in pixels
    pub nucleus_y: i64,
    /// Long-form Bethesda diagnosis
    pub bethesda_system: String,
}

impl AnnotationRecord {
    /// Build a record from its fields
    pub fn new(
        image_filename: impl Into<String>,
        cell_id: impl Into<String>,
        nucleus_x: i64,
        nucleus_y: i64,
        bethesda_system: impl Into<String>,
    ) -> Self {
        Self {
            image_filename: image_filename.into(),
            cell_id: cell_id.into(),
            nucleus_x,
            nucleus_y,
            bethesda_system: bethesda_system.into(),
        }
    }
}

/// Parsed annotation table, immutable once loaded
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    records: Vec<AnnotationRecord>,
}

impl AnnotationStore {
    /// Load and type-check a comma-delimited table with a header row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - A required column is missing
    /// - A coordinate is not an integer
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PipelineError::AnnotationParse {
            path: path.to_path_buf(),
            source: csv::Error::from(e),
        })?;

        Self::parse(file, path.to_path_buf())
    }

    /// Parse a table from any reader
    ///
    /// # Errors
    ///
    /// Returns an error if a row is malformed or a required column is missing
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Self::parse(reader, PathBuf::from("<reader>"))
    }

    fn parse<R: std::io::Read>(reader: R, origin: PathBuf) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(ANNOTATION_DELIMITER)
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<AnnotationRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| PipelineError::AnnotationParse {
                path: origin,
                source: e,
            })?;

        Ok(Self { records })
    }

    /// Wrap already-typed records
    pub const fn from_records(records: Vec<AnnotationRecord>) -> Self {
        Self { records }
    }

    /// Records in file order
    pub fn rows(&self) -> impl Iterator<Item = &AnnotationRecord> {
        self.records.iter()
    }

    /// Records as a slice, in file order
    pub fn records(&self) -> &[AnnotationRecord] {
        &self.records
    }

    /// Unique image filenames referenced by the table
    pub fn distinct_image_filenames(&self) -> BTreeSet<&str> {
        self.distinct_by(|record| &record.image_filename)
    }

    /// Unique raw diagnostic labels present in the table
    pub fn distinct_labels(&self) -> BTreeSet<&str> {
        self.distinct_by(|record| &record.bethesda_system)
    }

    fn distinct_by<'a, F>(&'a self, column: F) -> BTreeSet<&'a str>
    where
        F: Fn(&'a AnnotationRecord) -> &'a String,
    {
        self.records.iter().map(|r| column(r).as_str()).collect()
    }

    /// Number of annotated cells
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no rows
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

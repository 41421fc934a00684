//! Bethesda diagnostic classes and the long-form label lookup

use crate::io::error::{PipelineError, Result};
use std::fmt;

/// Short class used as the output subdirectory name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BethesdaClass {
    /// Atypical squamous cells, cannot exclude HSIL
    AscH,
    /// Atypical squamous cells of undetermined significance
    AscUs,
    /// High-grade squamous intraepithelial lesion
    Hsil,
    /// Low-grade squamous intraepithelial lesion
    Lsil,
    /// Squamous cell carcinoma
    Scc,
    /// Negative for intraepithelial lesion
    Normal,
}

/// Long-form labels as they appear in the annotation table
pub const LABEL_MAP: [(&str, BethesdaClass); 6] = [
    ("ASC-H", BethesdaClass::AscH),
    ("ASC-US", BethesdaClass::AscUs),
    ("HSIL", BethesdaClass::Hsil),
    ("LSIL", BethesdaClass::Lsil),
    ("SCC", BethesdaClass::Scc),
    ("Negative for intraepithelial lesion", BethesdaClass::Normal),
];

impl BethesdaClass {
    /// Every class, in label-map order
    pub const ALL: [Self; 6] = [
        Self::AscH,
        Self::AscUs,
        Self::Hsil,
        Self::Lsil,
        Self::Scc,
        Self::Normal,
    ];

    /// Directory-safe short code
    pub const fn code(self) -> &'static str {
        match self {
            Self::AscH => "asch",
            Self::AscUs => "ascus",
            Self::Hsil => "hsil",
            Self::Lsil => "lsil",
            Self::Scc => "scc",
            Self::Normal => "normal",
        }
    }

    /// Exact-match lookup of a long-form label
    pub fn from_label(raw_label: &str) -> Option<Self> {
        LABEL_MAP
            .iter()
            .find(|(label, _)| *label == raw_label)
            .map(|&(_, class)| class)
    }
}

impl fmt::Display for BethesdaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Map a raw `bethesda_system` value to its class
///
/// # Errors
///
/// Returns `UnknownLabel` if the label is not one of the six known diagnoses
pub fn map_label(raw_label: &str, cell_id: &str) -> Result<BethesdaClass> {
    BethesdaClass::from_label(raw_label).ok_or_else(|| PipelineError::UnknownLabel {
        label: raw_label.to_string(),
        cell_id: cell_id.to_string(),
    })
}

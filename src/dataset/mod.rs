//! Annotation table, label lookup and slide image cache

/// Typed annotation rows and distinct-value queries
pub mod annotations;
/// Eagerly decoded slide images
pub mod images;
/// Bethesda class codes
pub mod labels;

pub use annotations::{AnnotationRecord, AnnotationStore};
pub use images::ImageCache;
pub use labels::{BethesdaClass, map_label};

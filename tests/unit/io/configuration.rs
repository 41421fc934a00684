//! Tests for extraction constants and run configuration

#[cfg(test)]
mod tests {
    use cellcrop::io::configuration::{
        ANNOTATION_DELIMITER, CROP_HALF_SIZE, IMAGE_CHANNELS, PipelineConfig,
    };
    use std::path::Path;

    // Tests patch size matches the 100x100 dataset convention
    // Verified by changing the half size
    #[test]
    fn test_crop_half_size() {
        assert_eq!(CROP_HALF_SIZE * 2, 100);
    }

    // Tests decoded buffers are RGB
    // Verified by switching to RGBA
    #[test]
    fn test_channel_count() {
        assert_eq!(IMAGE_CHANNELS, 3);
    }

    // Tests the table is comma-delimited
    // Verified by switching to tab-delimited input
    #[test]
    fn test_annotation_delimiter() {
        assert_eq!(ANNOTATION_DELIMITER, b',');
    }

    // Tests the config constructor keeps each path in place
    // Verified by swapping fields in the constructor
    #[test]
    fn test_pipeline_config_new() {
        let config = PipelineConfig::new("a.csv", "images", "cells");

        assert_eq!(config.annotations_path, Path::new("a.csv"));
        assert_eq!(config.images_root, Path::new("images"));
        assert_eq!(config.output_root, Path::new("cells"));
    }
}

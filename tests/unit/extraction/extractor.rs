//! Tests for the extraction loop, output layout and failure bookkeeping

#[cfg(test)]
mod tests {
    use cellcrop::PipelineError;
    use cellcrop::dataset::{AnnotationRecord, BethesdaClass, ImageCache};
    use cellcrop::extraction::{CellExtractor, ensure_output_root};
    use cellcrop::io::progress::ProgressManager;
    use ndarray::Array3;
    use std::error::Error;

    fn cache_with(name: &str, pixels: Option<Array3<u8>>) -> ImageCache {
        ImageCache::from_entries([(name.to_string(), pixels)])
    }

    fn textured(height: usize, width: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, 3), |(y, x, _)| ((y * 7 + x) % 200 + 30) as u8)
    }

    // Tests the two-row scenario: one full patch and one clamped corner patch
    // Verified by dropping rows whose window leaves the image
    #[test]
    fn test_extracts_full_and_clamped_patches() -> Result<(), Box<dyn Error>> {
        let out = tempfile::tempdir()?;
        let cache = cache_with("img1.png", Some(textured(200, 200)));
        let records = vec![
            AnnotationRecord::new("img1.png", "1", 100, 100, "LSIL"),
            AnnotationRecord::new("img1.png", "2", 5, 5, "SCC"),
        ];

        let extractor = CellExtractor::new(out.path());
        let summary = extractor.extract_all(&records, &cache, &ProgressManager::hidden())?;

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.written, 2);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.written_for(BethesdaClass::Lsil), 1);
        assert_eq!(summary.written_for(BethesdaClass::Scc), 1);

        let full = image::open(out.path().join("lsil/1_img1.png"))?;
        assert_eq!((full.width(), full.height()), (100, 100));

        let corner = image::open(out.path().join("scc/2_img1.png"))?;
        assert_eq!((corner.width(), corner.height()), (55, 55));
        Ok(())
    }

    // Tests an undecoded image counts one failure and writes nothing
    // Verified by writing a zero-sized file for absent images
    #[test]
    fn test_absent_image_counts_failure() -> Result<(), Box<dyn Error>> {
        let out = tempfile::tempdir()?;
        let cache = cache_with("broken.png", None);
        let records = vec![AnnotationRecord::new("broken.png", "5", 50, 50, "HSIL")];

        let summary = CellExtractor::new(out.path()).extract_all(
            &records,
            &cache,
            &ProgressManager::hidden(),
        )?;

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.written, 0);
        assert!(out.path().join("hsil").is_dir());
        assert!(!out.path().join("hsil/5_broken.png").exists());
        Ok(())
    }

    // Tests a filename missing from the cache is treated as absent
    // Verified by erroring on unknown cache keys
    #[test]
    fn test_unknown_image_counts_failure() -> Result<(), Box<dyn Error>> {
        let out = tempfile::tempdir()?;
        let cache = cache_with("img1.png", Some(textured(10, 10)));
        let records = vec![AnnotationRecord::new("other.png", "8", 5, 5, "ASC-US")];

        let summary = CellExtractor::new(out.path()).extract_all(
            &records,
            &cache,
            &ProgressManager::hidden(),
        )?;

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.processed, 1);
        Ok(())
    }

    // Tests an all-zero crop is skipped and counted
    // Verified by writing patches without the blank check
    #[test]
    fn test_blank_crop_counts_failure() -> Result<(), Box<dyn Error>> {
        let out = tempfile::tempdir()?;
        let mut pixels = Array3::<u8>::zeros((300, 300, 3));
        pixels[[250, 250, 0]] = 9;
        let cache = cache_with("dark.png", Some(pixels));
        let records = vec![
            AnnotationRecord::new("dark.png", "1", 60, 60, "ASC-H"),
            AnnotationRecord::new("dark.png", "2", 250, 250, "ASC-H"),
        ];

        let summary = CellExtractor::new(out.path()).extract_all(
            &records,
            &cache,
            &ProgressManager::hidden(),
        )?;

        assert_eq!(summary.failed, 1);
        assert_eq!(summary.written, 1);
        assert!(!out.path().join("asch/1_dark.png").exists());
        assert!(out.path().join("asch/2_dark.png").exists());
        Ok(())
    }

    // Tests an unknown label halts the batch after earlier rows were written
    // Verified by skipping rows with unknown labels
    #[test]
    fn test_unknown_label_halts_batch() -> Result<(), Box<dyn Error>> {
        let out = tempfile::tempdir()?;
        let cache = cache_with("img1.png", Some(textured(200, 200)));
        let records = vec![
            AnnotationRecord::new("img1.png", "1", 100, 100, "HSIL"),
            AnnotationRecord::new("img1.png", "2", 100, 100, "Unknown"),
            AnnotationRecord::new("img1.png", "3", 100, 100, "LSIL"),
        ];

        let result = CellExtractor::new(out.path()).extract_all(
            &records,
            &cache,
            &ProgressManager::hidden(),
        );

        assert!(matches!(
            result,
            Err(PipelineError::UnknownLabel { ref label, ref cell_id })
                if label == "Unknown" && cell_id == "2"
        ));
        assert!(out.path().join("hsil/1_img1.png").exists());
        assert!(!out.path().join("lsil/3_img1.png").exists());
        Ok(())
    }

    // Tests rerunning overwrites patches and gives the same counts
    // Verified by refusing to overwrite existing files
    #[test]
    fn test_rerun_overwrites() -> Result<(), Box<dyn Error>> {
        let out = tempfile::tempdir()?;
        let cache = cache_with("img1.png", Some(textured(120, 120)));
        let records = vec![AnnotationRecord::new(
            "img1.png",
            "4",
            60,
            60,
            "Negative for intraepithelial lesion",
        )];
        let extractor = CellExtractor::new(out.path());

        let first = extractor.extract_all(&records, &cache, &ProgressManager::hidden())?;
        let second = extractor.extract_all(&records, &cache, &ProgressManager::hidden())?;

        assert_eq!(first, second);
        assert!(out.path().join("normal/4_img1.png").is_file());
        Ok(())
    }

    // Tests the deterministic output path layout
    // Verified by swapping cell id and filename
    #[test]
    fn test_patch_path_layout() {
        let extractor = CellExtractor::new("/data/cells");
        let record = AnnotationRecord::new("slide.png", "17", 0, 0, "HSIL");

        assert_eq!(
            extractor.patch_path(BethesdaClass::Hsil, &record),
            std::path::PathBuf::from("/data/cells/hsil/17_slide.png")
        );
        assert_eq!(extractor.output_root(), std::path::Path::new("/data/cells"));
    }

    // Tests output root creation is idempotent and creates parents
    // Verified by using create_dir instead of create_dir_all
    #[test]
    fn test_ensure_output_root_idempotent() -> Result<(), Box<dyn Error>> {
        let base = tempfile::tempdir()?;
        let nested = base.path().join("a/b/c");

        ensure_output_root(&nested)?;
        ensure_output_root(&nested)?;

        assert!(nested.is_dir());
        Ok(())
    }

    // Tests an empty record list still creates the root and reports zero
    // Verified by skipping root creation when there is no work
    #[test]
    fn test_empty_records() -> Result<(), Box<dyn Error>> {
        let base = tempfile::tempdir()?;
        let root = base.path().join("cells");
        let records: Vec<AnnotationRecord> = Vec::new();

        let summary = CellExtractor::new(&root).extract_all(
            &records,
            &ImageCache::default(),
            &ProgressManager::hidden(),
        )?;

        assert_eq!(summary.processed, 0);
        assert!(root.is_dir());
        Ok(())
    }
}

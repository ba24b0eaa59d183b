//! Feature file loading

mod processor;

use crate::config::runtime::FileProcessorPreferences;
pub use processor::{FileMetadata, FileProcessingResult, FileProcessor, FileProcessorError};

/// Process a file with default settings
pub fn process_file(file_path: &str) -> Result<FileProcessingResult, FileProcessorError> {
    FileProcessor::new().process_file(file_path)
}

pub fn create_processor_from_preferences(prefs: &FileProcessorPreferences) -> FileProcessor {
    FileProcessor::from_preferences(prefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_module_api() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("cart.feature");
        fs::write(&file_path, "Feature: Cart\n").unwrap();

        let result = process_file(file_path.to_str().unwrap()).unwrap();
        assert_eq!(result.metadata.line_count, 1);
    }

    #[test]
    fn test_processor_from_preferences() {
        let prefs = FileProcessorPreferences {
            require_feature_extension: true,
        };
        assert!(create_processor_from_preferences(&prefs).require_feature_extension);
    }
}

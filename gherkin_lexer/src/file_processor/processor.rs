//! Feature file loading with size, encoding and extension checks

use crate::config::constants::compile_time::file_processing::{
    FEATURE_EXTENSION, LARGE_FILE_THRESHOLD, MAX_FILE_SIZE,
};
use crate::config::runtime::FileProcessorPreferences;
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileProcessorError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid file extension: expected .feature, found {extension:?}")]
    InvalidExtension { extension: Option<String> },

    #[error("File too large: {size} bytes (max: {max_size})")]
    FileTooLarge { size: u64, max_size: u64 },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid UTF-8 encoding in file: {path}")]
    InvalidEncoding { path: String },

    #[error("I/O error reading file: {message}")]
    IoError { message: String },

    #[error("Invalid file path: {path}")]
    InvalidPath { path: String },
}

impl FileProcessorError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::FileNotFound { .. } => codes::file_processing::FILE_NOT_FOUND,
            Self::InvalidExtension { .. } => codes::file_processing::INVALID_EXTENSION,
            Self::FileTooLarge { .. } => codes::file_processing::FILE_TOO_LARGE,
            Self::PermissionDenied { .. } => codes::file_processing::PERMISSION_DENIED,
            Self::InvalidEncoding { .. } => codes::file_processing::INVALID_ENCODING,
            Self::IoError { .. } => codes::file_processing::IO_ERROR,
            Self::InvalidPath { .. } => codes::file_processing::INVALID_PATH,
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }
}

#[derive(Debug, Clone)]
pub struct FileMetadata {
    /// Canonical file path
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Lower-cased extension, if any
    pub extension: Option<String>,
    /// Number of lines as the scanner will see them
    pub line_count: usize,
    pub is_feature_file: bool,
}

impl FileMetadata {
    pub fn human_readable_size(&self) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = self.size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", self.size, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    pub fn is_large_file(&self) -> bool {
        self.size > LARGE_FILE_THRESHOLD
    }
}

/// Loaded document text with its metadata
#[derive(Debug, Clone)]
pub struct FileProcessingResult {
    pub source: String,
    pub metadata: FileMetadata,
    pub processing_duration: Duration,
}

impl FileProcessingResult {
    /// Wrap in-memory text, e.g. standard input, as if it had been read from `path`
    pub fn from_source(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        let path = path.into();
        let source = source.into();
        let extension = lowercase_extension(&path);

        Self {
            metadata: FileMetadata {
                is_feature_file: extension.as_deref() == Some(FEATURE_EXTENSION),
                size: source.len() as u64,
                line_count: source.lines().count(),
                extension,
                path,
            },
            source,
            processing_duration: Duration::ZERO,
        }
    }

    pub fn display_path(&self) -> String {
        self.metadata.path.display().to_string()
    }
}

pub struct FileProcessor {
    /// Reject files without a .feature extension
    pub require_feature_extension: bool,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self {
            require_feature_extension: false,
        }
    }

    pub fn from_preferences(prefs: &FileProcessorPreferences) -> Self {
        Self {
            require_feature_extension: prefs.require_feature_extension,
        }
    }

    pub fn with_feature_extension_required(mut self, required: bool) -> Self {
        self.require_feature_extension = required;
        self
    }

    /// Read a document and collect its metadata
    pub fn process_file(
        &self,
        file_path: &str,
    ) -> Result<FileProcessingResult, FileProcessorError> {
        let start_time = Instant::now();

        log_debug!("Starting file processing", "file" => file_path);

        let path = self.validate_path(file_path)?;
        let mut metadata = self.get_metadata(&path)?;
        self.validate_file(&metadata, file_path)?;
        let source = self.read_file(&path, file_path)?;

        metadata.line_count = source.lines().count();

        let result = FileProcessingResult {
            source,
            metadata,
            processing_duration: start_time.elapsed(),
        };

        log_success!(
            codes::success::FILE_PROCESSING_SUCCESS,
            "File processed successfully",
            "file" => file_path,
            "size_human" => result.metadata.human_readable_size(),
            "lines" => result.metadata.line_count,
            "is_large_file" => result.metadata.is_large_file(),
            "duration_ms" => format!("{:.2}", result.processing_duration.as_secs_f64() * 1000.0)
        );

        Ok(result)
    }

    fn validate_path(&self, file_path: &str) -> Result<PathBuf, FileProcessorError> {
        if file_path.is_empty() {
            let error = FileProcessorError::InvalidPath {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "Empty file path provided");
            return Err(error);
        }

        let path = Path::new(file_path);

        if !path.exists() {
            let error = FileProcessorError::FileNotFound {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "File not found", "path" => file_path);
            return Err(error);
        }

        if !path.is_file() {
            let error = FileProcessorError::InvalidPath {
                path: file_path.to_string(),
            };
            log_error!(error.error_code(), "Path is not a file", "path" => file_path);
            return Err(error);
        }

        path.canonicalize().map_err(|e| {
            let error = FileProcessorError::IoError {
                message: format!("Failed to resolve path '{}': {}", file_path, e),
            };
            log_error!(error.error_code(), "Failed to canonicalize path",
                "path" => file_path,
                "io_error" => e);
            error
        })
    }

    fn get_metadata(&self, path: &Path) -> Result<FileMetadata, FileProcessorError> {
        let metadata = fs::metadata(path).map_err(|e| {
            let error = match e.kind() {
                ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
                    path: path.display().to_string(),
                },
                _ => FileProcessorError::IoError {
                    message: format!("Failed to read metadata for '{}': {}", path.display(), e),
                },
            };
            log_error!(error.error_code(), "Failed to read file metadata",
                "path" => path.display(),
                "io_error" => e);
            error
        })?;

        let extension = lowercase_extension(path);

        Ok(FileMetadata {
            path: path.to_path_buf(),
            size: metadata.len(),
            is_feature_file: extension.as_deref() == Some(FEATURE_EXTENSION),
            extension,
            line_count: 0,
        })
    }

    fn validate_file(
        &self,
        metadata: &FileMetadata,
        file_path: &str,
    ) -> Result<(), FileProcessorError> {
        if metadata.size > MAX_FILE_SIZE {
            let error = FileProcessorError::FileTooLarge {
                size: metadata.size,
                max_size: MAX_FILE_SIZE,
            };
            log_error!(error.error_code(), "File exceeds maximum size limit",
                "file" => file_path,
                "size_bytes" => metadata.size,
                "limit_bytes" => MAX_FILE_SIZE);
            return Err(error);
        }

        if self.require_feature_extension && !metadata.is_feature_file {
            let error = FileProcessorError::InvalidExtension {
                extension: metadata.extension.clone(),
            };
            log_error!(error.error_code(), "File does not have required .feature extension",
                "file" => file_path,
                "extension" => metadata.extension.as_deref().unwrap_or("none"));
            return Err(error);
        }

        Ok(())
    }

    fn read_file(&self, path: &Path, file_path: &str) -> Result<String, FileProcessorError> {
        fs::read_to_string(path).map_err(|e| {
            let error = match e.kind() {
                ErrorKind::PermissionDenied => FileProcessorError::PermissionDenied {
                    path: path.display().to_string(),
                },
                ErrorKind::InvalidData => FileProcessorError::InvalidEncoding {
                    path: path.display().to_string(),
                },
                _ => FileProcessorError::IoError {
                    message: format!("Failed to read file '{}': {}", path.display(), e),
                },
            };
            log_error!(error.error_code(), "Failed to read file",
                "file" => file_path,
                "io_error" => e);
            error
        })
    }
}

impl Default for FileProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn test_process_valid_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("login.feature");
        let content = "Feature: Login\n  Scenario: ok\n";
        fs::write(&file_path, content).unwrap();

        let result = FileProcessor::new()
            .process_file(file_path.to_str().unwrap())
            .unwrap();

        assert_eq!(result.source, content);
        assert_eq!(result.metadata.line_count, 2);
        assert_eq!(result.metadata.size, content.len() as u64);
        assert!(result.metadata.is_feature_file);
        assert!(!result.metadata.is_large_file());
    }

    #[test]
    fn test_file_not_found() {
        let result = FileProcessor::new().process_file("missing.feature");
        assert_matches!(result, Err(FileProcessorError::FileNotFound { .. }));
    }

    #[test]
    fn test_empty_path() {
        let result = FileProcessor::new().process_file("");
        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempdir().unwrap();
        let result = FileProcessor::new().process_file(dir.path().to_str().unwrap());
        assert_matches!(result, Err(FileProcessorError::InvalidPath { .. }));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("empty.feature");
        fs::write(&file_path, "").unwrap();

        let result = FileProcessor::new()
            .process_file(file_path.to_str().unwrap())
            .unwrap();
        assert_eq!(result.metadata.size, 0);
        assert_eq!(result.metadata.line_count, 0);

        let tokens = crate::lexical::tokenize(&result.source).unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].location.line, 1);
    }

    #[test]
    fn test_extension_requirement() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("notes.txt");
        fs::write(&file_path, "Feature: x\n").unwrap();

        let lenient = FileProcessor::new().process_file(file_path.to_str().unwrap());
        assert!(lenient.is_ok());

        let strict = FileProcessor::new()
            .with_feature_extension_required(true)
            .process_file(file_path.to_str().unwrap());
        assert_matches!(
            strict,
            Err(FileProcessorError::InvalidExtension { extension: Some(ref ext) }) if ext == "txt"
        );
    }

    #[test]
    fn test_invalid_encoding() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary.feature");
        fs::write(&file_path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let result = FileProcessor::new().process_file(file_path.to_str().unwrap());
        assert_matches!(result, Err(FileProcessorError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_file_too_large() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("large.feature");
        fs::write(&file_path, "a".repeat((MAX_FILE_SIZE + 1) as usize)).unwrap();

        let result = FileProcessor::new().process_file(file_path.to_str().unwrap());
        assert_matches!(
            result,
            Err(FileProcessorError::FileTooLarge { max_size, .. }) if max_size == MAX_FILE_SIZE
        );
    }

    #[test]
    fn test_from_source() {
        let result = FileProcessingResult::from_source("<stdin>", "Feature: x\n\n");
        assert_eq!(result.metadata.line_count, 2);
        assert_eq!(result.display_path(), "<stdin>");
        assert!(!result.metadata.is_feature_file);
    }

    #[test]
    fn test_error_classification() {
        let error = FileProcessorError::FileNotFound {
            path: "x.feature".to_string(),
        };

        assert_eq!(error.error_code().as_str(), "E005");
        assert_eq!(error.category(), "FileProcessing");
        assert!(!error.is_recoverable());

        assert!(FileProcessorError::InvalidExtension { extension: None }.is_recoverable());
    }

    #[test]
    fn test_human_readable_size() {
        let metadata = FileMetadata {
            path: PathBuf::from("a.feature"),
            size: 1536,
            extension: Some("feature".to_string()),
            line_count: 1,
            is_feature_file: true,
        };
        assert_eq!(metadata.human_readable_size(), "1.50 KB");
    }
}

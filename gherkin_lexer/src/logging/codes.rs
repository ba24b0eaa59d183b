//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
    pub const CONFIGURATION_ERROR: Code = Code::new("ERR003");
}

/// File processing error codes
pub mod file_processing {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const INVALID_EXTENSION: Code = Code::new("E006");
    pub const FILE_TOO_LARGE: Code = Code::new("E007");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const INVALID_ENCODING: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const INVALID_PATH: Code = Code::new("E012");
}

/// Lexical layer error codes
pub mod lexical {
    use super::Code;

    pub const NO_SUCH_LANGUAGE: Code = Code::new("E020");
    pub const UNKNOWN_DEFAULT_DIALECT: Code = Code::new("E021");
}

/// Parser diagnostic codes
pub mod diagnostics {
    use super::Code;

    pub const PARSER_ERROR: Code = Code::new("E040");
    pub const UNEXPECTED_TOKEN: Code = Code::new("E041");
    pub const UNEXPECTED_EOF: Code = Code::new("E042");
    pub const AST_BUILDER_ERROR: Code = Code::new("E043");
    pub const COMPOSITE_ERRORS: Code = Code::new("E044");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const FILE_PROCESSING_SUCCESS: Code = Code::new("I006");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            // System
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal error",
                "File a bug report with the offending document attached",
            ),
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "Logging or runtime initialization failed",
                "Check that initialization runs once per process",
            ),
            ErrorMetadata::new(
                "ERR003",
                "System",
                Severity::High,
                false,
                true,
                "Configuration could not be loaded",
                "Check the configuration file path and TOML syntax",
            ),
            // File processing
            ErrorMetadata::new(
                "E005",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "Document not found",
                "Check the path and that the file exists",
            ),
            ErrorMetadata::new(
                "E006",
                "FileProcessing",
                Severity::Medium,
                true,
                false,
                "Document does not have a .feature extension",
                "Rename the file or disable the extension requirement",
            ),
            ErrorMetadata::new(
                "E007",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "Document exceeds the maximum size",
                "Split the feature into smaller files",
            ),
            ErrorMetadata::new(
                "E009",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "Permission denied while reading document",
                "Check file permissions",
            ),
            ErrorMetadata::new(
                "E010",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "Document is not valid UTF-8",
                "Re-encode the file as UTF-8",
            ),
            ErrorMetadata::new(
                "E011",
                "FileProcessing",
                Severity::High,
                false,
                false,
                "I/O error while reading document",
                "Retry or check the underlying storage",
            ),
            ErrorMetadata::new(
                "E012",
                "FileProcessing",
                Severity::Medium,
                false,
                false,
                "Path is not a regular file",
                "Pass a file path rather than a directory",
            ),
            // Lexical
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                true,
                false,
                "Language directive names an unknown dialect",
                "Use a language code from the built-in dialect table",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Critical,
                false,
                true,
                "Configured default dialect is not registered",
                "Set the default dialect to a known language code",
            ),
            // Diagnostics
            ErrorMetadata::new(
                "E040",
                "Parser",
                Severity::High,
                true,
                false,
                "Unspecified parser error",
                "Inspect the reported location",
            ),
            ErrorMetadata::new(
                "E041",
                "Parser",
                Severity::High,
                true,
                false,
                "Token not allowed at this position",
                "Use one of the expected constructs at the reported location",
            ),
            ErrorMetadata::new(
                "E042",
                "Parser",
                Severity::High,
                true,
                false,
                "Document ended before a construct was complete",
                "Complete the open construct before the end of the file",
            ),
            ErrorMetadata::new(
                "E043",
                "Parser",
                Severity::High,
                true,
                false,
                "Document tree could not be built",
                "Inspect the reported location",
            ),
            ErrorMetadata::new(
                "E044",
                "Parser",
                Severity::High,
                true,
                false,
                "Multiple parser errors",
                "Fix each listed error",
            ),
            // Success
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                false,
                "Logging system initialized",
                "No action required",
            ),
            ErrorMetadata::new(
                "I006",
                "FileProcessing",
                Severity::Low,
                true,
                false,
                "Document read successfully",
                "Continue to tokenization",
            ),
            ErrorMetadata::new(
                "I020",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Tokenization completed",
                "No action required",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

//! Editor marker mapping
//!
//! Editors number rows and columns from zero, diagnostics from one.

use super::error::ParserError;
use serde::{Deserialize, Serialize};

/// One error annotation for a text editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorMarker {
    pub row: usize,
    pub column: usize,
    pub text: String,
    pub severity: String,
}

impl EditorMarker {
    fn from_error(error: &ParserError) -> Self {
        let location = error.location().unwrap_or_default();

        Self {
            row: location.line.saturating_sub(1),
            column: location.column.saturating_sub(1),
            text: error.message().to_string(),
            severity: "error".to_string(),
        }
    }
}

/// One marker per error; composites contribute one marker per child
pub fn to_editor_markers(error: &ParserError) -> Vec<EditorMarker> {
    error
        .flatten()
        .into_iter()
        .map(EditorMarker::from_error)
        .collect()
}

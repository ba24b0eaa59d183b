//! Structured parser diagnostics and their editor marker mapping

pub mod error;
pub mod markers;

pub use error::{ParserError, ParserResult};
pub use markers::{to_editor_markers, EditorMarker};

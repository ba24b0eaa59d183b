//! Shared location types for the Gherkin lexer
//!
//! Locations and spans are produced by the line abstraction and the matcher,
//! and consumed by diagnostics and the editor marker mapping.

pub mod span;

pub use span::{Location, SourceMap, Span};

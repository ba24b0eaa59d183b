//! Keyword dialects for Gherkin documents

pub mod dialect;

pub use dialect::{Dialect, DialectTable};

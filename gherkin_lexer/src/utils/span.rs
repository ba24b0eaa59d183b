//! Source location tracking for the Gherkin lexer
//!
//! Lines and columns are 1-based and measured in Unicode code points, never in
//! bytes, so that columns stay correct for non-ASCII feature files.
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_width::UnicodeWidthChar;

/// A line/column location in a document.
///
/// A column of `0` means the column has not been resolved yet; the matcher
/// resolves it when a token is matched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, 0 when unresolved)
    pub column: usize,
}

impl Location {
    /// Create a new location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Create a location whose column is still unresolved
    pub fn unresolved(line: usize) -> Self {
        Self { line, column: 0 }
    }

    /// Check whether the column has been resolved
    pub fn is_resolved(&self) -> bool {
        self.column != 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A located piece of text inside a line: a table cell or a tag.
///
/// The column is absolute within the original line, leading indentation
/// included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Column of the first character (1-based)
    pub column: usize,
    /// The extracted text
    pub text: String,
}

impl Span {
    /// Create a new span
    pub fn new(column: usize, text: impl Into<String>) -> Self {
        Self {
            column,
            text: text.into(),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.text)
    }
}

/// A source map that keeps the document lines for error rendering
#[derive(Debug, Clone)]
pub struct SourceMap {
    lines: Vec<String>,
}

impl SourceMap {
    /// Create a new source map from source text
    pub fn new(source: &str) -> Self {
        Self {
            lines: source.lines().map(str::to_string).collect(),
        }
    }

    /// Get a line of text by line number (1-based)
    pub fn get_line(&self, line_num: usize) -> Option<&str> {
        if line_num == 0 {
            return None;
        }
        self.lines.get(line_num - 1).map(String::as_str)
    }

    /// Number of lines in the document
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Format an error message with the offending line and a caret under the column
    pub fn format_error(&self, location: &Location, message: &str) -> String {
        let mut result = String::new();

        result.push_str(&format!("error: {}\n", message));
        result.push_str(&format!("  --> {}\n", location));

        if let Some(line) = self.get_line(location.line) {
            let line_num_str = location.line.to_string();
            let padding = " ".repeat(line_num_str.len());

            result.push_str(&format!("{} |\n", padding));
            result.push_str(&format!("{} | {}\n", line_num_str, line));

            result.push_str(&format!(
                "{} | {}^\n",
                padding,
                caret_padding(line, location.column)
            ));
        }

        result
    }
}

/// Whitespace that lines a caret up with `column` of `line` on a terminal.
/// Tabs are copied and wide characters take two cells.
fn caret_padding(line: &str, column: usize) -> String {
    let offset = column.saturating_sub(1);
    let mut padding = String::new();

    for c in line.chars().take(offset) {
        match c {
            '\t' => padding.push('\t'),
            _ => padding.extend(std::iter::repeat(' ').take(c.width().unwrap_or(0))),
        }
    }

    let past_end = offset.saturating_sub(line.chars().count());
    padding.extend(std::iter::repeat(' ').take(past_end));
    padding
}

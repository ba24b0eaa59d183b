//! Line abstraction for Gherkin documents
//!
//! A [`GherkinLine`] wraps one raw input line and answers the questions the
//! matcher asks about it: what it starts with, how far it is indented, and what
//! table cells or tags it carries. All lengths and columns are measured in
//! Unicode code points.

use crate::utils::Span;
use serde::Serialize;

/// One immutable line of a Gherkin document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GherkinLine {
    line_text: String,
    line_number: usize,
    trimmed_line_text: String,
    is_empty: bool,
    indent: usize,
}

impl GherkinLine {
    /// Wrap a raw line (without its line terminator)
    pub fn new(line_text: impl Into<String>, line_number: usize) -> Self {
        let line_text = line_text.into();
        let trimmed_line_text = line_text.trim_start_matches(is_blank).to_string();
        let indent = line_text.chars().count() - trimmed_line_text.chars().count();

        Self {
            is_empty: trimmed_line_text.is_empty(),
            line_text,
            line_number,
            trimmed_line_text,
            indent,
        }
    }

    /// The line exactly as given
    pub fn raw_text(&self) -> &str {
        &self.line_text
    }

    /// The line with leading whitespace removed
    pub fn trimmed_text(&self) -> &str {
        &self.trimmed_line_text
    }

    /// 1-based line number
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Leading whitespace, in code points
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Whether the line is blank
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// Literal prefix test on the trimmed text
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.trimmed_line_text.starts_with(prefix)
    }

    /// Prefix test for `keyword:` so that a keyword that is a prefix of a
    /// longer word does not match a title line
    pub fn starts_with_title_keyword(&self, keyword: &str) -> bool {
        self.trimmed_line_text
            .strip_prefix(keyword)
            .is_some_and(|rest| rest.starts_with(':'))
    }

    /// Line text with `indent_to_remove` leading code points stripped.
    ///
    /// `None`, or an amount larger than the indent, yields the trimmed text.
    pub fn line_text(&self, indent_to_remove: Option<usize>) -> String {
        match indent_to_remove {
            Some(amount) if amount <= self.indent => {
                skip_chars(&self.line_text, amount).to_string()
            }
            _ => self.trimmed_line_text.clone(),
        }
    }

    /// Trimmed text after its first `length` code points, trimmed both sides
    pub fn rest_trimmed(&self, length: usize) -> String {
        skip_chars(&self.trimmed_line_text, length)
            .trim_matches(is_blank)
            .to_string()
    }

    /// Cells of a table row, with absolute columns.
    ///
    /// Recognised escapes are `\n`, `\|` and `\\`; any other escaped character
    /// keeps its backslash. Text before the first `|` and an unterminated last
    /// cell are dropped.
    pub fn table_cells(&self) -> Vec<Span> {
        let mut cells = Vec::new();
        let mut cell = String::new();
        let mut first_cell = true;
        let mut col = 0;
        let mut start_col = col + 1;
        let mut chars = self.trimmed_line_text.chars();

        while let Some(ch) = chars.next() {
            col += 1;

            match ch {
                '|' => {
                    if first_cell {
                        first_cell = false;
                    } else {
                        let cell_indent =
                            cell.chars().count() - cell.trim_start_matches(is_blank).chars().count();
                        cells.push(Span::new(
                            self.indent + start_col + cell_indent,
                            cell.trim_matches(is_blank),
                        ));
                    }
                    cell.clear();
                    start_col = col + 1;
                }
                '\\' => {
                    let escaped = chars.next();
                    col += 1;
                    match escaped {
                        Some('n') => cell.push('\n'),
                        Some(c @ ('|' | '\\')) => cell.push(c),
                        Some(c) => {
                            cell.push('\\');
                            cell.push(c);
                        }
                        None => cell.push('\\'),
                    }
                }
                _ => cell.push(ch),
            }
        }

        cells
    }

    /// Tags on a tag line, each with its own column
    pub fn tags(&self) -> Vec<Span> {
        let mut column = self.indent + 1;

        self.trimmed_line_text
            .trim_matches(is_blank)
            .split('@')
            .skip(1)
            .map(|item| {
                let span = Span::new(column, format!("@{}", item.trim_matches(is_blank)));
                column += item.chars().count() + 1;
                span
            })
            .collect()
    }
}

/// Whitespace for trimming purposes; a byte-order mark counts as whitespace
pub(crate) fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Slice of `text` after its first `count` code points
fn skip_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((offset, _)) => &text[offset..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order_mark_is_indent() {
        let line = GherkinLine::new("\u{FEFF}Feature: x", 1);
        assert_eq!(line.indent(), 1);
        assert_eq!(line.trimmed_text(), "Feature: x");
        assert!(line.starts_with_title_keyword("Feature"));

        let blank = GherkinLine::new("\u{FEFF}  ", 1);
        assert!(blank.is_empty());
    }

    #[test]
    fn test_indent_counts_code_points() {
        let line = GherkinLine::new("    Given 🥒 x", 1);
        assert_eq!(line.indent(), 4);
        assert_eq!(line.trimmed_text(), "Given 🥒 x");

        let line = GherkinLine::new("\t 😐 emoji first", 2);
        assert_eq!(line.indent(), 2);
        assert_eq!(
            line.raw_text().chars().count() - line.trimmed_text().chars().count(),
            line.indent()
        );
    }

    #[test]
    fn test_blank_line() {
        let line = GherkinLine::new("   \t", 3);
        assert!(line.is_empty());
        assert_eq!(line.indent(), 4);
        assert_eq!(line.line_number(), 3);
    }

    #[test]
    fn test_title_keyword_requires_colon() {
        let line = GherkinLine::new("  Feature: Login", 1);
        assert!(line.starts_with("Feature"));
        assert!(line.starts_with_title_keyword("Feature"));

        let line = GherkinLine::new("Features are nice", 1);
        assert!(line.starts_with("Feature"));
        assert!(!line.starts_with_title_keyword("Feature"));
    }

    #[test]
    fn test_line_text_boundaries() {
        let line = GherkinLine::new("    some text", 1);
        assert_eq!(line.line_text(None), "some text");
        assert_eq!(line.line_text(Some(line.indent() + 1)), "some text");
        assert_eq!(line.line_text(Some(0)), "    some text");
        assert_eq!(line.line_text(Some(2)), "  some text");
        assert_eq!(line.line_text(Some(4)), "some text");
    }

    #[test]
    fn test_rest_trimmed() {
        let line = GherkinLine::new("  Scenario:   Log in  ", 1);
        assert_eq!(line.rest_trimmed("Scenario:".chars().count()), "Log in");

        let line = GherkinLine::new("📕: emoji title", 1);
        assert_eq!(line.rest_trimmed(2), "emoji title");
    }

    #[test]
    fn test_table_cells_with_escapes() {
        let line = GherkinLine::new("  | a | b\\|c | d\\n e |", 1);
        let cells = line.table_cells();

        let texts: Vec<&str> = cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b|c", "d\n e"]);

        let columns: Vec<usize> = cells.iter().map(|c| c.column).collect();
        assert_eq!(columns, vec![5, 9, 16]);
    }

    #[test]
    fn test_table_cells_unknown_escape_keeps_backslash() {
        let line = GherkinLine::new("| a\\tb | c\\\\d |", 1);
        let cells = line.table_cells();

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text, "a\\tb");
        assert_eq!(cells[1].text, "c\\d");
    }

    #[test]
    fn test_table_cells_drops_unterminated_cell() {
        let line = GherkinLine::new("| a | b", 1);
        let cells = line.table_cells();

        assert_eq!(cells, vec![Span::new(3, "a")]);
    }

    #[test]
    fn test_table_cells_unicode_columns() {
        let line = GherkinLine::new("| 🥒 | ü |", 1);
        let cells = line.table_cells();

        assert_eq!(cells, vec![Span::new(3, "🥒"), Span::new(7, "ü")]);
    }

    #[test]
    fn test_tags() {
        let line = GherkinLine::new("@foo @bar", 1);
        let tags = line.tags();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0], Span::new(1, "@foo"));
        assert_eq!(tags[1], Span::new(1 + "foo ".len() + 1, "@bar"));
    }

    #[test]
    fn test_indented_tags() {
        let line = GherkinLine::new("    @smoke   @slow", 1);
        let tags = line.tags();

        assert_eq!(tags, vec![Span::new(5, "@smoke"), Span::new(14, "@slow")]);
    }
}

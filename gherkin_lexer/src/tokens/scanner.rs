//! Line scanner
//!
//! Splits a whole document into lines and hands them out one token at a time.

use super::line::{is_blank, GherkinLine};
use super::token::Token;

/// Produces one token per line, then end-of-input forever
#[derive(Debug, Clone)]
pub struct TokenScanner {
    lines: Vec<String>,
    next_line: usize,
    eof_emitted: bool,
}

impl TokenScanner {
    /// Split `source` on `\n` or `\r\n`. A whitespace-only final line is dropped.
    pub fn new(source: &str) -> Self {
        let mut lines: Vec<String> = source.lines().map(str::to_string).collect();
        if lines.last().is_some_and(|last| last.trim_matches(is_blank).is_empty()) {
            lines.pop();
        }

        Self {
            lines,
            next_line: 0,
            eof_emitted: false,
        }
    }

    /// Number of lines the scanner will yield before end of input
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Next line token, or the end-of-input token once lines are exhausted
    pub fn read(&mut self) -> Token {
        match self.lines.get(self.next_line) {
            Some(text) => {
                self.next_line += 1;
                Token::from_line(GherkinLine::new(text.as_str(), self.next_line))
            }
            None => Token::end_of_input(self.lines.len() + 1),
        }
    }
}

impl Iterator for TokenScanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.eof_emitted {
            return None;
        }

        let token = self.read();
        if token.is_eof() {
            self.eof_emitted = true;
        }
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Location;

    fn raw(token: &Token) -> Option<&str> {
        token.line.as_ref().map(GherkinLine::raw_text)
    }

    #[test]
    fn test_trailing_blank_line_dropped() {
        let mut scanner = TokenScanner::new("A\nB\n\n");

        let a = scanner.read();
        assert_eq!(raw(&a), Some("A"));
        assert_eq!(a.location, Location::new(1, 0));

        let b = scanner.read();
        assert_eq!(raw(&b), Some("B"));
        assert_eq!(b.location, Location::new(2, 0));

        for _ in 0..3 {
            let eof = scanner.read();
            assert!(eof.is_eof());
            assert_eq!(eof.location, Location::new(3, 0));
        }
    }

    #[test]
    fn test_crlf_line_endings() {
        let scanner = TokenScanner::new("Feature: x\r\n  Scenario: y\r\n");
        let lines: Vec<String> = scanner
            .filter_map(|t| t.line.map(|l| l.raw_text().to_string()))
            .collect();

        assert_eq!(lines, vec!["Feature: x", "  Scenario: y"]);
    }

    #[test]
    fn test_only_final_blank_line_is_dropped() {
        let scanner = TokenScanner::new("A\n\n   \n");
        assert_eq!(scanner.line_count(), 2);
    }

    #[test]
    fn test_empty_document() {
        let mut scanner = TokenScanner::new("");
        let eof = scanner.read();
        assert!(eof.is_eof());
        assert_eq!(eof.location.line, 1);
    }

    #[test]
    fn test_iterator_yields_eof_once() {
        let tokens: Vec<Token> = TokenScanner::new("A\nB").collect();

        assert_eq!(tokens.len(), 3);
        assert!(tokens[2].is_eof());
        assert_eq!(tokens[2].location.line, 3);
    }
}

//! Lexical analysis for Gherkin documents
//!
//! [`TokenMatcher`] holds the dialect and docstring state and decides whether
//! a single line is a given token type. [`LexicalAnalyzer`] runs the matcher
//! over whole documents in a fixed classification order.

pub mod analyzer;
pub mod matcher;

use crate::config::runtime::LexicalPreferences;
use crate::diagnostics::ParserResult;
use crate::file_processor::FileProcessingResult;
use crate::tokens::Token;

pub use analyzer::{LexicalAnalyzer, TokenCounts};
pub use matcher::TokenMatcher;

/// Tokenize a document with default preferences
pub fn tokenize(source: &str) -> ParserResult<Vec<Token>> {
    LexicalAnalyzer::new().tokenize(source)
}

/// Tokenize with a caller-owned matcher, e.g. one over a custom dialect table
pub fn tokenize_with_matcher(
    source: &str,
    matcher: &mut TokenMatcher<'_>,
) -> ParserResult<Vec<Token>> {
    LexicalAnalyzer::new().tokenize_with_matcher(source, matcher)
}

pub fn tokenize_file_result(file_result: &FileProcessingResult) -> ParserResult<Vec<Token>> {
    LexicalAnalyzer::new().tokenize_file_result(file_result)
}

pub fn tokenize_file_result_with_preferences(
    file_result: &FileProcessingResult,
    preferences: LexicalPreferences,
) -> ParserResult<Vec<Token>> {
    LexicalAnalyzer::with_preferences(preferences).tokenize_file_result(file_result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::DialectTable;
    use crate::tokens::TokenType;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Feature: x\n  Scenario: y\n    Given z\n").unwrap();
        assert_eq!(tokens.len(), 4);
        assert!(tokens.last().unwrap().is_eof());
    }

    #[test]
    fn test_tokenize_with_custom_table() {
        let mut english = DialectTable::builtin().get("en").unwrap().clone();
        english.given = vec!["Assuming ".to_string()];
        let table = DialectTable::from_dialects([("en", english)]);
        let mut matcher = TokenMatcher::with_dialects(&table, "en").unwrap();

        let tokens = tokenize_with_matcher("Assuming x\nGiven y\n", &mut matcher).unwrap();
        assert_eq!(tokens[0].matched_type, Some(TokenType::StepLine));
        assert_eq!(tokens[1].matched_type, Some(TokenType::Other));
    }

    #[test]
    fn test_tokenize_file_result() {
        let file_result = FileProcessingResult::from_source("a.feature", "# language: de\nFunktionalität: x\n");
        let tokens = tokenize_file_result(&file_result).unwrap();

        assert_eq!(tokens[1].matched_type, Some(TokenType::FeatureLine));
        assert_eq!(tokens[1].matched_gherkin_dialect.as_deref(), Some("de"));
    }

    #[test]
    fn test_tokenize_file_result_with_default_dialect() {
        let file_result = FileProcessingResult::from_source("a.feature", "Fonctionnalité: x
");
        let preferences = LexicalPreferences {
            default_dialect: "fr".to_string(),
            ..LexicalPreferences::default()
        };

        let tokens = tokenize_file_result_with_preferences(&file_result, preferences).unwrap();
        assert_eq!(tokens[0].matched_type, Some(TokenType::FeatureLine));
        assert_eq!(tokens[0].matched_keyword.as_deref(), Some("Fonctionnalité"));

        let english = tokenize_file_result(&file_result).unwrap();
        assert_eq!(english[0].matched_type, Some(TokenType::Other));
    }
}

//! Line classifier
//!
//! Drives a [`TokenMatcher`] over every line of a document and assigns each
//! line the first token type that accepts it:
//!
//! 1. end of input
//! 2. inside a docstring: the closing fence, otherwise `Other`
//! 3. `Empty`
//! 4. `Language`, only in the header (before any non-comment, non-empty line)
//! 5. `Comment`
//! 6. tag line, the title lines, table row, opening fence, step line
//! 7. `Other`
//!
//! A failed language directive is recorded and the line falls through to the
//! comment rule, unless the preferences ask to stop at the first error.

use crate::config::compile_time::lexical::MAX_COLLECTED_ERRORS;
use crate::config::runtime::LexicalPreferences;
use crate::diagnostics::{ParserError, ParserResult};
use crate::file_processor::FileProcessingResult;
use crate::lexical::matcher::TokenMatcher;
use crate::logging::codes;
use crate::tokens::{Token, TokenScanner, TokenType};
use crate::{log_debug, log_error, log_success};
use std::collections::BTreeMap;

/// Number of tokens per type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCounts {
    counts: BTreeMap<TokenType, usize>,
}

impl TokenCounts {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts = Self::default();
        for token in tokens {
            counts.record(token);
        }
        counts
    }

    pub fn record(&mut self, token: &Token) {
        if let Some(token_type) = token.matched_type {
            *self.counts.entry(token_type).or_insert(0) += 1;
        }
    }

    pub fn get(&self, token_type: TokenType) -> usize {
        self.counts.get(&token_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Tokens that carry document structure rather than layout
    pub fn significant(&self) -> usize {
        self.total()
            - self.get(TokenType::Empty)
            - self.get(TokenType::Comment)
            - self.get(TokenType::EndOfInput)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenType, usize)> + '_ {
        self.counts.iter().map(|(token_type, count)| (*token_type, *count))
    }
}

pub struct LexicalAnalyzer {
    preferences: LexicalPreferences,
    counts: TokenCounts,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(LexicalPreferences::default())
    }

    pub fn with_preferences(preferences: LexicalPreferences) -> Self {
        Self {
            preferences,
            counts: TokenCounts::default(),
        }
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Counts from the most recent run
    pub fn counts(&self) -> &TokenCounts {
        &self.counts
    }

    /// Tokenize with a fresh matcher in the configured default dialect
    pub fn tokenize(&mut self, source: &str) -> ParserResult<Vec<Token>> {
        let mut matcher = TokenMatcher::with_preferences(&self.preferences)?;
        self.tokenize_with_matcher(source, &mut matcher)
    }

    pub fn tokenize_file_result(
        &mut self,
        file_result: &FileProcessingResult,
    ) -> ParserResult<Vec<Token>> {
        log_debug!("Starting lexical analysis",
            "file" => file_result.display_path(),
            "line_count" => file_result.metadata.line_count,
            "file_size_bytes" => file_result.metadata.size,
            "default_dialect" => self.preferences.default_dialect
        );

        self.tokenize(&file_result.source)
    }

    /// Tokenize with a caller-owned matcher. The matcher is reset first, so
    /// each document starts in the matcher's default dialect.
    pub fn tokenize_with_matcher(
        &mut self,
        source: &str,
        matcher: &mut TokenMatcher<'_>,
    ) -> ParserResult<Vec<Token>> {
        matcher.reset();
        self.counts = TokenCounts::default();

        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        let mut in_header = true;

        for mut token in TokenScanner::new(source) {
            if matcher.match_eof(&mut token) {
                self.push(&mut tokens, token);
                break;
            }

            if matcher.in_doc_string() {
                if !matcher.match_doc_string_separator(&mut token) {
                    matcher.match_other(&mut token);
                }
                self.push(&mut tokens, token);
                continue;
            }

            if matcher.match_empty(&mut token) {
                self.push(&mut tokens, token);
                continue;
            }

            if in_header {
                match matcher.match_language(&mut token) {
                    Ok(true) => {
                        self.push(&mut tokens, token);
                        continue;
                    }
                    Ok(false) => {}
                    Err(error) => {
                        log_error!(error.error_code(), error.message(),
                            location = error.location(),
                            "dialect" => matcher.dialect_name()
                        );
                        if self.preferences.stop_at_first_error {
                            return Err(error);
                        }
                        if errors.len() < MAX_COLLECTED_ERRORS {
                            errors.push(error);
                        }
                    }
                }
            }

            if matcher.match_comment(&mut token) {
                self.push(&mut tokens, token);
                continue;
            }

            in_header = false;
            let structural = matcher.match_tag_line(&mut token)
                || matcher.match_feature_line(&mut token)
                || matcher.match_background_line(&mut token)
                || matcher.match_scenario_outline_line(&mut token)
                || matcher.match_scenario_line(&mut token)
                || matcher.match_examples_line(&mut token)
                || matcher.match_table_row(&mut token)
                || matcher.match_doc_string_separator(&mut token)
                || matcher.match_step_line(&mut token);
            if !structural {
                matcher.match_other(&mut token);
            }

            self.push(&mut tokens, token);
        }

        if let Some(error) = ParserError::aggregate(errors) {
            return Err(error);
        }

        log_success!(
            codes::success::TOKENIZATION_COMPLETE,
            "Tokenization completed",
            "tokens" => self.counts.total(),
            "significant_tokens" => self.counts.significant(),
            "dialect" => matcher.dialect_name()
        );

        Ok(tokens)
    }

    fn push(&mut self, tokens: &mut Vec<Token>, token: Token) {
        self.counts.record(&token);
        tokens.push(token);
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

//! Dialect-aware token matcher
//!
//! Each `match_*` predicate either declines a token, leaving it untouched, or
//! accepts it and fills in the matched type, text, keyword, indent, items and
//! dialect. The matcher owns the per-document state: the active dialect, the
//! open docstring fence and the indentation stripped from docstring bodies.

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::diagnostics::{ParserError, ParserResult};
use crate::grammar::{Dialect, DialectTable};
use crate::log_debug;
use crate::tokens::{GherkinLine, Token, TokenType};
use crate::utils::{Location, Span};
use regex::Regex;
use std::sync::OnceLock;

static LANGUAGE_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn language_pattern() -> Option<&'static Regex> {
    LANGUAGE_PATTERN
        .get_or_init(|| Regex::new(r"^\s*#\s*language\s*:\s*([a-zA-Z\-_]+)\s*$").ok())
        .as_ref()
}

#[derive(Debug)]
pub struct TokenMatcher<'a> {
    dialects: &'a DialectTable,
    default_dialect_name: String,
    dialect_name: String,
    dialect: &'a Dialect,
    active_doc_string_separator: Option<&'static str>,
    indent_to_remove: usize,
    log_docstring_transitions: bool,
}

impl TokenMatcher<'static> {
    /// Matcher over the built-in dialects, starting in English
    pub fn new() -> ParserResult<Self> {
        Self::with_default_dialect(DEFAULT_DIALECT)
    }

    /// Matcher over the built-in dialects with another starting dialect
    pub fn with_default_dialect(name: &str) -> ParserResult<Self> {
        TokenMatcher::with_dialects(DialectTable::builtin(), name)
    }

    /// Matcher configured from lexical preferences
    pub fn with_preferences(preferences: &LexicalPreferences) -> ParserResult<Self> {
        let mut matcher = Self::with_default_dialect(&preferences.default_dialect)?;
        matcher.log_docstring_transitions = preferences.log_docstring_transitions;
        Ok(matcher)
    }
}

impl<'a> TokenMatcher<'a> {
    /// Matcher over a caller-supplied table
    pub fn with_dialects(dialects: &'a DialectTable, default_dialect: &str) -> ParserResult<Self> {
        let dialect = dialects
            .get(default_dialect)
            .ok_or_else(|| ParserError::no_such_language(default_dialect, None))?;

        Ok(Self {
            dialects,
            default_dialect_name: default_dialect.to_string(),
            dialect_name: default_dialect.to_string(),
            dialect,
            active_doc_string_separator: None,
            indent_to_remove: 0,
            log_docstring_transitions: true,
        })
    }

    /// Restore the default dialect and close any open docstring
    pub fn reset(&mut self) {
        let dialects = self.dialects;
        if self.dialect_name != self.default_dialect_name {
            if let Some(dialect) = dialects.get(&self.default_dialect_name) {
                self.dialect = dialect;
                self.dialect_name = self.default_dialect_name.clone();
            }
        }
        self.active_doc_string_separator = None;
        self.indent_to_remove = 0;
    }

    pub fn dialect(&self) -> &'a Dialect {
        self.dialect
    }

    pub fn dialect_name(&self) -> &str {
        &self.dialect_name
    }

    pub fn active_doc_string_separator(&self) -> Option<&'static str> {
        self.active_doc_string_separator
    }

    pub fn indent_to_remove(&self) -> usize {
        self.indent_to_remove
    }

    pub fn in_doc_string(&self) -> bool {
        self.active_doc_string_separator.is_some()
    }

    // ========================================================================
    // PREDICATES
    // ========================================================================

    pub fn match_tag_line(&self, token: &mut Token) -> bool {
        let Some(line) = &token.line else {
            return false;
        };
        if !line.starts_with(TAG_PREFIX) {
            return false;
        }

        let tags = line.tags();
        self.set_token_matched(token, TokenType::TagLine, None, None, None, tags);
        true
    }

    pub fn match_feature_line(&self, token: &mut Token) -> bool {
        self.match_title_line(token, TokenType::FeatureLine, &self.dialect.feature)
    }

    pub fn match_scenario_line(&self, token: &mut Token) -> bool {
        self.match_title_line(token, TokenType::ScenarioLine, &self.dialect.scenario)
    }

    pub fn match_scenario_outline_line(&self, token: &mut Token) -> bool {
        self.match_title_line(
            token,
            TokenType::ScenarioOutlineLine,
            &self.dialect.scenario_outline,
        )
    }

    pub fn match_background_line(&self, token: &mut Token) -> bool {
        self.match_title_line(token, TokenType::BackgroundLine, &self.dialect.background)
    }

    pub fn match_examples_line(&self, token: &mut Token) -> bool {
        self.match_title_line(token, TokenType::ExamplesLine, &self.dialect.examples)
    }

    pub fn match_table_row(&self, token: &mut Token) -> bool {
        let Some(line) = &token.line else {
            return false;
        };
        if !line.starts_with(TABLE_CELL_SEPARATOR) {
            return false;
        }

        let cells = line.table_cells();
        self.set_token_matched(token, TokenType::TableRow, None, None, None, cells);
        true
    }

    pub fn match_empty(&self, token: &mut Token) -> bool {
        if !token.line.as_ref().is_some_and(GherkinLine::is_empty) {
            return false;
        }

        self.set_token_matched(token, TokenType::Empty, None, None, Some(0), Vec::new());
        true
    }

    pub fn match_comment(&self, token: &mut Token) -> bool {
        let Some(line) = &token.line else {
            return false;
        };
        if !line.starts_with(COMMENT_PREFIX) {
            return false;
        }

        let text = line.line_text(Some(0));
        self.set_token_matched(token, TokenType::Comment, Some(text), None, Some(0), Vec::new());
        true
    }

    /// Language directive. An unknown language fails without touching the
    /// token or the active dialect; a known one is matched under the dialect
    /// active before the switch, then becomes the active dialect.
    pub fn match_language(&mut self, token: &mut Token) -> ParserResult<bool> {
        let Some(line) = &token.line else {
            return Ok(false);
        };
        let Some(language) = language_pattern()
            .and_then(|pattern| pattern.captures(line.trimmed_text()))
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
        else {
            return Ok(false);
        };

        let dialects = self.dialects;
        let Some(dialect) = dialects.get(&language) else {
            let location = Location::new(token.location.line, line.indent() + 1);
            return Err(ParserError::no_such_language(&language, Some(location)));
        };

        self.set_token_matched(
            token,
            TokenType::Language,
            Some(language.clone()),
            None,
            None,
            Vec::new(),
        );

        log_debug!("Dialect switched",
            "from" => self.dialect_name,
            "to" => language,
            "line" => token.location.line
        );

        self.dialect = dialect;
        self.dialect_name = language;
        Ok(true)
    }

    /// Docstring fence. Opens on either fence, closes only on the fence that opened it.
    pub fn match_doc_string_separator(&mut self, token: &mut Token) -> bool {
        match self.active_doc_string_separator {
            None => {
                self.match_doc_string_fence(token, DOCSTRING_SEPARATOR, true)
                    || self.match_doc_string_fence(token, DOCSTRING_ALTERNATIVE_SEPARATOR, true)
            }
            Some(separator) => self.match_doc_string_fence(token, separator, false),
        }
    }

    fn match_doc_string_fence(
        &mut self,
        token: &mut Token,
        separator: &'static str,
        is_open: bool,
    ) -> bool {
        let Some(line) = &token.line else {
            return false;
        };
        if !line.starts_with(separator) {
            return false;
        }

        let content_type = if is_open {
            let content_type = line.rest_trimmed(separator.chars().count());
            self.active_doc_string_separator = Some(separator);
            self.indent_to_remove = line.indent();
            Some(content_type)
        } else {
            self.active_doc_string_separator = None;
            self.indent_to_remove = 0;
            None
        };

        if self.log_docstring_transitions {
            log_debug!(if is_open { "Docstring opened" } else { "Docstring closed" },
                "separator" => separator,
                "line" => token.location.line,
                "indent_to_remove" => self.indent_to_remove
            );
        }

        self.set_token_matched(
            token,
            TokenType::DocStringSeparator,
            content_type,
            None,
            None,
            Vec::new(),
        );
        true
    }

    pub fn match_eof(&self, token: &mut Token) -> bool {
        if !token.is_eof() {
            return false;
        }

        self.set_token_matched(token, TokenType::EndOfInput, None, None, None, Vec::new());
        true
    }

    pub fn match_step_line(&self, token: &mut Token) -> bool {
        let Some(line) = &token.line else {
            return false;
        };
        let Some(keyword) = self
            .dialect
            .step_keywords()
            .find(|keyword| line.starts_with(keyword))
        else {
            return false;
        };

        let text = line.rest_trimmed(keyword.chars().count());
        self.set_token_matched(
            token,
            TokenType::StepLine,
            Some(text),
            Some(keyword.to_string()),
            None,
            Vec::new(),
        );
        true
    }

    /// Last resort for line tokens: the line minus docstring indentation. While a
    /// docstring is open the first escaped fence on the line is restored
    pub fn match_other(&self, token: &mut Token) -> bool {
        let Some(line) = &token.line else {
            return false;
        };

        let mut text = line.line_text(Some(self.indent_to_remove));
        if self.in_doc_string() {
            text = text.replacen(ESCAPED_DOCSTRING_SEPARATOR, DOCSTRING_SEPARATOR, 1);
        }

        self.set_token_matched(token, TokenType::Other, Some(text), None, Some(0), Vec::new());
        true
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn match_title_line(&self, token: &mut Token, token_type: TokenType, keywords: &[String]) -> bool {
        let Some(line) = &token.line else {
            return false;
        };
        let Some(keyword) = keywords
            .iter()
            .find(|keyword| line.starts_with_title_keyword(keyword))
        else {
            return false;
        };

        let title = line.rest_trimmed(keyword.chars().count() + TITLE_KEYWORD_SEPARATOR.len());
        self.set_token_matched(
            token,
            token_type,
            Some(title),
            Some(keyword.clone()),
            None,
            Vec::new(),
        );
        true
    }

    fn set_token_matched(
        &self,
        token: &mut Token,
        matched_type: TokenType,
        text: Option<String>,
        keyword: Option<String>,
        indent: Option<usize>,
        items: Vec<Span>,
    ) {
        let line_indent = token.line.as_ref().map(GherkinLine::indent).unwrap_or(0);

        token.matched_type = Some(matched_type);
        token.matched_text = text;
        token.matched_keyword = keyword;
        token.matched_indent = indent.unwrap_or(line_indent);
        token.matched_items = items;
        token.location.column = token.matched_indent + 1;
        token.matched_gherkin_dialect = Some(self.dialect_name.clone());
    }
}

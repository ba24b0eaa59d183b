//! Tokens produced by the scanner and annotated by the matcher

use super::line::GherkinLine;
use crate::utils::{Location, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The lexical construct a token was matched as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TokenType {
    TagLine,
    FeatureLine,
    BackgroundLine,
    ScenarioLine,
    ScenarioOutlineLine,
    ExamplesLine,
    StepLine,
    DocStringSeparator,
    TableRow,
    Language,
    Comment,
    Empty,
    #[serde(rename = "EOF")]
    EndOfInput,
    Other,
}

impl TokenType {
    pub const ALL: [TokenType; 14] = [
        TokenType::TagLine,
        TokenType::FeatureLine,
        TokenType::BackgroundLine,
        TokenType::ScenarioLine,
        TokenType::ScenarioOutlineLine,
        TokenType::ExamplesLine,
        TokenType::StepLine,
        TokenType::DocStringSeparator,
        TokenType::TableRow,
        TokenType::Language,
        TokenType::Comment,
        TokenType::Empty,
        TokenType::EndOfInput,
        TokenType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::TagLine => "TagLine",
            TokenType::FeatureLine => "FeatureLine",
            TokenType::BackgroundLine => "BackgroundLine",
            TokenType::ScenarioLine => "ScenarioLine",
            TokenType::ScenarioOutlineLine => "ScenarioOutlineLine",
            TokenType::ExamplesLine => "ExamplesLine",
            TokenType::StepLine => "StepLine",
            TokenType::DocStringSeparator => "DocStringSeparator",
            TokenType::TableRow => "TableRow",
            TokenType::Language => "Language",
            TokenType::Comment => "Comment",
            TokenType::Empty => "Empty",
            TokenType::EndOfInput => "EOF",
            TokenType::Other => "Other",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of input, or the end of input, plus whatever a matcher learned about it.
///
/// A token starts unmatched. A successful matcher call fills every `matched_*`
/// field and resolves the location column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(skip)]
    pub line: Option<GherkinLine>,
    pub location: Location,
    pub matched_type: Option<TokenType>,
    pub matched_text: Option<String>,
    pub matched_keyword: Option<String>,
    pub matched_indent: usize,
    pub matched_items: Vec<Span>,
    pub matched_gherkin_dialect: Option<String>,
}

impl Token {
    /// Token for one input line
    pub fn from_line(line: GherkinLine) -> Self {
        let location = Location::unresolved(line.line_number());
        Self::new(Some(line), location)
    }

    /// End-of-input token at the given line number
    pub fn end_of_input(line_number: usize) -> Self {
        Self::new(None, Location::unresolved(line_number))
    }

    fn new(line: Option<GherkinLine>, location: Location) -> Self {
        Self {
            line,
            location,
            matched_type: None,
            matched_text: None,
            matched_keyword: None,
            matched_indent: 0,
            matched_items: Vec::new(),
            matched_gherkin_dialect: None,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.line.is_none()
    }

    pub fn is_matched(&self) -> bool {
        self.matched_type.is_some()
    }

    /// Value shown in diagnostics: the trimmed line, or `EOF`
    pub fn token_value(&self) -> String {
        match &self.line {
            Some(line) => line.line_text(None),
            None => "EOF".to_string(),
        }
    }
}

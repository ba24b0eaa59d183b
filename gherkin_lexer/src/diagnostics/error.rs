//! Parser diagnostics
//!
//! Every variant carries its fully formatted message, which embeds the
//! 1-based location as `(line:column): `, so the message alone is enough for a
//! user-facing report.

use crate::logging::{codes, Code};
use crate::tokens::Token;
use crate::utils::Location;

pub type ParserResult<T> = Result<T, ParserError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    #[error("{message}")]
    Parser {
        message: String,
        location: Option<Location>,
    },

    #[error("{message}")]
    UnexpectedToken { message: String, location: Location },

    #[error("{message}")]
    UnexpectedEof { message: String, location: Location },

    #[error("{message}")]
    AstBuilder { message: String, location: Location },

    #[error("{message}")]
    NoSuchLanguage {
        language: String,
        message: String,
        location: Option<Location>,
    },

    #[error("{message}")]
    Composite {
        message: String,
        errors: Vec<ParserError>,
    },
}

fn with_location_prefix(location: &Location, detail: &str) -> String {
    format!("({}:{}): {}", location.line, location.column, detail)
}

impl ParserError {
    /// Generic parser error; an empty message becomes `Unspecified ParserException`
    pub fn generic(message: impl Into<String>, location: Option<Location>) -> Self {
        let mut detail = message.into();
        if detail.is_empty() {
            detail = "Unspecified ParserException".to_string();
        }

        let message = match &location {
            Some(location) => with_location_prefix(location, &detail),
            None => detail,
        };

        Self::Parser { message, location }
    }

    /// A token the grammar did not expect.
    ///
    /// An unresolved column falls back to the line's indentation + 1.
    pub fn unexpected_token<S: AsRef<str>>(token: &Token, expected: &[S]) -> Self {
        let detail = format!(
            "expected: {}, got '{}'",
            join_expected(expected),
            token.token_value().trim()
        );

        let location = if token.location.is_resolved() {
            token.location
        } else {
            let indent = token.line.as_ref().map(|l| l.indent()).unwrap_or(0);
            Location::new(token.location.line, indent + 1)
        };

        Self::UnexpectedToken {
            message: with_location_prefix(&location, &detail),
            location,
        }
    }

    /// The document ended while the grammar still expected something
    pub fn unexpected_eof<S: AsRef<str>>(token: &Token, expected: &[S]) -> Self {
        let detail = format!(
            "unexpected end of file, expected: {}",
            join_expected(expected)
        );
        let location = token.location;

        Self::UnexpectedEof {
            message: with_location_prefix(&location, &detail),
            location,
        }
    }

    /// Failure while building the document tree
    pub fn ast_builder(message: &str, location: Location) -> Self {
        Self::AstBuilder {
            message: with_location_prefix(&location, message),
            location,
        }
    }

    /// Unknown dialect; without a location the bare detail is used
    pub fn no_such_language(language: &str, location: Option<Location>) -> Self {
        let detail = format!("Language not supported: {}", language);
        let message = match &location {
            Some(location) => with_location_prefix(location, &detail),
            None => detail,
        };

        Self::NoSuchLanguage {
            language: language.to_string(),
            message,
            location,
        }
    }

    /// Several errors reported together, in order
    pub fn composite(errors: Vec<ParserError>) -> Self {
        let message = std::iter::once("Parser errors:".to_string())
            .chain(errors.iter().map(|e| e.message().to_string()))
            .collect::<Vec<_>>()
            .join("\n");

        Self::Composite { message, errors }
    }

    /// None for no errors, the error itself for one, a composite for more
    pub fn aggregate(mut errors: Vec<ParserError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::composite(errors)),
        }
    }

    /// Name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parser { .. } => "ParserException",
            Self::UnexpectedToken { .. } => "UnexpectedTokenException",
            Self::UnexpectedEof { .. } => "UnexpectedEOFException",
            Self::AstBuilder { .. } => "AstBuilderException",
            Self::NoSuchLanguage { .. } => "NoSuchLanguageException",
            Self::Composite { .. } => "CompositeParserException",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Parser { message, .. }
            | Self::UnexpectedToken { message, .. }
            | Self::UnexpectedEof { message, .. }
            | Self::AstBuilder { message, .. }
            | Self::NoSuchLanguage { message, .. }
            | Self::Composite { message, .. } => message,
        }
    }

    /// Location of a single error; composites have none of their own
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::UnexpectedToken { location, .. }
            | Self::UnexpectedEof { location, .. }
            | Self::AstBuilder { location, .. } => Some(*location),
            Self::Parser { location, .. } | Self::NoSuchLanguage { location, .. } => *location,
            Self::Composite { .. } => None,
        }
    }

    /// Children of a composite, or the error itself
    pub fn errors(&self) -> &[ParserError] {
        match self {
            Self::Composite { errors, .. } => errors,
            _ => std::slice::from_ref(self),
        }
    }

    /// Every non-composite error, depth first
    pub fn flatten(&self) -> Vec<&ParserError> {
        match self {
            Self::Composite { errors, .. } => errors.iter().flat_map(|e| e.flatten()).collect(),
            _ => vec![self],
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::Parser { .. } => codes::diagnostics::PARSER_ERROR,
            Self::UnexpectedToken { .. } => codes::diagnostics::UNEXPECTED_TOKEN,
            Self::UnexpectedEof { .. } => codes::diagnostics::UNEXPECTED_EOF,
            Self::AstBuilder { .. } => codes::diagnostics::AST_BUILDER_ERROR,
            Self::NoSuchLanguage { location: None, .. } => codes::lexical::UNKNOWN_DEFAULT_DIALECT,
            Self::NoSuchLanguage { .. } => codes::lexical::NO_SUCH_LANGUAGE,
            Self::Composite { .. } => codes::diagnostics::COMPOSITE_ERRORS,
        }
    }
}

fn join_expected<S: AsRef<str>>(expected: &[S]) -> String {
    expected
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::GherkinLine;
    use assert_matches::assert_matches;

    #[test]
    fn test_unexpected_token_uses_indent_when_unresolved() {
        let token = Token::from_line(GherkinLine::new("    Given x", 4));
        let error = ParserError::unexpected_token(&token, &["#EOF", "#Empty"]);

        assert_matches!(error, ParserError::UnexpectedToken { .. });
        assert_eq!(error.kind(), "UnexpectedTokenException");
        assert_eq!(error.location(), Some(Location::new(4, 5)));
        assert_eq!(error.message(), "(4:5): expected: #EOF, #Empty, got 'Given x'");
    }

    #[test]
    fn test_unexpected_token_keeps_resolved_column() {
        let mut token = Token::from_line(GherkinLine::new("  Feature: x", 2));
        token.location.column = 3;
        let error = ParserError::unexpected_token(&token, &["#TagLine"]);

        assert_eq!(error.message(), "(2:3): expected: #TagLine, got 'Feature: x'");
    }

    #[test]
    fn test_unexpected_token_at_end_of_input() {
        let token = Token::end_of_input(9);
        let error = ParserError::unexpected_token(&token, &["#StepLine"]);

        assert_eq!(error.message(), "(9:1): expected: #StepLine, got 'EOF'");
    }

    #[test]
    fn test_unexpected_eof() {
        let mut token = Token::end_of_input(10);
        token.location.column = 1;
        let error = ParserError::unexpected_eof(&token, &["#DocStringSeparator", "#Other"]);

        assert_matches!(error, ParserError::UnexpectedEof { .. });
        assert_eq!(error.kind(), "UnexpectedEOFException");
        assert_eq!(
            error.message(),
            "(10:1): unexpected end of file, expected: #DocStringSeparator, #Other"
        );
    }

    #[test]
    fn test_ast_builder() {
        let error = ParserError::ast_builder("inconsistent cell count", Location::new(6, 3));

        assert_eq!(error.kind(), "AstBuilderException");
        assert_eq!(error.message(), "(6:3): inconsistent cell count");
        assert_eq!(error.error_code(), codes::diagnostics::AST_BUILDER_ERROR);
    }

    #[test]
    fn test_no_such_language() {
        let located = ParserError::no_such_language("xx", Some(Location::new(1, 1)));
        assert_eq!(located.message(), "(1:1): Language not supported: xx");
        assert_matches!(
            &located,
            ParserError::NoSuchLanguage { language, .. } if language == "xx"
        );

        let bare = ParserError::no_such_language("xx", None);
        assert_eq!(bare.message(), "Language not supported: xx");
        assert_eq!(bare.location(), None);

        assert_eq!(located.error_code(), codes::lexical::NO_SUCH_LANGUAGE);
        assert_eq!(bare.error_code(), codes::lexical::UNKNOWN_DEFAULT_DIALECT);
    }

    #[test]
    fn test_generic() {
        assert_eq!(
            ParserError::generic("", None).message(),
            "Unspecified ParserException"
        );
        assert_eq!(
            ParserError::generic("boom", Some(Location::new(2, 1))).to_string(),
            "(2:1): boom"
        );
    }

    #[test]
    fn test_composite_keeps_children() {
        let e1 = ParserError::ast_builder("first", Location::new(1, 1));
        let e2 = ParserError::no_such_language("xx", Some(Location::new(3, 1)));
        let composite = ParserError::composite(vec![e1.clone(), e2.clone()]);

        assert_eq!(composite.kind(), "CompositeParserException");
        assert_eq!(
            composite.message(),
            "Parser errors:\n(1:1): first\n(3:1): Language not supported: xx"
        );
        assert_eq!(composite.errors(), &[e1, e2][..]);
        assert_eq!(composite.location(), None);
    }

    #[test]
    fn test_aggregate() {
        assert_eq!(ParserError::aggregate(Vec::new()), None);

        let single = ParserError::generic("only", None);
        assert_eq!(
            ParserError::aggregate(vec![single.clone()]),
            Some(single.clone())
        );

        let many = ParserError::aggregate(vec![single.clone(), single]).unwrap();
        assert_matches!(many, ParserError::Composite { ref errors, .. } if errors.len() == 2);
    }

    #[test]
    fn test_flatten_nested_composites() {
        let inner = ParserError::composite(vec![
            ParserError::generic("a", None),
            ParserError::generic("b", None),
        ]);
        let outer = ParserError::composite(vec![inner, ParserError::generic("c", None)]);

        let flat = outer.flatten();
        let messages: Vec<&str> = flat.iter().map(|e| e.message()).collect();
        assert_eq!(messages, vec!["a", "b", "c"]);
    }
}

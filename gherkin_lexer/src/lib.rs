// Internal modules
pub mod config;
pub mod diagnostics;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use diagnostics::{to_editor_markers, EditorMarker, ParserError, ParserResult};
pub use grammar::{Dialect, DialectTable};
pub use lexical::{tokenize, tokenize_with_matcher, LexicalAnalyzer, TokenCounts, TokenMatcher};
pub use tokens::{format_token, format_tokens, GherkinLine, Token, TokenScanner, TokenType};
pub use utils::{Location, SourceMap, Span};

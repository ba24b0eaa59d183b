//! Token system for Gherkin documents
//!
//! The lexical layer works line by line:
//!
//! - **[`GherkinLine`]** wraps one raw line and answers prefix, indentation,
//!   table-cell and tag questions with Unicode-aware columns.
//! - **[`TokenScanner`]** splits a document into lines and yields one
//!   [`Token`] per line, then an end-of-input token.
//! - The matcher in [`crate::lexical`] annotates each token with its
//!   [`TokenType`], text, keyword, indent and items.
//! - [`formatter`] renders matched tokens in the compact
//!   `(line:column)Type:keyword/text/items` form.

pub mod formatter;
pub mod line;
pub mod scanner;
pub mod token;

pub use formatter::{format_token, format_tokens};
pub use line::GherkinLine;
pub use scanner::TokenScanner;
pub use token::{Token, TokenType};

pub use crate::utils::{Location, Span};

//! Compact one-line rendering of matched tokens
//!
//! `(line:column)Type:keyword/text/column:item,column:item`, or `EOF` for the
//! end-of-input token.

use super::token::Token;

pub fn format_token(token: &Token) -> String {
    if token.is_eof() {
        return "EOF".to_string();
    }

    let items = token
        .matched_items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "({}){}:{}/{}/{}",
        token.location,
        token.matched_type.map(|t| t.as_str()).unwrap_or_default(),
        token.matched_keyword.as_deref().unwrap_or_default(),
        token.matched_text.as_deref().unwrap_or_default(),
        items
    )
}

/// One formatted token per line
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(format_token)
        .collect::<Vec<_>>()
        .join("\n")
}

mod declaration;
mod fluff;
mod section;
mod selector;

use crate::error::{ErrorKind, ParseError, Result};
use crate::node::SectionList;
use crate::token::Token;
use crate::tokenizer::tokenize;

pub use self::section::parse_sections;

/// parse a stylesheet into its list of top level sections
pub fn parse(text: &str) -> Result<SectionList> {
    let tokens = tokenize(text)?;
    parse_sections(&tokens, 0, tokens.len())
}

/// Error reported at `tokens[index]`, or at the last token when `index` is
/// past the end.
fn error_at(kind: ErrorKind, tokens: &[Token], index: usize) -> ParseError {
    let token = tokens
        .get(index)
        .or_else(|| tokens.last())
        .cloned()
        .unwrap_or_default();
    ParseError::new(kind, token)
}

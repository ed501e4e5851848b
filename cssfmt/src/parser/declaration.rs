use crate::error::{ErrorKind, Result};
use crate::node::{Declaration, DeclarationBlock, Value};
use crate::token::Token;

use super::error_at;
use super::fluff::{same_line_fluff, whitespace_and_comments};

/// `tokens[start]` is the `{` and `tokens[end - 1]` the matching `}`.
pub fn parse_declaration_block(
    tokens: &[Token],
    start: usize,
    end: usize,
) -> Result<DeclarationBlock> {
    debug_assert!(tokens[start].is("{"));
    debug_assert!(tokens[end - 1].is("}"));

    let mut declarations = Vec::new();
    let mut i = start + 1;

    while i < end - 1 {
        let declaration_start = i;
        let (mut next, _) = whitespace_and_comments(tokens, i, end);
        while next < end && !tokens[next].is(";") {
            next += 1;
        }
        if next < end {
            // a comment after the `;` on the same line stays with this
            // declaration, one on a later line goes to the next
            let line = tokens[next].line;
            next = same_line_fluff(tokens, next + 1, end, line).0;
        }

        declarations.push(parse_declaration(tokens, declaration_start, next)?);
        i = next;
    }

    Ok(DeclarationBlock {
        open: tokens[start].clone(),
        close: tokens[end - 1].clone(),
        declarations,
    })
}

/// `property: value;` plus the fluff around it. The `;` is optional when the
/// range runs into the closing `}`.
fn parse_declaration(tokens: &[Token], start: usize, end: usize) -> Result<Declaration> {
    let (i, pre_fluff) = whitespace_and_comments(tokens, start, end);

    if i >= end || tokens[i].is("}") {
        return Err(error_at(ErrorKind::EmptyDeclaration, tokens, i));
    }

    let property = tokens[i].clone();
    if !(i + 1 < end && tokens[i + 1].is(":")) {
        return Err(error_at(ErrorKind::ExpectedColon, tokens, i));
    }

    let value_start = i + 2;
    let mut value_end = value_start;
    while value_end < end && !tokens[value_end].is(";") && !tokens[value_end].is("}") {
        value_end += 1;
    }
    let value = parse_value(tokens, value_start, value_end)?;

    let has_semicolon = value_end < end && tokens[value_end].is(";");
    let after = if has_semicolon { value_end + 1 } else { value_end };
    let (_, post_fluff) = whitespace_and_comments(tokens, after, end);

    Ok(Declaration {
        property,
        value,
        has_semicolon,
        pre_fluff,
        post_fluff,
    })
}

fn parse_value(tokens: &[Token], start: usize, end: usize) -> Result<Value> {
    let (i, pre_fluff) = whitespace_and_comments(tokens, start, end);
    if i >= end {
        return Err(error_at(ErrorKind::MissingValue, tokens, i.saturating_sub(1)));
    }

    let token = tokens[i].clone();
    let (_, post_fluff) = whitespace_and_comments(tokens, i + 1, end);

    Ok(Value {
        token,
        pre_fluff,
        post_fluff,
    })
}

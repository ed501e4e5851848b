use crate::error::{ErrorKind, Result};
use crate::node::{LeafSection, NestedSection, Section, SectionList};
use crate::token::Token;

use super::declaration::parse_declaration_block;
use super::error_at;
use super::fluff::{whitespace, whitespace_and_comments};
use super::selector::parse_selectors_section;

/// Parse `tokens[start..end]` as a sequence of sections.
pub fn parse_sections(tokens: &[Token], start: usize, end: usize) -> Result<SectionList> {
    let mut i = start;
    let mut sections = Vec::new();

    while i < end {
        let (section_start, pre_fluff) = whitespace_and_comments(tokens, i, end);
        if section_start >= end {
            return Err(error_at(ErrorKind::EmptySection, tokens, end - 1));
        }

        let section_end = find_end_brace(tokens, section_start, end)? + 1;

        let (next, mut post_fluff) = whitespace(tokens, section_end, end);
        i = next;

        // comments with no rule after them stay with the last rule
        let (rest, trailing) = whitespace_and_comments(tokens, i, end);
        if rest >= end {
            post_fluff.push_str(&trailing);
            i = end;
        }

        let section = parse_section(tokens, section_start, section_end, pre_fluff, post_fluff)?;
        sections.push(section);
    }

    log::debug!("parsed {} section(s) from tokens {}..{}", sections.len(), start, end);
    Ok(SectionList { sections })
}

/// Index of the `}` closing the first `{` at or after `start`.
fn find_end_brace(tokens: &[Token], start: usize, end: usize) -> Result<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().take(end).skip(start) {
        if token.is("{") {
            depth += 1;
        } else if token.is("}") {
            match depth {
                0 => return Err(error_at(ErrorKind::UnexpectedCloseBrace, tokens, i)),
                1 => return Ok(i),
                _ => depth -= 1,
            }
        }
    }
    Err(error_at(ErrorKind::MissingCloseBrace, tokens, end - 1))
}

fn is_nested_at_rule(keyword: &str) -> bool {
    keyword == "@media" || keyword == "@keyframes" || keyword.starts_with("@-")
}

/// `tokens[start..end]` runs from the first token of the section to its
/// closing `}`.
fn parse_section(
    tokens: &[Token],
    start: usize,
    end: usize,
    pre_fluff: String,
    post_fluff: String,
) -> Result<Section> {
    debug_assert!(!tokens[start].is_fluff());
    debug_assert!(tokens[end - 1].is("}"));

    let (open, selector_list) = parse_selectors_section(tokens, start, end)?;

    if is_nested_at_rule(&tokens[start].text) {
        log::debug!(
            "nested section {:?} at {}:{}",
            selector_list.text(),
            tokens[start].line,
            tokens[start].column
        );
        if open + 1 == end - 1 {
            return Err(error_at(ErrorKind::EmptySection, tokens, end - 1));
        }
        let section_list = parse_sections(tokens, open + 1, end - 1)?;
        return Ok(Section::Nested(NestedSection {
            selector_list,
            section_list,
            pre_fluff,
            post_fluff,
        }));
    }

    let declaration_block = parse_declaration_block(tokens, open, end)?;
    Ok(Section::Leaf(LeafSection {
        selector_list,
        declaration_block,
        pre_fluff,
        post_fluff,
    }))
}

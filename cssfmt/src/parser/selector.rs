use crate::error::{ErrorKind, Result};
use crate::node::{Selector, SelectorList};
use crate::token::Token;

use super::error_at;
use super::fluff::whitespace_and_comments;

/// Parse everything before the first `{` as a selector list. Returns the
/// index of that `{` along with the list.
///
/// At-rules reuse this for their prelude, so `@media (max-width: 300px)`
/// comes back as a single selector.
pub fn parse_selectors_section(
    tokens: &[Token],
    start: usize,
    end: usize,
) -> Result<(usize, SelectorList)> {
    let open = (start..end)
        .find(|&i| tokens[i].is("{"))
        .unwrap_or(end);
    let selector_list = parse_selectors(tokens, start, open)?;
    Ok((open, selector_list))
}

/// Split `tokens[start..end]` on commas. Comments are rejected anywhere in
/// the range so that selector lists always have the same layout.
fn parse_selectors(tokens: &[Token], start: usize, end: usize) -> Result<SelectorList> {
    let mut selectors = Vec::new();
    let mut segment_start = start;

    for i in start..end {
        let token = &tokens[i];
        if token.is_comment() {
            return Err(error_at(ErrorKind::CommentInSelector, tokens, i));
        }
        if token.is(",") {
            selectors.push(parse_selector(tokens, segment_start, i)?);
            segment_start = i + 1;
        }
    }
    selectors.push(parse_selector(tokens, segment_start, end)?);

    Ok(SelectorList { selectors })
}

fn parse_selector(tokens: &[Token], start: usize, end: usize) -> Result<Selector> {
    let (i, pre_fluff) = whitespace_and_comments(tokens, start, end);

    let mut levels = Vec::new();
    let mut last = None;
    for (index, token) in tokens.iter().enumerate().take(end).skip(i) {
        if !token.is_whitespace() {
            levels.push(token.clone());
            last = Some(index + 1);
        }
    }

    let Some(last) = last else {
        return Err(error_at(ErrorKind::MissingSelector, tokens, end));
    };
    let (_, post_fluff) = whitespace_and_comments(tokens, last, end);

    Ok(Selector {
        levels,
        pre_fluff,
        post_fluff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn selectors(input: &str) -> Result<SelectorList> {
        let tokens = tokenize(input)?;
        parse_selectors_section(&tokens, 0, tokens.len()).map(|(_, list)| list)
    }

    #[test]
    fn test_single_selector() {
        let list = selectors("li.foo {").unwrap();
        assert_eq!(list.selectors.len(), 1);
        assert_eq!(list.text(), "li.foo");
    }

    #[test]
    fn test_returns_open_brace_index() {
        let tokens = tokenize("a, b {").unwrap();
        let (open, _) = parse_selectors_section(&tokens, 0, tokens.len()).unwrap();
        assert!(tokens[open].is("{"));
    }

    #[test]
    fn test_multiple_selectors_keep_order() {
        let list = selectors("h1,\nh2,\nh3 {").unwrap();
        let names: Vec<String> = list.selectors.iter().map(Selector::text).collect();
        assert_eq!(names, vec!["h1", "h2", "h3"]);
        assert_eq!(list.text(), "h1,\nh2,\nh3");
    }

    #[test]
    fn test_levels_are_joined_by_single_spaces() {
        let list = selectors("div   >  p.note a:hover {").unwrap();
        let levels: Vec<&str> = list.selectors[0].levels().collect();
        assert_eq!(levels, vec!["div", ">", "p.note", "a:hover"]);
        assert_eq!(list.text(), "div > p.note a:hover");
    }

    #[test]
    fn test_selector_fluff() {
        let list = selectors("a,\n  b  {").unwrap();
        assert_eq!(list.selectors[1].pre_fluff, "\n  ");
        assert_eq!(list.selectors[1].post_fluff, "  ");
    }

    #[test]
    fn test_comment_rejected() {
        let err = selectors("h1,\nh2, /* comment */\nh3 {").unwrap_err();
        assert_eq!(err.kind, ErrorKind::CommentInSelector);
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 5);
    }

    #[test]
    fn test_missing_selector() {
        let err = selectors("a, {").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingSelector);
        assert_eq!(err.token().text, "{");
    }
}

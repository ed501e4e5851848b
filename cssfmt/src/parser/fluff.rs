use crate::token::Token;

/// Collect the run of tokens from `start` that satisfy `keep`, stopping at
/// `end`. Returns the index after the run and the run's text.
fn collect(
    tokens: &[Token],
    start: usize,
    end: usize,
    keep: impl Fn(&Token) -> bool,
) -> (usize, String) {
    let mut i = start;
    let mut text = String::new();
    while i < end && keep(&tokens[i]) {
        text.push_str(&tokens[i].text);
        i += 1;
    }
    (i, text)
}

/// match contiguous whitespace only
pub fn whitespace(tokens: &[Token], start: usize, end: usize) -> (usize, String) {
    collect(tokens, start, end, Token::is_whitespace)
}

/// match contiguous whitespace and comments, which can be multiple lines
pub fn whitespace_and_comments(tokens: &[Token], start: usize, end: usize) -> (usize, String) {
    collect(tokens, start, end, Token::is_fluff)
}

/// Like [`whitespace_and_comments`], but only takes comments that start on
/// `line`. A comment on a later line belongs to whatever follows it.
pub fn same_line_fluff(tokens: &[Token], start: usize, end: usize, line: usize) -> (usize, String) {
    collect(tokens, start, end, |token| {
        token.is_whitespace() || (token.is_comment() && token.line == line)
    })
}

//! Context sensitive tokenizer
//!
//! The lexer does not know the grammar, but it keeps a small amount of
//! context so that each field is cut at the right place: a selector stops at
//! whitespace or a comma, a property name also stops at `:` or `{`, a value
//! runs until `;` or `}`, and a `@media` condition runs until `{`.
//! Punctuation, whitespace runs and comments are always tokens of their own.

use nom::{
    bytes::complete::{tag, take_until, take_while1},
    character::complete::one_of,
    combinator::recognize,
    IResult, Input, Parser,
};

use crate::error::{ErrorKind, ParseError, Result};
use crate::token::{is_whitespace, Span, Token};

type LexResult<'a, T> = IResult<Span<'a>, T>;

/// What the next field is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
    Selector,
    Property,
    Value,
    MediaLine,
}

impl LexMode {
    /// Mode after a punctuation character. `opens_media_body` is set when the
    /// `{` belongs to a `@media` rule, whose body holds rules, not declarations.
    fn after_punctuation(self, c: char, opens_media_body: bool) -> Self {
        match c {
            ':' => Self::Value,
            ';' => Self::Property,
            '{' if opens_media_body => self,
            '{' => Self::Property,
            '}' => Self::Selector,
            _ => self,
        }
    }

    /// Mode after a field scanned in this mode.
    fn after_field(self) -> Self {
        match self {
            Self::Value => Self::Property,
            Self::MediaLine => Self::Selector,
            mode => mode,
        }
    }
}

/// Split `text` into tokens whose concatenation is exactly `text`.
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(text);
    while !lexer.input.fragment().is_empty() {
        lexer.advance()?;
    }
    log::debug!("tokenized {} bytes into {} tokens", text.len(), lexer.tokens.len());
    Ok(lexer.tokens)
}

struct Lexer<'a> {
    input: Span<'a>,
    mode: LexMode,
    media_body_pending: bool,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            input: Span::new(text),
            mode: LexMode::Selector,
            media_body_pending: false,
            tokens: Vec::new(),
        }
    }

    /// Scan one token and update the mode.
    fn advance(&mut self) -> Result<()> {
        let (rest, lexeme) = self.scan()?;
        let token = Token::from_span(lexeme);
        log::trace!("{:?} {}:{} {:?}", self.mode, token.line, token.column, token.text);
        self.tokens.push(token);
        self.input = rest;
        Ok(())
    }

    fn scan(&mut self) -> Result<(Span<'a>, Span<'a>)> {
        let input = self.input;

        if let Ok((rest, punct)) = punctuation(input) {
            let c = punct.fragment().chars().next().unwrap_or_default();
            self.mode = self
                .mode
                .after_punctuation(c, c == '{' && self.media_body_pending);
            if c == '{' {
                self.media_body_pending = false;
            }
            return Ok((rest, punct));
        }

        if let Ok(result) = whitespace(input) {
            return Ok(result);
        }

        if input.fragment().starts_with("/*") {
            return comment(input).map_err(|_| unclosed_comment());
        }

        if let Ok(result) = media_keyword(input) {
            self.mode = LexMode::MediaLine;
            self.media_body_pending = true;
            return Ok(result);
        }

        let lexeme = match self.mode {
            LexMode::MediaLine => field(input, is_media_end, true),
            LexMode::Property => field(input, is_property_end, false),
            LexMode::Value => field(input, is_value_end, true),
            LexMode::Selector => field(input, is_selector_end, false),
        };
        self.mode = self.mode.after_field();
        Ok(lexeme)
    }
}

/// An unterminated comment never becomes a token, so the error points at the
/// start of the input.
fn unclosed_comment() -> ParseError {
    ParseError::new(ErrorKind::UnclosedComment, Token::new("", 1, 1))
}

fn punctuation(input: Span) -> LexResult<Span> {
    recognize(one_of("{};:,")).parse(input)
}

fn whitespace(input: Span) -> LexResult<Span> {
    take_while1(is_whitespace)(input)
}

/// `/* ... */`, delimiters included
fn comment(input: Span) -> LexResult<Span> {
    recognize((tag("/*"), take_until("*/"), tag("*/"))).parse(input)
}

fn media_keyword(input: Span) -> LexResult<Span> {
    tag("@media")(input)
}

/// Scan up to the first terminator that is not inside parentheses. Returns
/// `(rest, field)`. The field is never empty, so the lexer always advances.
fn field<'a>(input: Span<'a>, terminator: fn(char) -> bool, trim_end: bool) -> (Span<'a>, Span<'a>) {
    let fragment = *input.fragment();
    let mut depth = 0i32;
    let mut end = fragment.len();

    for (offset, c) in fragment.char_indices() {
        if depth == 0 && terminator(c) {
            end = offset;
            break;
        }
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
    }

    let mut scanned = &fragment[..end];
    if trim_end {
        scanned = scanned.trim_end();
    }
    let len = match scanned.len() {
        0 => fragment.chars().next().map_or(0, char::len_utf8),
        len => len,
    };

    input.take_split(len)
}

fn is_selector_end(c: char) -> bool {
    is_whitespace(c) || c == ','
}

fn is_property_end(c: char) -> bool {
    is_whitespace(c) || c == ':' || c == '{' || c == ','
}

fn is_value_end(c: char) -> bool {
    c == ';' || c == '}'
}

fn is_media_end(c: char) -> bool {
    c == '{'
}

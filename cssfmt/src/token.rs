//! Positioned source tokens

use nom_locate::LocatedSpan;

/// Input type used while scanning. Tracks byte offset, line and column.
pub type Span<'a> = LocatedSpan<&'a str>;

/// A slice of the source text with the position it started at.
///
/// Tokens never overlap and concatenating them in order gives back the
/// original input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub text: String,
    /// 1-based line
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            text: text.into(),
            line,
            column,
        }
    }

    pub fn from_span(span: Span) -> Self {
        Self {
            text: span.fragment().to_string(),
            line: span.location_line() as usize,
            column: span.get_utf8_column(),
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.text.chars().next().is_some_and(is_whitespace)
    }

    pub fn is_comment(&self) -> bool {
        self.text.starts_with("/*")
    }

    /// Whitespace and comments carry no syntax of their own.
    pub fn is_fluff(&self) -> bool {
        self.is_whitespace() || self.is_comment()
    }

    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }
}

/// The characters the lexer folds into whitespace runs.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(Token::new("  \n", 1, 1).is_whitespace());
        assert!(Token::new("/* x */", 1, 1).is_comment());
        assert!(Token::new("/* x */", 1, 1).is_fluff());
        assert!(!Token::new("h1", 1, 1).is_fluff());
        assert!(!Token::new("", 1, 1).is_whitespace());
    }

    #[test]
    fn test_from_span() {
        let span = Span::new("a\nbé");
        let token = Token::from_span(span);
        assert_eq!(token.line, 1);
        assert_eq!(token.column, 1);
        assert_eq!(token.text, "a\nbé");
    }
}

use thiserror::Error;

use crate::token::Token;

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Every way a stylesheet can be rejected. The display text is the message
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    #[error("unexpected }}")]
    UnexpectedCloseBrace,
    #[error("missing }}")]
    MissingCloseBrace,
    #[error("unexpected empty section")]
    EmptySection,
    #[error("Comments in selector section are not allowed")]
    CommentInSelector,
    #[error("We expect a colon here")]
    ExpectedColon,
    #[error("Empty declaration or missing semicolon")]
    EmptyDeclaration,
    #[error("Missing value")]
    MissingValue,
    #[error("Missing selector")]
    MissingSelector,
    #[error("unclosed comment")]
    UnclosedComment,
}

/// A parse failure together with the token it was detected at.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub token: Token,
}

impl ParseError {
    pub fn new(kind: ErrorKind, token: Token) -> Self {
        Self { kind, token }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn line(&self) -> usize {
        self.token.line
    }

    pub fn column(&self) -> usize {
        self.token.column
    }
}

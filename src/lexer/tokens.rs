use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("func", TokenKind::Func);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    End,
    Number,
    Identifier,

    LBrace,
    RBrace,
    LParen,
    RParen,

    Equal,        // =
    EqualEqual,   // ==
    Exclaim,      // !
    ExclaimEqual, // !=

    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    Comma,

    Plus,
    Minus,
    Slash,
    Star,

    // Reserved
    Let,
    Func,
    And,
    Or,
    Not,
    If,
    Else,
    While,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexical unit.
///
/// Number and identifier tokens carry their source text as payload data;
/// every other kind carries none, and requesting it is a programming error.
/// Tokens never mutate after creation.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    data: Option<String>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            data: None,
            span,
        }
    }

    pub fn with_data(kind: TokenKind, data: String, span: Span) -> Self {
        assert!(
            matches!(kind, TokenKind::Number | TokenKind::Identifier),
            "Cannot set payload data for {}",
            kind
        );
        Token {
            kind,
            data: Some(data),
            span,
        }
    }

    /// Returns the payload data of a number or identifier token.
    ///
    /// Panics for any other kind.
    pub fn data(&self) -> &str {
        assert!(
            self.is_literal() || self.is_identifier(),
            "Cannot get payload data for {}",
            self.kind
        );
        self.data.as_deref().unwrap()
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn is_literal(&self) -> bool {
        self.is_kind(TokenKind::Number)
    }

    pub fn is_identifier(&self) -> bool {
        self.is_kind(TokenKind::Identifier)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.data {
            Some(data) => write!(f, "{} ({})", self.kind, data),
            None => write!(f, "{}", self.kind),
        }
    }
}

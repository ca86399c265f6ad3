use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenKind};

/// Unary operators, derived from the triggering token at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Not,
}

/// Binary operators, derived from the triggering token at construction time.
///
/// `Xor` has no surface syntax yet and is never produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,

    Less,
    Greater,
    LessEq,
    GreaterEq,

    EqEq,
    NotEq,

    And,
    Or,
    Xor,
}

impl UnaryOp {
    pub fn for_token(token: &Token) -> Option<UnaryOp> {
        match token.kind {
            TokenKind::Minus => Some(UnaryOp::Negate),
            TokenKind::Exclaim => Some(UnaryOp::Not),
            _ => None,
        }
    }
}

impl BinaryOp {
    pub fn for_token(token: &Token) -> Option<BinaryOp> {
        match token.kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Less => Some(BinaryOp::Less),
            TokenKind::Greater => Some(BinaryOp::Greater),
            TokenKind::LessEqual => Some(BinaryOp::LessEq),
            TokenKind::GreaterEqual => Some(BinaryOp::GreaterEq),
            TokenKind::EqualEqual => Some(BinaryOp::EqEq),
            TokenKind::ExclaimEqual => Some(BinaryOp::NotEq),
            TokenKind::And => Some(BinaryOp::And),
            TokenKind::Or => Some(BinaryOp::Or),
            _ => None,
        }
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Negate => write!(f, "-"),
            UnaryOp::Not => write!(f, "!"),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEq => "<=",
            BinaryOp::GreaterEq => ">=",
            BinaryOp::EqEq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
        };
        write!(f, "{}", symbol)
    }
}

//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level entry
//! point. The parser is a single-pass recursive-descent engine: expressions
//! are parsed with precedence climbing (one function per precedence level,
//! iterative loops for the left-associative levels) and statements and
//! declarations with a predictive grammar keyed on the leading token.
//!
//! The parser holds a single read cursor over the token stream. All
//! syntactic failures are raised through `must_consume` (or an explicit
//! raise at a detected contradiction, such as an invalid assignment target)
//! and abort the whole parse; no resynchronization is attempted.

use std::rc::Rc;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::{is_invalid_expr_stmt, parse_decl};

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the read cursor. The stream is
/// never mutated; the cursor only moves forward and stops at the end
/// marker.
pub struct Parser {
    /// The list of tokens to parse, terminated by an `End` token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse, ending in an `End` token
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Returns the token at the cursor without advancing.
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the most recently advanced-over token.
    pub fn previous(&self) -> &Token {
        &self.tokens[self.pos - 1]
    }

    /// Returns true if the cursor has reached the end marker.
    pub fn is_at_end(&self) -> bool {
        self.peek().is_kind(TokenKind::End)
    }

    /// Returns the token at the cursor and moves the cursor forward by one.
    ///
    /// Idempotent at the end marker: the cursor never moves past it.
    pub fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
            return self.previous();
        }
        self.peek()
    }

    /// Checks if the token at the cursor is of the specified kind.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_kind(kind)
    }

    /// Advances and returns true iff the token at the cursor belongs to
    /// `kinds`; otherwise leaves the cursor untouched and returns false.
    ///
    /// Use `previous()` to get the consumed token.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if self.peek().is_any(kinds) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes a token of the given kind or fails with a syntax error
    /// carrying `message`.
    ///
    /// This is the sole error-raising primitive; every expected-token
    /// failure in the grammar routes through it.
    pub fn must_consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(Error::new(
                ErrorImpl::SyntaxError {
                    message: String::from(message),
                },
                self.get_position(),
            ))
        }
    }

    /// Returns the source position of the token at the cursor.
    pub fn get_position(&self) -> Position {
        let start = &self.peek().span.start;
        Position(start.0, Rc::clone(&start.1))
    }
}

/// Parses a stream of tokens into a sequence of top-level declarations.
///
/// This is the main entry point for parsing. It repeatedly parses
/// declarations (falling through to statements) until the end marker.
///
/// The first syntax violation aborts the whole parse and is returned as an
/// `Error`; no partial tree is returned. An expression that matches no
/// alternative at all is also a failure here: it would otherwise consume no
/// tokens.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Node>, Error> {
    let mut parser = Parser::new(tokens);

    let mut program = vec![];

    while !parser.is_at_end() {
        let node = parse_decl(&mut parser)?;

        if is_invalid_expr_stmt(&node) {
            return Err(Error::new(
                ErrorImpl::SyntaxError {
                    message: String::from("Expected an expression."),
                },
                parser.get_position(),
            ));
        }

        program.push(node);
    }

    Ok(program)
}

//! AST (Abstract Syntax Tree) module
//! Contains all definitions related to the AST structure
//!
//! Submodules:
//! - ast: Core AST definitions and visitor traits
//! - declarations: Definitions for the declaration variants
//! - expressions: Definitions for the expression variants
//! - ops: Unary and binary operator enumerations
//! - printer: Parenthesized-prefix tree rendering visitor
//! - statements: Definitions for the statement variants

pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod ops;
pub mod printer;
pub mod statements;

use crate::lexer::tokens::Token;

use super::{ast::DeclVisitor, expressions::Expr, statements::Stmt};

/// The function shape shared by function-like declarations.
///
/// Parameters are positional expressions (no type annotations, no defaults);
/// the body is always a block statement by construction.
#[derive(Debug, Clone)]
pub struct FuncDef {
    pub params: Vec<Expr>,
    pub body: Box<Stmt>,
}

/// Declaration node.
///
/// `Invalid` is structural only: the parser never constructs it, since a
/// non-keyword declaration position falls through to statement parsing.
#[derive(Debug, Clone)]
pub enum Decl {
    Invalid,
    Let {
        name: Token,
        initializer: Option<Expr>,
    },
    Func {
        name: Token,
        def: FuncDef,
    },
}

impl Decl {
    /// Double-dispatch entry point.
    ///
    /// Visiting an `Invalid` node is a programming error: the caller is
    /// processing a tree that still contains an unrecovered parse failure.
    pub fn accept<V: DeclVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Decl::Invalid => panic!("Visiting invalid declaration"),
            Decl::Let { name, initializer } => visitor.visit_let_decl(name, initializer.as_ref()),
            Decl::Func { name, def } => visitor.visit_func_decl(name, def),
        }
    }
}

use crate::lexer::tokens::Token;

use super::{
    ast::ExprVisitor,
    ops::{BinaryOp, UnaryOp},
};

/// Expression node.
///
/// Every variant owns its children exclusively; nodes are immutable once
/// returned by the parser. `Invalid` is the parse-failure placeholder
/// produced when a primary expression matches no alternative.
#[derive(Debug, Clone)]
pub enum Expr {
    Invalid,
    Literal {
        value: String,
    },
    Variable {
        name: Token,
    },
    Group {
        expr: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        lhs: Box<Expr>,
        op: BinaryOp,
        rhs: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Assign {
        name: Token,
        value: Box<Expr>,
    },
}

impl Expr {
    /// Double-dispatch entry point.
    ///
    /// Visiting an `Invalid` node is a programming error: the caller is
    /// processing a tree that still contains an unrecovered parse failure.
    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Invalid => panic!("Visiting invalid expression"),
            Expr::Literal { value } => visitor.visit_literal_expr(value),
            Expr::Variable { name } => visitor.visit_variable_expr(name),
            Expr::Group { expr } => visitor.visit_group_expr(expr),
            Expr::Unary { op, expr } => visitor.visit_unary_expr(*op, expr),
            Expr::Binary { lhs, op, rhs } => visitor.visit_binary_expr(lhs, *op, rhs),
            Expr::Call { callee, args } => visitor.visit_call_expr(callee, args),
            Expr::Assign { name, value } => visitor.visit_assign_expr(name, value),
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Expr::Invalid)
    }
}

use super::{
    ast::{Node, StmtVisitor},
    expressions::Expr,
};

/// Statement node.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// A `{` ... `}` block holding declarations and statements in source
    /// order.
    Block {
        elems: Vec<Node>,
    },
    Expr {
        expr: Expr,
    },
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        cond: Expr,
        body: Box<Stmt>,
    },
    /// `return` with a mandatory value. The guard slot is reserved for
    /// conditional returns and is always `None` at parse time.
    Return {
        value: Expr,
        guard: Option<Expr>,
    },
}

impl Stmt {
    pub fn accept<V: StmtVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Stmt::Block { elems } => visitor.visit_block_stmt(elems),
            Stmt::Expr { expr } => visitor.visit_expr_stmt(expr),
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => visitor.visit_if_stmt(cond, then_branch, else_branch.as_deref()),
            Stmt::While { cond, body } => visitor.visit_while_stmt(cond, body),
            Stmt::Return { value, guard } => visitor.visit_return_stmt(value, guard.as_ref()),
        }
    }
}

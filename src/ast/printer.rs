use crate::lexer::tokens::Token;

use super::{
    ast::{DeclVisitor, ExprVisitor, Node, StmtVisitor},
    declarations::FuncDef,
    expressions::Expr,
    ops::{BinaryOp, UnaryOp},
    statements::Stmt,
};

/// Renders a tree as parenthesized prefix text.
///
/// `1 + 2 * 3` becomes `(+ 1 (* 2 3))`. Used by the driver to dump parsed
/// programs and by tests to assert tree shape.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print_node(&mut self, node: &Node) -> String {
        node.accept(self)
    }

    pub fn print_expr(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    pub fn print_stmt(&mut self, stmt: &Stmt) -> String {
        stmt.accept(self)
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_literal_expr(&mut self, value: &str) -> String {
        value.to_string()
    }

    fn visit_variable_expr(&mut self, name: &Token) -> String {
        name.data().to_string()
    }

    fn visit_group_expr(&mut self, expr: &Expr) -> String {
        format!("(group {})", expr.accept(self))
    }

    fn visit_unary_expr(&mut self, op: UnaryOp, expr: &Expr) -> String {
        format!("({} {})", op, expr.accept(self))
    }

    fn visit_binary_expr(&mut self, lhs: &Expr, op: BinaryOp, rhs: &Expr) -> String {
        format!("({} {} {})", op, lhs.accept(self), rhs.accept(self))
    }

    fn visit_call_expr(&mut self, callee: &Expr, args: &[Expr]) -> String {
        let mut result = format!("(call {}", callee.accept(self));
        for arg in args {
            result.push(' ');
            result.push_str(&arg.accept(self));
        }
        result.push(')');
        result
    }

    fn visit_assign_expr(&mut self, name: &Token, value: &Expr) -> String {
        format!("(= {} {})", name.data(), value.accept(self))
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_block_stmt(&mut self, elems: &[Node]) -> String {
        let mut result = String::from("(block");
        for elem in elems {
            result.push(' ');
            result.push_str(&elem.accept(self));
        }
        result.push(')');
        result
    }

    fn visit_expr_stmt(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn visit_if_stmt(
        &mut self,
        cond: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> String {
        match else_branch {
            Some(else_branch) => format!(
                "(if {} {} {})",
                cond.accept(self),
                then_branch.accept(self),
                else_branch.accept(self)
            ),
            None => format!("(if {} {})", cond.accept(self), then_branch.accept(self)),
        }
    }

    fn visit_while_stmt(&mut self, cond: &Expr, body: &Stmt) -> String {
        format!("(while {} {})", cond.accept(self), body.accept(self))
    }

    fn visit_return_stmt(&mut self, value: &Expr, guard: Option<&Expr>) -> String {
        match guard {
            Some(guard) => format!("(return {} when {})", value.accept(self), guard.accept(self)),
            None => format!("(return {})", value.accept(self)),
        }
    }
}

impl DeclVisitor for AstPrinter {
    type Output = String;

    fn visit_let_decl(&mut self, name: &Token, initializer: Option<&Expr>) -> String {
        match initializer {
            Some(initializer) => format!("(let {} {})", name.data(), initializer.accept(self)),
            None => format!("(let {})", name.data()),
        }
    }

    fn visit_func_decl(&mut self, name: &Token, def: &FuncDef) -> String {
        let params = def
            .params
            .iter()
            .map(|param| param.accept(self))
            .collect::<Vec<String>>()
            .join(" ");

        format!("(func {} ({}) {})", name.data(), params, def.body.accept(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ops::BinaryOp;
    use crate::lexer::tokens::TokenKind;
    use crate::Span;

    fn identifier(name: &str) -> Token {
        Token::with_data(
            TokenKind::Identifier,
            name.to_string(),
            Span {
                start: crate::Position::null(),
                end: crate::Position::null(),
            },
        )
    }

    #[test]
    fn test_print_binary_expr() {
        let expr = Expr::Binary {
            lhs: Box::new(Expr::Literal {
                value: "1".to_string(),
            }),
            op: BinaryOp::Add,
            rhs: Box::new(Expr::Variable {
                name: identifier("x"),
            }),
        };

        assert_eq!(AstPrinter.print_expr(&expr), "(+ 1 x)");
    }

    #[test]
    fn test_print_empty_call() {
        let expr = Expr::Call {
            callee: Box::new(Expr::Variable {
                name: identifier("f"),
            }),
            args: vec![],
        };

        assert_eq!(AstPrinter.print_expr(&expr), "(call f)");
    }

    #[test]
    #[should_panic(expected = "Visiting invalid expression")]
    fn test_print_invalid_expr_panics() {
        AstPrinter.print_expr(&Expr::Invalid);
    }

    #[test]
    #[should_panic(expected = "Visiting invalid declaration")]
    fn test_print_invalid_decl_panics() {
        use crate::ast::declarations::Decl;

        Decl::Invalid.accept(&mut AstPrinter);
    }
}

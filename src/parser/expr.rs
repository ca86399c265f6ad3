use crate::{
    ast::{
        expressions::Expr,
        ops::{BinaryOp, UnaryOp},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_assignment_expr(parser)
}

fn parse_assignment_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let expr = parse_logical_or(parser)?;

    if parser.match_any(&[TokenKind::Equal]) {
        let value = parse_assignment_expr(parser)?;

        // The left side must be an l-value, and only variables qualify.
        // Checked exactly once, after both sides are parsed.
        return match expr {
            Expr::Variable { name } => Ok(Expr::Assign {
                name,
                value: Box::new(value),
            }),
            _ => Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget,
                parser.get_position(),
            )),
        };
    }

    Ok(expr)
}

fn parse_logical_or(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_logical_and(parser)?;

    while parser.match_any(&[TokenKind::Or]) {
        let rhs = parse_logical_and(parser)?;
        expr = Expr::Binary {
            lhs: Box::new(expr),
            op: BinaryOp::Or,
            rhs: Box::new(rhs),
        };
    }

    Ok(expr)
}

fn parse_logical_and(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_equality_expr(parser)?;

    while parser.match_any(&[TokenKind::And]) {
        let rhs = parse_equality_expr(parser)?;
        expr = Expr::Binary {
            lhs: Box::new(expr),
            op: BinaryOp::And,
            rhs: Box::new(rhs),
        };
    }

    Ok(expr)
}

fn parse_equality_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_comparison_expr(parser)?;

    while parser.match_any(&[TokenKind::EqualEqual, TokenKind::ExclaimEqual]) {
        let op = BinaryOp::for_token(parser.previous()).unwrap();
        let rhs = parse_comparison_expr(parser)?;
        expr = Expr::Binary {
            lhs: Box::new(expr),
            op,
            rhs: Box::new(rhs),
        };
    }

    Ok(expr)
}

fn parse_comparison_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_term_expr(parser)?;

    while parser.match_any(&[
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
    ]) {
        let op = BinaryOp::for_token(parser.previous()).unwrap();
        let rhs = parse_term_expr(parser)?;
        expr = Expr::Binary {
            lhs: Box::new(expr),
            op,
            rhs: Box::new(rhs),
        };
    }

    Ok(expr)
}

fn parse_term_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_factor_expr(parser)?;

    while parser.match_any(&[TokenKind::Plus, TokenKind::Minus]) {
        let op = BinaryOp::for_token(parser.previous()).unwrap();
        let rhs = parse_factor_expr(parser)?;
        expr = Expr::Binary {
            lhs: Box::new(expr),
            op,
            rhs: Box::new(rhs),
        };
    }

    Ok(expr)
}

fn parse_factor_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_unary_expr(parser)?;

    while parser.match_any(&[TokenKind::Slash, TokenKind::Star]) {
        let op = BinaryOp::for_token(parser.previous()).unwrap();
        let rhs = parse_unary_expr(parser)?;
        expr = Expr::Binary {
            lhs: Box::new(expr),
            op,
            rhs: Box::new(rhs),
        };
    }

    Ok(expr)
}

fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.match_any(&[TokenKind::Minus, TokenKind::Exclaim]) {
        let op = UnaryOp::for_token(parser.previous()).unwrap();
        let expr = parse_unary_expr(parser)?;
        return Ok(Expr::Unary {
            op,
            expr: Box::new(expr),
        });
    }

    parse_call_expr(parser)
}

fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_primary_expr(parser)?;

    // Postfix loop so chained calls like f(x)(y) keep wrapping the result.
    while parser.match_any(&[TokenKind::LParen]) {
        let args = parse_call_args(parser)?;
        parser.must_consume(TokenKind::RParen, "Expected ')' after arguments.")?;
        expr = Expr::Call {
            callee: Box::new(expr),
            args,
        };
    }

    Ok(expr)
}

fn parse_call_args(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut args = vec![];

    if !parser.check(TokenKind::RParen) {
        args.push(parse_expr(parser)?);
        while parser.match_any(&[TokenKind::Comma]) {
            args.push(parse_expr(parser)?);
        }
    }

    Ok(args)
}

fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.match_any(&[TokenKind::Number]) {
        return Ok(Expr::Literal {
            value: parser.previous().data().to_string(),
        });
    }

    if parser.match_any(&[TokenKind::LParen]) {
        let expr = parse_expr(parser)?;
        parser.must_consume(TokenKind::RParen, "Expected ')' after expression.")?;
        return Ok(Expr::Group {
            expr: Box::new(expr),
        });
    }

    if parser.match_any(&[TokenKind::Identifier]) {
        return Ok(Expr::Variable {
            name: parser.previous().clone(),
        });
    }

    // No alternative matched. This is the one non-fatal failure: the
    // placeholder participates in enclosing rules as an ordinary value.
    Ok(Expr::Invalid)
}

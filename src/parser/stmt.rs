use crate::{
    ast::{
        ast::Node,
        declarations::{Decl, FuncDef},
        expressions::Expr,
        statements::Stmt,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// An expression statement whose expression matched nothing consumed no
/// tokens; enclosing loops must not spin on it.
pub fn is_invalid_expr_stmt(node: &Node) -> bool {
    matches!(node, Node::Stmt(Stmt::Expr { expr: Expr::Invalid }))
}

pub fn parse_decl(parser: &mut Parser) -> Result<Node, Error> {
    if parser.match_any(&[TokenKind::Let]) {
        return Ok(Node::Decl(parse_let_decl(parser)?));
    }

    if parser.match_any(&[TokenKind::Func]) {
        return Ok(Node::Decl(parse_func_decl(parser)?));
    }

    Ok(Node::Stmt(parse_stmt(parser)?))
}

fn parse_let_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let name = parser.must_consume(TokenKind::Identifier, "Expected an identifier.")?;

    let mut initializer = None;
    if parser.match_any(&[TokenKind::Equal]) {
        initializer = Some(parse_expr(parser)?);
    }

    Ok(Decl::Let { name, initializer })
}

fn parse_func_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let name = parser.must_consume(TokenKind::Identifier, "Expected an identifier.")?;

    parser.must_consume(TokenKind::LParen, "Expected '(' after function name.")?;
    let params = parse_func_parameters(parser)?;
    parser.must_consume(TokenKind::RParen, "Expected ')' after parameter.")?;

    parser.must_consume(TokenKind::LBrace, "Expected a '{' before function body.")?;
    let body = parse_block_stmt(parser)?;

    Ok(Decl::Func {
        name,
        def: FuncDef {
            params,
            body: Box::new(body),
        },
    })
}

fn parse_func_parameters(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut params = vec![];

    if !parser.check(TokenKind::RParen) {
        params.push(parse_expr(parser)?);
        while parser.match_any(&[TokenKind::Comma]) {
            params.push(parse_expr(parser)?);
        }
    }

    Ok(params)
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.match_any(&[TokenKind::LBrace]) {
        return parse_block_stmt(parser);
    }

    if parser.match_any(&[TokenKind::If]) {
        return parse_if_stmt(parser);
    }

    if parser.match_any(&[TokenKind::While]) {
        return parse_while_stmt(parser);
    }

    if parser.match_any(&[TokenKind::Return]) {
        return parse_return_stmt(parser);
    }

    parse_expr_stmt(parser)
}

fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.must_consume(TokenKind::LParen, "Expected '(' after 'if'.")?;
    let cond = parse_expr(parser)?;
    parser.must_consume(TokenKind::RParen, "Expected ')' after if condition.")?;

    let then_branch = parse_stmt(parser)?;

    // Greedy else match: the else binds to the nearest unmatched if.
    let mut else_branch = None;
    if parser.match_any(&[TokenKind::Else]) {
        else_branch = Some(Box::new(parse_stmt(parser)?));
    }

    Ok(Stmt::If {
        cond,
        then_branch: Box::new(then_branch),
        else_branch,
    })
}

fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.must_consume(TokenKind::LParen, "Expected '(' after 'while'.")?;
    let cond = parse_expr(parser)?;
    parser.must_consume(TokenKind::RParen, "Expected ')' after while condition.")?;

    // Exactly one statement; multiple statements require a block.
    let body = parse_stmt(parser)?;

    Ok(Stmt::While {
        cond,
        body: Box::new(body),
    })
}

fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let value = parse_expr(parser)?;

    Ok(Stmt::Return { value, guard: None })
}

fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let mut elems = vec![];

    while !parser.check(TokenKind::RBrace) && !parser.is_at_end() {
        let elem = parse_decl(parser)?;

        // No progress was made; the brace requirement below reports it.
        if is_invalid_expr_stmt(&elem) {
            break;
        }

        elems.push(elem);
    }

    parser.must_consume(TokenKind::RBrace, "Expected '}' after block.")?;
    Ok(Stmt::Block { elems })
}

fn parse_expr_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expr = parse_expr(parser)?;
    Ok(Stmt::Expr { expr })
}

use std::io::Read;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// expression := primary binopRHS
pub fn parse_expr<R: Read>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    let lhs = parse_primary_expr(parser)?;

    parse_binop_rhs(parser, 0, lhs)
}

pub fn parse_primary_expr<R: Read>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier(_) => parse_identifier_expr(parser),
        TokenKind::Number(value) => {
            let value = *value;
            parser.advance()?;

            Ok(Expr::Number(value))
        }
        TokenKind::Char('(') => parse_paren_expr(parser),
        _ => Err(parser.error_at_current(|token| ErrorImpl::UnexpectedToken { token })),
    }
}

/// parenexpr := '(' expression ')'
pub fn parse_paren_expr<R: Read>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    parser.advance()?;

    let expr = parse_expr(parser)?;

    if !parser.current_token().is_char(')') {
        return Err(parser.error_at_current(|token| ErrorImpl::ExpectedClosingParen { token }));
    }

    parser.advance()?;

    Ok(expr)
}

/// identifierexpr := identifier | identifier '(' (expression (',' expression)*)? ')'
pub fn parse_identifier_expr<R: Read>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    let TokenKind::Identifier(name) = parser.current_token_kind().clone() else {
        return Err(parser.error_at_current(|token| ErrorImpl::UnexpectedToken { token }));
    };

    parser.advance()?;

    if !parser.current_token().is_char('(') {
        return Ok(Expr::Variable(name));
    }

    parser.advance()?;

    let mut args = vec![];

    if !parser.current_token().is_char(')') {
        loop {
            args.push(parse_expr(parser)?);

            if parser.current_token().is_char(')') {
                break;
            }

            if !parser.current_token().is_char(',') {
                return Err(
                    parser.error_at_current(|token| ErrorImpl::ExpectedArgumentSeparator { token })
                );
            }

            parser.advance()?;
        }
    }

    parser.advance()?;

    Ok(Expr::Call { callee: name, args })
}

/// Precedence climbing over the operator chain following `lhs`.
///
/// Operators binding looser than `expr_prec` end the chain. An operator that
/// binds tighter than the one before it pulls the following operands into the
/// right-hand side first, so equal precedences associate to the left.
pub fn parse_binop_rhs<R: Read>(
    parser: &mut Parser<R>,
    expr_prec: i32,
    mut lhs: Expr,
) -> Result<Expr, Error> {
    loop {
        let Some((op, tok_prec)) = parser.current_binop() else {
            return Ok(lhs);
        };

        if tok_prec < expr_prec {
            return Ok(lhs);
        }

        parser.advance()?;

        let mut rhs = parse_primary_expr(parser)?;

        if tok_prec < parser.get_token_precedence() {
            rhs = parse_binop_rhs(parser, tok_prec + 1, rhs)?;
        }

        lhs = Expr::binary(op, lhs, rhs);
    }
}

use std::io::Read;

use crate::{
    ast::statements::{Function, Prototype, TopLevel},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, parser::Parser};

/// Parses one top-level construct, chosen by the current token.
///
/// The caller handles end-of-stream and `;` before calling this.
pub fn parse_item<R: Read>(parser: &mut Parser<R>) -> Result<TopLevel, Error> {
    match parser.current_token_kind() {
        TokenKind::Def => Ok(TopLevel::Definition(parse_definition(parser)?)),
        TokenKind::Extern => Ok(TopLevel::Extern(parse_extern(parser)?)),
        _ => Ok(TopLevel::Expression(parse_top_level_expr(parser)?)),
    }
}

/// prototype := identifier '(' identifier* ')'
pub fn parse_prototype<R: Read>(parser: &mut Parser<R>) -> Result<Prototype, Error> {
    let TokenKind::Identifier(name) = parser.current_token_kind().clone() else {
        return Err(parser.error_at_current(|token| ErrorImpl::ExpectedFunctionName { token }));
    };

    parser.advance()?;

    if !parser.current_token().is_char('(') {
        return Err(
            parser.error_at_current(|token| ErrorImpl::ExpectedPrototypeOpenParen { token })
        );
    }

    parser.advance()?;

    let mut args = vec![];

    while let TokenKind::Identifier(arg) = parser.current_token_kind() {
        args.push(arg.clone());
        parser.advance()?;
    }

    if !parser.current_token().is_char(')') {
        return Err(
            parser.error_at_current(|token| ErrorImpl::ExpectedPrototypeCloseParen { token })
        );
    }

    parser.advance()?;

    Ok(Prototype { name, args })
}

/// definition := 'def' prototype expression
pub fn parse_definition<R: Read>(parser: &mut Parser<R>) -> Result<Function, Error> {
    parser.advance()?;

    let proto = parse_prototype(parser)?;
    let body = parse_expr(parser)?;

    Ok(Function { proto, body })
}

/// external := 'extern' prototype
pub fn parse_extern<R: Read>(parser: &mut Parser<R>) -> Result<Prototype, Error> {
    parser.advance()?;

    parse_prototype(parser)
}

pub fn parse_top_level_expr<R: Read>(parser: &mut Parser<R>) -> Result<Function, Error> {
    let body = parse_expr(parser)?;

    Ok(Function {
        proto: Prototype::anonymous(),
        body,
    })
}

use crate::{
    ast::expressions::{BinaryExpr, CallExpr, Expr, Identifier, NumberLiteral, StringLiteral},
    errors::errors::{SyntaxError, SyntaxErrorKind},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{binary_operator, BindingPower},
    parser::Parser,
};

/// Parses an expression whose operators all bind more tightly than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, SyntaxError> {
    parser.enter()?;
    let result = parse_binary_expr(parser, bp);
    parser.leave();
    result
}

fn parse_binary_expr(parser: &mut Parser, min_bp: BindingPower) -> Result<Expr, SyntaxError> {
    let start = parser.current_token().position();
    let mut left = parse_primary_expr(parser)?;

    // Equal tiers stop the right operand, so chains fold to the left
    while let Some(operator) = binary_operator(parser.current_token()) {
        let bp = operator.binding_power();
        if bp <= min_bp {
            break;
        }

        parser.advance();
        let right = parse_expr(parser, bp)?;

        left = Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            position: start,
        });
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Identifier => {
            parser.advance();
            let identifier = Expr::Identifier(Identifier {
                position: token.position(),
                name: token.lexeme,
            });

            if parser.check_symbol("(") {
                parse_call_expr(parser, identifier)
            } else {
                Ok(identifier)
            }
        }
        TokenKind::Number => {
            parser.advance();
            Ok(Expr::Number(NumberLiteral {
                position: token.position(),
                value: token.lexeme,
            }))
        }
        TokenKind::String => {
            parser.advance();
            Ok(Expr::String(StringLiteral {
                position: token.position(),
                value: token.lexeme,
            }))
        }
        TokenKind::Symbol if token.lexeme == "(" => parse_grouping_expr(parser),
        _ => Err(parser.error(SyntaxErrorKind::UnexpectedToken)),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    parser.expect_symbol("(")?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_symbol(")")?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, SyntaxError> {
    let position = callee.position();
    parser.expect_symbol("(")?;

    let mut arguments = vec![];

    if !parser.check_symbol(")") {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);
            if !parser.match_symbol(",") {
                break;
            }
        }
    }

    parser.expect_symbol(")")?;

    Ok(Expr::Call(CallExpr {
        callee: Box::new(callee),
        arguments,
        position,
    }))
}

use crate::{
    ast::{
        ast::Declaration,
        statements::{BlockStmt, ExpressionStmt, FnDeclStmt, Parameter, ReturnStmt, Stmt, VarDeclStmt},
    },
    errors::errors::{SyntaxError, SyntaxErrorKind},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::UNSUPPORTED_KEYWORDS, parser::Parser, types::parse_type_name};

pub fn parse_declaration(parser: &mut Parser) -> Result<Declaration, SyntaxError> {
    if parser.check_keyword("func") {
        return Ok(Declaration::Function(parse_fn_decl_stmt(parser)?));
    }

    Err(parser.error(SyntaxErrorKind::UnknownConstruct))
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, SyntaxError> {
    let token = parser.current_token().clone();

    if token.kind == TokenKind::Keyword {
        match token.lexeme.as_str() {
            "var" => return Ok(Stmt::VarDecl(parse_var_decl_stmt(parser)?)),
            "return" => return Ok(Stmt::Return(parse_return_stmt(parser)?)),
            keyword if UNSUPPORTED_KEYWORDS.iter().any(|k| *k == keyword) => {
                return Err(parser.error(SyntaxErrorKind::UnknownConstruct));
            }
            _ => {}
        }
    }

    let position = token.position();
    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect_symbol(";")?;

    Ok(Stmt::Expression(ExpressionStmt {
        expression,
        position,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<VarDeclStmt, SyntaxError> {
    let start = parser.advance().position();

    let name = parser.expect_identifier()?.lexeme;

    let type_name = if parser.match_symbol(":") {
        parse_type_name(parser)?
    } else {
        String::new()
    };

    let initializer = if parser.match_symbol("=") {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    parser.expect_symbol(";")?;

    Ok(VarDeclStmt {
        name,
        type_name,
        initializer,
        position: start,
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<ReturnStmt, SyntaxError> {
    let start = parser.advance().position();

    let value = if parser.check_symbol(";") {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    parser.expect_symbol(";")?;

    Ok(ReturnStmt {
        value,
        position: start,
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, SyntaxError> {
    let start = parser.expect_symbol("{")?.position();

    let mut body = Vec::new();
    while !parser.check_symbol("}") && !parser.at_eof() {
        body.push(parse_stmt(parser)?);
    }

    parser.expect_symbol("}")?;

    Ok(BlockStmt {
        body,
        position: start,
    })
}

fn parse_parameter(parser: &mut Parser) -> Result<Parameter, SyntaxError> {
    let name = parser.expect_identifier()?.lexeme;
    parser.expect_symbol(":")?;
    let type_name = parse_type_name(parser)?;

    Ok(Parameter { name, type_name })
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<FnDeclStmt, SyntaxError> {
    let start = parser.current_token().position();
    if !parser.match_keyword("func") {
        return Err(parser.error(SyntaxErrorKind::UnexpectedToken));
    }

    let name = parser.expect_identifier()?.lexeme;

    parser.expect_symbol("(")?;

    // A parameter list starts with a name; anything else must be the `)`
    let mut parameters = Vec::new();
    if parser.current_token_kind() == TokenKind::Identifier {
        loop {
            parameters.push(parse_parameter(parser)?);
            if !parser.match_symbol(",") {
                break;
            }
        }
    }

    parser.expect_symbol(")")?;

    let return_type = if parser.match_symbol("->") {
        parse_type_name(parser)?
    } else {
        String::new()
    };

    let body = parse_block_stmt(parser)?;

    Ok(FnDeclStmt {
        name,
        parameters,
        return_type,
        body,
        position: start,
    })
}

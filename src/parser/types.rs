//! Type name parsing.
//!
//! Type annotations are plain identifiers (`int`, `string`, user names).
//! They are kept as text; resolving them is left to later stages.

use crate::errors::errors::SyntaxError;

use super::parser::Parser;

pub fn parse_type_name(parser: &mut Parser) -> Result<String, SyntaxError> {
    Ok(parser.expect_identifier()?.lexeme)
}

use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

/// A syntax error raised by the parser.
///
/// Parsing stops at the first error; there is no recovery and no
/// accumulation of further diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{position}: {message}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub lexeme: String,
    pub message: String,
    pub position: Position,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, token: &Token) -> Self {
        let message = if token.is_eof() {
            kind.to_string()
        } else {
            format!("{} (found `{}`)", kind, token.lexeme)
        };

        SyntaxError {
            kind,
            lexeme: token.lexeme.clone(),
            message,
            position: token.position(),
        }
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            SyntaxErrorKind::UnexpectedToken => "UnexpectedToken",
            SyntaxErrorKind::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            SyntaxErrorKind::MissingExpectedSymbol { .. } => "MissingExpectedSymbol",
            SyntaxErrorKind::UnknownConstruct => "UnknownConstruct",
            SyntaxErrorKind::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.kind {
            SyntaxErrorKind::UnexpectedToken => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`",
                self.lexeme
            )),
            SyntaxErrorKind::UnexpectedEndOfInput => ErrorTip::None,
            SyntaxErrorKind::MissingExpectedSymbol { expected } => {
                ErrorTip::Suggestion(format!("Expected `{}` before `{}`", expected, self.lexeme))
            }
            SyntaxErrorKind::UnknownConstruct => ErrorTip::Suggestion(format!(
                "`{}` does not start a construct this parser understands",
                self.lexeme
            )),
            SyntaxErrorKind::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expressions may be nested at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("expected `{expected}`")]
    MissingExpectedSymbol { expected: String },
    #[error("unknown construct")]
    UnknownConstruct,
    #[error("expression nested more than {limit} levels deep")]
    NestingTooDeep { limit: usize },
}

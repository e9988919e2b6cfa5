//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Declarations and statements are parsed by recursive descent (see
//! `stmt`), expressions by precedence climbing (see `expr`).
//!
//! The parser keeps a cursor into a token vector that always ends in a
//! single `EndOfFile` token; the cursor never moves past it.

use tracing::{debug, trace};

use crate::{
    ast::ast::Module,
    errors::errors::{SyntaxError, SyntaxErrorKind},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::stmt::parse_declaration;

/// Tunables for a parse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest expression nesting accepted before the parse is abandoned.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { max_depth: 256 }
    }
}

/// The main parser structure that maintains parsing state.
///
/// A parser is single-use: it is created for one token stream and consumed
/// by one parse.
pub struct Parser {
    /// The list of tokens to parse, terminated by exactly one `EndOfFile`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Current expression nesting depth
    depth: usize,
    config: ParserConfig,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser::with_config(tokens, ParserConfig::default())
    }

    /// Creates a parser, normalizing `tokens` so that it ends in exactly one
    /// `EndOfFile` token.
    pub fn with_config(mut tokens: Vec<Token>, config: ParserConfig) -> Self {
        if let Some(end) = tokens.iter().position(Token::is_eof) {
            tokens.truncate(end + 1);
        } else {
            let position = tokens
                .last()
                .map(|last| Position::new(last.line, last.column + last.lexeme.chars().count()))
                .unwrap_or_else(Position::start);
            tokens.push(MK_TOKEN!(TokenKind::EndOfFile, String::new(), position));
        }

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            config,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Looks `offset` tokens ahead, stopping at `EndOfFile`.
    pub fn peek(&self, offset: usize) -> &Token {
        let index = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Advances to the next token and returns the previous one. At
    /// `EndOfFile` the cursor stays put.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    pub fn at_eof(&self) -> bool {
        self.current_token().is_eof()
    }

    pub fn check_symbol(&self, symbol: &str) -> bool {
        self.current_token().is_symbol(symbol)
    }

    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.current_token().is_keyword(keyword)
    }

    /// Consumes the current token if it is the keyword `keyword`.
    pub fn match_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes the current token if it is the symbol `symbol`.
    pub fn match_symbol(&mut self, symbol: &str) -> bool {
        if self.check_symbol(symbol) {
            self.advance();
            return true;
        }
        false
    }

    /// Builds an error located at the current token. Running into the end of
    /// input always reports `UnexpectedEndOfInput`.
    pub fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        let token = self.current_token();
        let kind = match kind {
            SyntaxErrorKind::NestingTooDeep { .. } => kind,
            _ if token.is_eof() => SyntaxErrorKind::UnexpectedEndOfInput,
            _ => kind,
        };

        SyntaxError::new(kind, token)
    }

    pub fn expect_symbol(&mut self, symbol: &str) -> Result<Token, SyntaxError> {
        if self.check_symbol(symbol) {
            return Ok(self.advance());
        }

        Err(self.error(SyntaxErrorKind::MissingExpectedSymbol {
            expected: symbol.to_string(),
        }))
    }

    pub fn expect_identifier(&mut self) -> Result<Token, SyntaxError> {
        if self.current_token_kind() == TokenKind::Identifier {
            return Ok(self.advance());
        }

        Err(self.error(SyntaxErrorKind::UnexpectedToken))
    }

    /// Enters one level of expression nesting.
    pub fn enter(&mut self) -> Result<(), SyntaxError> {
        if self.depth >= self.config.max_depth {
            return Err(self.error(SyntaxErrorKind::NestingTooDeep {
                limit: self.config.max_depth,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Parses a stream of tokens into a Module.
///
/// This is the main entry point for parsing. The whole token stream is
/// consumed; the first grammar violation aborts the parse.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `module_name` - Name recorded on the resulting module
pub fn parse(tokens: Vec<Token>, module_name: &str) -> Result<Module, SyntaxError> {
    parse_with_config(tokens, module_name, ParserConfig::default())
}

pub fn parse_with_config(
    tokens: Vec<Token>,
    module_name: &str,
    config: ParserConfig,
) -> Result<Module, SyntaxError> {
    let mut parser = Parser::with_config(tokens, config);
    debug!(module = module_name, tokens = parser.token_count(), "parsing module");

    let mut members = vec![];

    while !parser.at_eof() {
        match parse_declaration(&mut parser) {
            Ok(declaration) => {
                trace!(name = declaration.name(), "parsed declaration");
                members.push(declaration);
            }
            Err(error) => {
                debug!(%error, "parse failed");
                return Err(error);
            }
        }
    }

    debug!(module = module_name, declarations = members.len(), "parsed module");

    Ok(Module {
        name: module_name.to_string(),
        members,
        position: Position::start(),
    })
}

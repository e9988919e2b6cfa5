use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use crate::{Position, MK_TOKEN};

use super::tokens::{is_keyword, Token, TokenKind};

/// What a pattern handler decided about the text its regex matched.
pub enum Scanned {
    Skip,
    Token(TokenKind, String),
    UnterminatedString(String),
}

pub type RegexHandler = fn(&Captures) -> Scanned;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[A-Za-z_][A-Za-z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+(?:\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r#"^"((?:\\(?s:.)?|[^"\\])*)("?)"#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"^(?:->|==|[(){}:,;+\-*/=])").unwrap(), handler: punctuation_handler },
    ];
}

/// Non-fatal problems noticed while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalWarning {
    UnterminatedString { position: Position },
}

/// Pull-based tokenizer over a single source text.
///
/// Every call to [`Lexer::next_token`] scans exactly one token. Once the end
/// of input is reached it keeps returning `EndOfFile` tokens.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    line: usize,
    column: usize,
    warnings: Vec<LexicalWarning>,
    finished: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
            column: 1,
            warnings: vec![],
            finished: false,
        }
    }

    pub fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn warnings(&self) -> &[LexicalWarning] {
        &self.warnings
    }

    /// Moves past `n` bytes of source, keeping line and column in step.
    fn advance_n(&mut self, n: usize) {
        let end = self.pos + n;
        for c in self.source[self.pos..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos = end;
    }

    /// Runs the pattern table at the current position.
    ///
    /// Returns the number of bytes consumed together with the handler's verdict.
    fn scan_pattern(&self) -> (usize, Scanned) {
        let remainder = self.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(captures) = pattern.regex.captures(remainder) {
                let matched = captures.get(0).map_or(0, |m| m.end());
                if matched > 0 {
                    return (matched, (pattern.handler)(&captures));
                }
            }
        }

        // Unknown character: hand it to the parser as an opaque symbol
        match remainder.chars().next() {
            Some(c) => (c.len_utf8(), Scanned::Token(TokenKind::Symbol, c.to_string())),
            None => (0, Scanned::Skip),
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EndOfFile, String::new(), self.current_position());
            }

            let start = self.current_position();
            let (consumed, scanned) = self.scan_pattern();
            self.advance_n(consumed);

            match scanned {
                Scanned::Skip => continue,
                Scanned::Token(kind, lexeme) => return MK_TOKEN!(kind, lexeme, start),
                Scanned::UnterminatedString(lexeme) => {
                    debug!(line = start.line, column = start.column, "unterminated string literal");
                    self.warnings
                        .push(LexicalWarning::UnterminatedString { position: start });
                    return MK_TOKEN!(TokenKind::String, lexeme, start);
                }
            }
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> Token {
        let (pos, line, column) = (self.pos, self.line, self.column);
        let warnings = self.warnings.len();

        let token = self.next_token();

        self.pos = pos;
        self.line = line;
        self.column = column;
        self.warnings.truncate(warnings);

        token
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token including the single `EndOfFile`, then stops.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }

        Some(token)
    }
}

fn skip_handler(_captures: &Captures) -> Scanned {
    Scanned::Skip
}

fn symbol_handler(captures: &Captures) -> Scanned {
    let value = &captures[0];

    if is_keyword(value) {
        Scanned::Token(TokenKind::Keyword, value.to_string())
    } else {
        Scanned::Token(TokenKind::Identifier, value.to_string())
    }
}

fn number_handler(captures: &Captures) -> Scanned {
    Scanned::Token(TokenKind::Number, captures[0].to_string())
}

// Escapes are kept verbatim; decoding belongs to later stages.
fn string_handler(captures: &Captures) -> Scanned {
    let body = captures[1].to_string();

    if captures[2].is_empty() {
        Scanned::UnterminatedString(body)
    } else {
        Scanned::Token(TokenKind::String, body)
    }
}

fn punctuation_handler(captures: &Captures) -> Scanned {
    Scanned::Token(TokenKind::Symbol, captures[0].to_string())
}

/// Tokenizes the whole source up front. The result always ends with exactly
/// one `EndOfFile` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

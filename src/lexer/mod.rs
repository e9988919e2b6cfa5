//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, literals, and symbols
//! - Line/column tracking for error reporting
//! - Comments and whitespace handling
//!
//! The lexer never fails: characters it cannot classify are passed through
//! as one-character symbols and left for the parser to reject.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a Module AST. It handles:
//!
//! - Declaration and statement parsing by recursive descent
//! - Expression parsing by precedence climbing over binding powers
//! - Type name parsing for annotations
//! - Fail-fast error reporting with the offending token's position

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

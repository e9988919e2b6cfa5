//! Error types and error handling for the front end.
//!
//! The lexer is total and never fails, so every error here is syntactic:
//!
//! - Error structures with source position information
//! - Specific error kinds for each way the grammar can be violated
//! - Helpful tips for rendering diagnostics

pub mod errors;

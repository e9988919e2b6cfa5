/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Module root, top-level declarations and node kinds
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for functions, blocks and statements
pub mod ast;
pub mod expressions;
pub mod statements;

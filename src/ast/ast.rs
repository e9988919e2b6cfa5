use std::slice::Iter;

use enum_as_inner::EnumAsInner;

use crate::Position;

use super::statements::FnDeclStmt;

/// Node Kinds
///
/// The closed set of node kinds the front end produces.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum NodeKind {
    Module,
    Function,
    VarDecl,
    Identifier,
    NumberLiteral,
    StringLiteral,
    BinaryExpr,
    CallExpr,
    Block,
    ReturnStmt,
    ExpressionStmt,
}

/// Top-level members of a module.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Declaration {
    Function(FnDeclStmt),
}

impl Declaration {
    pub fn kind(&self) -> NodeKind {
        match self {
            Declaration::Function(_) => NodeKind::Function,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Declaration::Function(function) => function.position,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Declaration::Function(function) => &function.name,
        }
    }
}

/// Module
///
/// The root of every successful parse. Dropping it drops the whole tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: String,
    pub members: Vec<Declaration>,
    pub position: Position,
}

impl Module {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Module
    }

    pub fn iter(&self) -> Iter<'_, Declaration> {
        self.members.iter()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FnDeclStmt> {
        self.members.iter().filter_map(Declaration::as_function)
    }
}

use std::slice::Iter;

use enum_as_inner::EnumAsInner;

use crate::Position;

use super::{ast::NodeKind, expressions::Expr};

#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Stmt {
    VarDecl(VarDeclStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn kind(&self) -> NodeKind {
        match self {
            Stmt::VarDecl(_) => NodeKind::VarDecl,
            Stmt::Return(_) => NodeKind::ReturnStmt,
            Stmt::Expression(_) => NodeKind::ExpressionStmt,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Stmt::VarDecl(stmt) => stmt.position,
            Stmt::Return(stmt) => stmt.position,
            Stmt::Expression(stmt) => stmt.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl BlockStmt {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Block
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub position: Position,
}

/// `var name [: type] [= value];`
///
/// An empty `type_name` means the type is to be inferred.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub name: String,
    pub type_name: String,
    pub initializer: Option<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

/// `func name(params) [-> type] { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub name: String,
    pub parameters: Vec<Parameter>,
    /// Empty when the declaration has no `->` clause.
    pub return_type: String,
    pub body: BlockStmt,
    pub position: Position,
}

impl FnDeclStmt {
    pub fn has_return_type(&self) -> bool {
        !self.return_type.is_empty()
    }
}

use std::fmt::Display;

use enum_as_inner::EnumAsInner;

use crate::Position;

use super::ast::NodeKind;

/// Expression
///
/// Every expression node owns its children outright.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Expr {
    Identifier(Identifier),
    Number(NumberLiteral),
    String(StringLiteral),
    Binary(BinaryExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Identifier(_) => NodeKind::Identifier,
            Expr::Number(_) => NodeKind::NumberLiteral,
            Expr::String(_) => NodeKind::StringLiteral,
            Expr::Binary(_) => NodeKind::BinaryExpr,
            Expr::Call(_) => NodeKind::CallExpr,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Expr::Identifier(expr) => expr.position,
            Expr::Number(expr) => expr.position,
            Expr::String(expr) => expr.position,
            Expr::Binary(expr) => expr.position,
            Expr::Call(expr) => expr.position,
        }
    }
}

// LITERALS

/// Identifier Expression
/// A bare name, including the callee of a call.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub position: Position,
}

/// Number Expression
/// Holds the literal text; conversion to a numeric value happens downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: String,
    pub position: Position,
}

/// String Expression
/// Holds the raw text between the quotes, escapes undecoded.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub position: Position,
}

// COMPLEX

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Equals => "==",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Expression
/// `position` is that of the left operand's first token.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub position: Position,
}

/// Call Expression
/// Arguments are kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

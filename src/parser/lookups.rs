use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::expressions::BinaryOperator,
    lexer::tokens::{Token, TokenKind},
};

/// Operator precedence tiers, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Additive,
    Multiplicative,
}

lazy_static! {
    pub static ref BINARY_OPERATOR_LOOKUP: HashMap<&'static str, BinaryOperator> = {
        let mut map = HashMap::new();
        map.insert("==", BinaryOperator::Equals);
        map.insert("+", BinaryOperator::Add);
        map.insert("-", BinaryOperator::Subtract);
        map.insert("*", BinaryOperator::Multiply);
        map.insert("/", BinaryOperator::Divide);
        map
    };

    /// Keywords that are reserved but have no grammar yet.
    pub static ref UNSUPPORTED_KEYWORDS: Vec<&'static str> =
        vec!["module", "class", "if", "else", "loop", "unsafe", "func"];
}

/// Looks up the binary operator a token stands for, if any.
pub fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    if token.kind != TokenKind::Symbol {
        return None;
    }

    BINARY_OPERATOR_LOOKUP.get(token.lexeme.as_str()).copied()
}

impl BinaryOperator {
    pub fn binding_power(&self) -> BindingPower {
        match self {
            BinaryOperator::Equals => BindingPower::Equality,
            BinaryOperator::Add | BinaryOperator::Subtract => BindingPower::Additive,
            BinaryOperator::Multiply | BinaryOperator::Divide => BindingPower::Multiplicative,
        }
    }
}

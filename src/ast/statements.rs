use std::slice::Iter;

use super::expressions::{Expr, FunctionCall};

/// Root of the tree. Owns every statement; dropping it drops the whole AST.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration(Declaration),
    Assignment(Assignment),
    FunctionCall(FunctionCall),
    Conditional(Conditional),
    /// Always directly follows the `Conditional` it belongs to.
    ConditionalElse(ConditionalElse),
    WhileLoop(WhileLoop),
    FunctionDeclaration(FunctionDeclaration),
    /// Only produced inside a function body, at any depth.
    Return(Return),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub data_type: String,
    pub identifier: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifier: String,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conditional {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalElse {
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub data_type: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Expr,
}

/// Expression
///
/// Literals keep their source text unchanged so that emission is lossless.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Identifier(String),
    Integer(String),
    Float(String),
    /// Includes the surrounding quotes
    String(String),
    Boolean(String),
    Call(FunctionCall),
}

/// Binary Expression
///
/// Every operator shares one precedence level and folds to the left, so
/// `1 + 2 * 3` is `(1 + 2) * 3`. `parenthesized` records that the source
/// wrapped this node in parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub parenthesized: bool,
}

impl BinaryExpr {
    pub fn new(operator: impl Into<String>, left: Expr, right: Expr) -> Self {
        BinaryExpr {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
            parenthesized: false,
        }
    }
}

/// Function Call
///
/// Used both as a statement and as a factor inside expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub identifier: String,
    pub arguments: Vec<Expr>,
}

use crate::lexer::tokens::TokenKind;

/// The statement production selected by a statement's leading token.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtKind {
    Declaration,
    /// Assignment or call, decided by the token after the identifier
    Identifier,
    Conditional,
    Else,
    WhileLoop,
    FunctionDeclaration,
    Return,
    Empty,
    Invalid,
}

/// The kind of block a statement list belongs to.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ScopeKind {
    Program,
    Function,
    Conditional,
    Loop,
}

pub fn classify_stmt(kind: TokenKind) -> StmtKind {
    match kind {
        TokenKind::DataType => StmtKind::Declaration,
        TokenKind::Identifier => StmtKind::Identifier,
        TokenKind::Si => StmtKind::Conditional,
        TokenKind::Sino => StmtKind::Else,
        TokenKind::Mientras => StmtKind::WhileLoop,
        TokenKind::Funcion => StmtKind::FunctionDeclaration,
        TokenKind::Retornar => StmtKind::Return,
        TokenKind::Semicolon => StmtKind::Empty,

        // Reserved but not part of the grammar
        TokenKind::FinSi | TokenKind::FinMientras | TokenKind::FinFuncion | TokenKind::Para => {
            StmtKind::Invalid
        }

        TokenKind::EOF
        | TokenKind::Whitespace
        | TokenKind::Comment
        | TokenKind::BlockComment
        | TokenKind::Boolean
        | TokenKind::Integer
        | TokenKind::Float
        | TokenKind::String
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Comma
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash => StmtKind::Invalid,
    }
}

use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("si", TokenKind::Si);
        map.insert("sino", TokenKind::Sino);
        map.insert("fin_si", TokenKind::FinSi);
        map.insert("mientras", TokenKind::Mientras);
        map.insert("fin_mientras", TokenKind::FinMientras);
        map.insert("para", TokenKind::Para);
        map.insert("funcion", TokenKind::Funcion);
        map.insert("fin_funcion", TokenKind::FinFuncion);
        map.insert("retornar", TokenKind::Retornar);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    EOF,

    // Skipped by `tokenize`, kept by `tokenize_with_trivia`
    Whitespace,
    Comment,
    BlockComment,

    Identifier,
    DataType,
    Boolean,
    Integer,
    Float,
    String,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Comma,
    Semicolon,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    Si,
    Sino,
    FinSi,
    Mientras,
    FinMientras,
    Para,
    Funcion,
    FinFuncion,
    Retornar,
}

impl TokenKind {
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::BlockComment
        )
    }

    /// Arithmetic operators and comparators. They all share one precedence level.
    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Dash
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
        )
    }

    /// How the parser names this kind in an "expected ..." message.
    pub fn describe(&self) -> String {
        let text = match self {
            TokenKind::EOF => "end of input",
            TokenKind::Identifier => "an identifier",
            TokenKind::DataType => "a type name",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenCurly => "`{`",
            TokenKind::CloseCurly => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Assignment => "`=`",
            _ => return format!("{:?}", self),
        };

        String::from(text)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{}, {:?}, {}, {}, {}, {}>",
            self.kind,
            self.value,
            self.span.start.offset,
            self.span.end.offset,
            self.span.start.line,
            self.span.start.column
        )
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn line(&self) -> usize {
        self.span.start.line
    }

    pub fn column(&self) -> usize {
        self.span.start.column
    }

    /// Short human-readable form used in error messages.
    pub fn describe(&self) -> String {
        if self.kind == TokenKind::EOF {
            String::from("end of input")
        } else if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Float,
            TokenKind::Boolean,
            TokenKind::DataType,
        ]) {
            format!("{} `{}`", self.kind, self.value)
        } else {
            format!("`{}`", self.value)
        }
    }
}

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    /// Word-form tokens, classified after a whole identifier run is consumed.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("with", TokenKind::With);
        map.insert("var", TokenKind::LocalVar);
        map.insert("div", TokenKind::EuclDivide);
        map.insert("mod", TokenKind::EuclModulo);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LineFeed,
    End,

    StringLiteral,
    RealLiteral,
    Identifier,

    NotEqual,      // != or <>
    Inferior,      // <
    InferiorEqual, // <=
    Superior,      // >
    SuperiorEqual, // >=
    DoubleEqual,   // ==
    Equal,         // =

    BraceLeft,
    BraceRight,
    ParenthesisLeft,
    ParenthesisRight,

    Dot,
    Comma,
    Semicolon,

    LogicAnd,
    LogicOr,
    LogicXor,

    AccessorLeftArrayValue, // [
    AccessorLeftArrayRef,   // [@
    AccessorLeftDsList,     // [|
    AccessorLeftDsMap,      // [?
    AccessorLeftDsGrid,     // [#
    AccessorRight,          // ]

    Increment,
    Decrement,

    AssignAdd,
    AssignSubtract,
    AssignMultiply,
    AssignDivide,
    AssignAnd,
    AssignOr,
    AssignXor,
    AssignShiftLeft,
    AssignShiftRight,

    Plus,
    Minus,
    Multiply,
    Divide,
    EuclDivide, // div
    EuclModulo, // mod or %

    BitAnd,
    BitOr,
    BitXor,

    // Reserved
    If,
    ElseIf,
    Else,
    For,
    While,
    Do,
    Repeat,
    With,
    LocalVar,
}

impl TokenKind {
    /// Whether tokens of this kind have a text value available through
    /// [`Lexer::value`](super::lexer::Lexer::value).
    pub fn carries_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::RealLiteral
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.kind)
    }
}

/// A token paired with its text value, as collected by
/// [`tokenize`](super::lexer::tokenize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub value: Option<String>,
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} ({:?})", self.token, value),
            None => write!(f, "{}", self.token),
        }
    }
}

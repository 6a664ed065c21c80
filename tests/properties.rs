//! Property tests for operator matching and position tracking.

use gmsc::lexer::{
    cursor::{Cursor, EOF_CHAR},
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};
use proptest::prelude::*;

const COMPOUND_OPERATORS: &[(&str, TokenKind)] = &[
    ("<=", TokenKind::InferiorEqual),
    (">=", TokenKind::SuperiorEqual),
    ("==", TokenKind::DoubleEqual),
    ("!=", TokenKind::NotEqual),
    ("<>", TokenKind::NotEqual),
    ("&&", TokenKind::LogicAnd),
    ("||", TokenKind::LogicOr),
    ("^^", TokenKind::LogicXor),
    ("++", TokenKind::Increment),
    ("--", TokenKind::Decrement),
    ("+=", TokenKind::AssignAdd),
    ("-=", TokenKind::AssignSubtract),
    ("*=", TokenKind::AssignMultiply),
    ("/=", TokenKind::AssignDivide),
    ("&=", TokenKind::AssignAnd),
    ("|=", TokenKind::AssignOr),
    ("^=", TokenKind::AssignXor),
    ("<<=", TokenKind::AssignShiftLeft),
    (">>=", TokenKind::AssignShiftRight),
];

proptest! {
    #[test]
    fn compound_operators_are_single_tokens(
        (op, kind) in prop::sample::select(COMPOUND_OPERATORS),
        left in "v_[a-z0-9]{0,6}",
        right in "v_[a-z0-9]{0,6}",
        spaced in any::<bool>(),
    ) {
        let gap = if spaced { " " } else { "" };
        let source = format!("{left}{gap}{op}{gap}{right}");

        let kinds: Vec<_> = tokenize(&source)
            .unwrap()
            .into_iter()
            .map(|lexeme| lexeme.token.kind)
            .collect();

        prop_assert_eq!(
            kinds,
            vec![TokenKind::Identifier, kind, TokenKind::Identifier, TokenKind::End]
        );
    }

    #[test]
    fn cursor_counts_lines_and_columns(source in "[a-z \t\n]{0,64}") {
        let mut cursor = Cursor::new(&source);
        while cursor.bump().unwrap() != EOF_CHAR {}

        let lines = 1 + source.matches('\n').count() as u32;
        let last_line = source.rsplit('\n').next().unwrap_or("");

        prop_assert_eq!(cursor.line(), lines);
        prop_assert_eq!(cursor.column(), last_line.chars().count() as u32);
    }

    #[test]
    fn end_token_repeats(source in "[a-z0-9 \n+*-]{0,40}", extra in 1usize..5) {
        let mut lexer = Lexer::new(&source);
        while lexer.next_token().unwrap().kind != TokenKind::End {}

        for _ in 0..extra {
            prop_assert_eq!(lexer.next_token().unwrap().kind, TokenKind::End);
        }
    }
}

use lazy_static::lazy_static;

use super::tokens::TokenKind;

/// Size of the lookahead window handed to the matcher, in characters. Every
/// pattern in the table must fit in it.
pub const LOOKAHEAD: usize = 4;

lazy_static! {
    pub static ref SYMBOL_TABLE: SymbolTable = SymbolTable::new(&[
        ("\n", TokenKind::LineFeed),

        ("!=", TokenKind::NotEqual),
        ("<>", TokenKind::NotEqual),
        ("<", TokenKind::Inferior),
        ("<=", TokenKind::InferiorEqual),
        (">", TokenKind::Superior),
        (">=", TokenKind::SuperiorEqual),
        ("==", TokenKind::DoubleEqual),
        ("=", TokenKind::Equal),

        ("{", TokenKind::BraceLeft),
        ("}", TokenKind::BraceRight),
        ("(", TokenKind::ParenthesisLeft),
        (")", TokenKind::ParenthesisRight),

        (".", TokenKind::Dot),
        (",", TokenKind::Comma),
        (";", TokenKind::Semicolon),

        ("&&", TokenKind::LogicAnd),
        ("||", TokenKind::LogicOr),
        ("^^", TokenKind::LogicXor),

        ("[@", TokenKind::AccessorLeftArrayRef),
        ("[|", TokenKind::AccessorLeftDsList),
        ("[?", TokenKind::AccessorLeftDsMap),
        ("[#", TokenKind::AccessorLeftDsGrid),
        ("[", TokenKind::AccessorLeftArrayValue),
        ("]", TokenKind::AccessorRight),

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

        ("+", TokenKind::Plus),
        ("-", TokenKind::Minus),
        ("*", TokenKind::Multiply),
        ("/", TokenKind::Divide),
        ("%", TokenKind::EuclModulo),

        ("&", TokenKind::BitAnd),
        ("|", TokenKind::BitOr),
        ("^", TokenKind::BitXor),
    ]);
}

/// Fixed-pattern lookup for punctuation and operators.
///
/// Entries are kept ordered by descending pattern length, so the first match
/// in a linear scan is always the longest one (maximal munch) regardless of
/// the order the patterns were declared in.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<(&'static str, TokenKind)>,
}

impl SymbolTable {
    pub fn new(patterns: &[(&'static str, TokenKind)]) -> SymbolTable {
        let mut entries = patterns.to_vec();
        // Stable, so patterns of equal length keep their declared priority.
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        SymbolTable { entries }
    }

    pub fn entries(&self) -> &[(&'static str, TokenKind)] {
        &self.entries
    }

    /// Returns the kind and byte length of the longest pattern that prefixes
    /// `window`.
    pub fn longest_match(&self, window: &str) -> Option<(TokenKind, usize)> {
        self.entries
            .iter()
            .find(|(pattern, _)| window.starts_with(*pattern))
            .map(|(pattern, kind)| (*kind, pattern.len()))
    }

    /// Finds a pair `(earlier, later)` where the earlier entry is a strict
    /// prefix of the later one and would therefore make it unreachable.
    pub fn find_shadowed(&self) -> Option<(&'static str, &'static str)> {
        for (i, (later, _)) in self.entries.iter().enumerate() {
            for (earlier, _) in &self.entries[..i] {
                if earlier.len() < later.len() && later.starts_with(*earlier) {
                    return Some((*earlier, *later));
                }
            }
        }

        None
    }
}

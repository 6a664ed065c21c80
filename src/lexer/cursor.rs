use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::symbols::LOOKAHEAD;

/// Sentinel returned once the input is exhausted.
pub const EOF_CHAR: char = '\0';

pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_line_end(c: char) -> bool {
    c == '\n' || c == EOF_CHAR
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_alphanum(c: char) -> bool {
    is_digit(c) || is_alpha(c)
}

pub fn is_numeral(c: char) -> bool {
    is_digit(c) || c == '.'
}

pub fn is_identifier_begin(c: char) -> bool {
    is_alpha(c) || c == '_'
}

pub fn is_identifier(c: char) -> bool {
    is_alphanum(c) || c == '_'
}

/// Read position into a borrowed source buffer.
///
/// Lines start at 1. The column counts the characters consumed on the current
/// line, so it is 0 right after a line feed and equals the 1-based column of
/// the last consumed character otherwise.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
    reached_end: bool,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Cursor<'a> {
        Cursor {
            source,
            pos: 0,
            line: 1,
            column: 0,
            reached_end: false,
        }
    }

    /// Consumes one character, or returns [`EOF_CHAR`] the first time the end
    /// of input is hit. Any read after that is an [`ErrorImpl::EofMisuse`].
    pub fn bump(&mut self) -> Result<char, Error> {
        if self.reached_end {
            return Err(Error::new(ErrorImpl::EofMisuse, self.location()));
        }

        let Some(c) = self.rest().chars().next() else {
            self.reached_end = true;
            return Ok(EOF_CHAR);
        };

        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Ok(c)
    }

    pub fn bump_n(&mut self, n: usize) -> Result<(), Error> {
        for _ in 0..n {
            self.bump()?;
        }
        Ok(())
    }

    /// Consumes characters while `predicate` holds and returns the consumed
    /// slice. Never reads past the last character.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> Result<&'a str, Error> {
        let start = self.pos;
        while !self.is_eof() && predicate(self.first()) {
            self.bump()?;
        }
        Ok(&self.source[start..self.pos])
    }

    /// Next character without consuming it, [`EOF_CHAR`] at the end.
    pub fn first(&self) -> char {
        self.nth(0)
    }

    pub fn second(&self) -> char {
        self.nth(1)
    }

    pub fn nth(&self, n: usize) -> char {
        self.rest().chars().nth(n).unwrap_or(EOF_CHAR)
    }

    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Up to [`LOOKAHEAD`] characters starting at the read position.
    pub fn window(&self) -> &'a str {
        let rest = self.rest();
        match rest.char_indices().nth(LOOKAHEAD) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// True when no characters remain, whether or not the sentinel was read.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn reached_end(&self) -> bool {
        self.reached_end
    }

    /// Position of the next character to be consumed.
    pub fn location(&self) -> Position {
        Position::new(self.line, self.column + 1)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset just past the last consumed character.
    pub fn offset(&self) -> usize {
        self.pos
    }
}

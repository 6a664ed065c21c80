use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    cursor::{is_identifier, is_identifier_begin, is_line_end, is_numeral, is_whitespace, Cursor},
    symbols::SYMBOL_TABLE,
    tokens::{Lexeme, Token, TokenKind, RESERVED_LOOKUP},
};

lazy_static! {
    static ref IDENTIFIER_RUN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMERAL_RUN: Regex = Regex::new("^[0-9.]+").unwrap();
}

/// Pull-based tokenizer over a borrowed source buffer.
///
/// Each call to [`Lexer::next_token`] yields exactly one token. The text of
/// identifiers, string literals and real literals is kept aside and read with
/// [`Lexer::value`] until the next call.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    last_token: Token,
    last_value: String,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            cursor: Cursor::new(source),
            last_token: MK_TOKEN!(TokenKind::End, Position::null()),
            last_value: String::new(),
        }
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.last_value.clear();

        match self.scan_token() {
            Ok(token) => {
                trace!(kind = %token.kind, line = token.line, column = token.column, "token");
                self.last_token = token;
                Ok(token)
            }
            Err(error) => {
                debug!(error = %error, "lexing failed");
                Err(error)
            }
        }
    }

    pub fn last_token(&self) -> Token {
        self.last_token
    }

    /// Text of the last token if it is an identifier or a literal, empty
    /// otherwise. String literals are already unescaped.
    pub fn value(&self) -> &str {
        &self.last_value
    }

    pub fn line(&self) -> u32 {
        self.last_token.line
    }

    pub fn column(&self) -> u32 {
        self.last_token.column
    }

    /// Byte offset just past the last consumed character, for parsers that
    /// resynchronize by scanning the source themselves.
    pub fn source_position(&self) -> usize {
        self.cursor.offset()
    }

    fn scan_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.cursor.reached_end() {
                return Ok(MK_TOKEN!(TokenKind::End, self.cursor.location()));
            }

            self.cursor.eat_while(is_whitespace)?;
            let start = self.cursor.location();

            if self.cursor.is_eof() {
                self.cursor.bump()?;
                return Ok(MK_TOKEN!(TokenKind::End, start));
            }

            match (self.cursor.first(), self.cursor.second()) {
                ('/', '/') => {
                    self.cursor.eat_while(|c| !is_line_end(c))?;
                    continue;
                }
                ('/', '*') => {
                    self.skip_block_comment(start)?;
                    continue;
                }
                ('"' | '\'', _) => return self.string_literal(start),
                ('$', _) => {
                    return Err(Error::new(
                        ErrorImpl::UnsupportedFeature {
                            feature: String::from("Hex color literals"),
                        },
                        start,
                    ))
                }
                _ => {}
            }

            if let Some((kind, len)) = SYMBOL_TABLE.longest_match(self.cursor.window()) {
                self.cursor.bump_n(len)?;
                return Ok(MK_TOKEN!(kind, start));
            }

            let c = self.cursor.first();
            if is_numeral(c) {
                return self.real_literal(start);
            }
            if is_identifier_begin(c) {
                return self.identifier(start);
            }

            return Err(Error::new(ErrorImpl::UnknownToken { token: c }, start));
        }
    }

    fn skip_block_comment(&mut self, start: Position) -> Result<(), Error> {
        self.cursor.bump_n(2)?;

        loop {
            if self.cursor.is_eof() {
                return Err(Error::new(ErrorImpl::UnterminatedComment, start));
            }
            if self.cursor.first() == '*' && self.cursor.second() == '/' {
                return self.cursor.bump_n(2);
            }
            self.cursor.bump()?;
        }
    }

    fn string_literal(&mut self, start: Position) -> Result<Token, Error> {
        // GML accepts both "abc" and 'abc'; only the opening quote closes.
        let delimiter = self.cursor.bump()?;
        let unterminated = move || Error::new(ErrorImpl::UnterminatedString { delimiter }, start);

        loop {
            if self.cursor.is_eof() {
                return Err(unterminated());
            }

            match self.cursor.bump()? {
                c if c == delimiter => break,
                '\\' => {
                    if self.cursor.is_eof() {
                        return Err(unterminated());
                    }

                    match self.cursor.bump()? {
                        c if c == delimiter => self.last_value.push(delimiter),
                        'n' => self.last_value.push('\n'),
                        '#' => self.last_value.push('#'),
                        c => {
                            self.last_value.push('\\');
                            self.last_value.push(c);
                        }
                    }
                }
                // Legacy line break.
                '#' => self.last_value.push('\n'),
                c => self.last_value.push(c),
            }
        }

        Ok(MK_TOKEN!(TokenKind::StringLiteral, start))
    }

    fn real_literal(&mut self, start: Position) -> Result<Token, Error> {
        let Some(run) = NUMERAL_RUN.find(self.cursor.rest()) else {
            return Err(Error::new(
                ErrorImpl::UnknownToken {
                    token: self.cursor.first(),
                },
                start,
            ));
        };

        self.last_value.push_str(run.as_str());
        self.cursor.bump_n(run.len())?;

        Ok(MK_TOKEN!(TokenKind::RealLiteral, start))
    }

    fn identifier(&mut self, start: Position) -> Result<Token, Error> {
        let Some(run) = IDENTIFIER_RUN.find(self.cursor.rest()) else {
            return Err(Error::new(
                ErrorImpl::UnknownToken {
                    token: self.cursor.first(),
                },
                start,
            ));
        };
        let word = run.as_str();
        self.cursor.bump_n(word.len())?;

        let kind = match RESERVED_LOOKUP.get(word) {
            Some(TokenKind::Else) => {
                if self.eat_trailing_if()? {
                    TokenKind::ElseIf
                } else {
                    TokenKind::Else
                }
            }
            Some(kind) => *kind,
            None => {
                self.last_value.push_str(word);
                TokenKind::Identifier
            }
        };

        Ok(MK_TOKEN!(kind, start))
    }

    /// Consumes `<blanks>if` after an `else` when `if` is a whole word.
    fn eat_trailing_if(&mut self) -> Result<bool, Error> {
        let rest = self.cursor.rest();
        let blanks = rest.chars().take_while(|c| is_whitespace(*c)).count();
        if blanks == 0 || !rest[blanks..].starts_with("if") {
            return Ok(false);
        }
        if rest[blanks + 2..].chars().next().is_some_and(is_identifier) {
            return Ok(false);
        }

        self.cursor.bump_n(blanks + 2)?;
        Ok(true)
    }
}

/// Drains a fresh lexer over `source`, up to and including the End token.
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, Error> {
    let mut lex = Lexer::new(source);
    let mut lexemes = vec![];

    loop {
        let token = lex.next_token()?;
        let value = token.kind.carries_value().then(|| lex.value().to_string());
        lexemes.push(Lexeme { token, value });

        if token.kind == TokenKind::End {
            break;
        }
    }

    debug!(count = lexemes.len(), "tokenized source");
    Ok(lexemes)
}

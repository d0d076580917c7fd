//! Integer literal scanning.

use std::io::Read;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
    /// Scans an integer literal: a maximal run of `[0-9]`.
    ///
    /// The lexeme keeps the digit text; conversion to a numeric value is
    /// the parser's job.
    pub(crate) fn scan_number(&mut self) -> Token {
        let mut text = String::new();
        while self.cursor.current_byte().is_ascii_digit() {
            text.push(self.cursor.current_byte() as char);
            self.cursor.advance();
        }
        self.make_token(TokenKind::Integer, text)
    }
}

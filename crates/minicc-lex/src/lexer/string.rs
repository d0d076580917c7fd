//! String and character literal scanning.
//!
//! The two literal forms store different things. A character literal
//! decodes its escape sequence: the lexeme of `'\n'` is the single byte
//! 0x0A. A string literal keeps the raw bytes between the quotes: the
//! lexeme of `"a\n"` is the three bytes `a`, `\`, `n`. Downstream
//! consumers decode string escapes if and when they need to.

use std::io::Read;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
    /// Scans a character literal: exactly one source character between
    /// single quotes, with backslash escapes for `n t r 0 \ ' "`.
    pub(crate) fn scan_character(&mut self) -> Token {
        self.cursor.advance(); // opening quote

        let value: u8 = if self.cursor.current_byte() == b'\\' {
            self.cursor.advance();
            let decoded = match self.cursor.current_byte() {
                b'n' => b'\n',
                b't' => b'\t',
                b'r' => b'\r',
                b'0' => 0,
                b'\\' => b'\\',
                b'\'' => b'\'',
                b'"' => b'"',
                _ => {
                    self.report_error("Invalid escape sequence");
                    return self.make_token(TokenKind::Error, "Invalid escape sequence");
                },
            };
            self.cursor.advance();
            decoded
        } else {
            let b = self.cursor.current_byte();
            self.cursor.advance();
            b
        };

        if self.cursor.current_byte() != b'\'' {
            self.report_error("Unterminated character literal");
            return self.make_token(TokenKind::Error, "Unterminated character literal");
        }
        self.cursor.advance(); // closing quote

        self.make_token(TokenKind::Character, (value as char).to_string())
    }

    /// Scans a string literal: raw bytes up to the next unescaped `"`.
    ///
    /// A backslash consumes the following byte verbatim; both bytes land in
    /// the lexeme untranslated. End of input before the closing quote is an
    /// error.
    pub(crate) fn scan_string(&mut self) -> Token {
        self.cursor.advance(); // opening quote

        let mut value = String::new();
        loop {
            let b = self.cursor.current_byte();
            if b == b'"' || b == 0 {
                break;
            }
            if b == b'\\' {
                value.push('\\');
                self.cursor.advance();
                let next = self.cursor.current_byte();
                if next == 0 {
                    break;
                }
                value.push(next as char);
                self.cursor.advance();
            } else {
                value.push(b as char);
                self.cursor.advance();
            }
        }

        if self.cursor.current_byte() == 0 {
            self.report_error("Unterminated string literal");
            return self.make_token(TokenKind::Error, "Unterminated string literal");
        }
        self.cursor.advance(); // closing quote

        self.make_token(TokenKind::String, value)
    }
}

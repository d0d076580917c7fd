//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the single-token window the
//! parser looks through, and the per-byte dispatch.

use std::io::Read;

use minicc_util::{Handler, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the minicc source language.
///
/// The lexer owns the input cursor and holds exactly one scanned token at a
/// time. `peek` inspects that token; `advance` discards it and scans the
/// next. Construction scans immediately, so `peek` is valid from the start.
/// Advancing past end of input keeps yielding `EOF` tokens.
pub struct Lexer<'a, R: Read> {
    /// Byte cursor over the input stream.
    pub(crate) cursor: Cursor<R>,

    /// Shared diagnostic handler.
    pub(crate) handler: &'a Handler,

    /// Line where the token being scanned starts (1-based).
    pub(crate) token_line: u32,

    /// Column where the token being scanned starts (1-based).
    pub(crate) token_column: u32,

    /// The single-token window.
    current: Token,
}

impl<'a, R: Read> Lexer<'a, R> {
    /// Creates a lexer over the given byte stream and scans the first
    /// token.
    pub fn new(reader: R, handler: &'a Handler) -> Self {
        let mut lexer = Self {
            cursor: Cursor::new(reader),
            handler,
            token_line: 1,
            token_column: 1,
            current: Token::new(TokenKind::Error, "", 1, 1),
        };
        lexer.advance();
        lexer
    }

    /// Returns the current token without consuming it.
    pub fn peek(&self) -> &Token {
        &self.current
    }

    /// Replaces the current token with the next one from the input.
    pub fn advance(&mut self) {
        self.current = self.scan();
    }

    /// Scans the next token from the input.
    ///
    /// Skips whitespace and comments, records the token start position,
    /// then dispatches on the first significant byte.
    fn scan(&mut self) -> Token {
        self.skip_whitespace();
        while self.cursor.current_byte() == b'/' && matches!(self.cursor.peek_byte(), b'/' | b'*') {
            self.skip_comment();
            self.skip_whitespace();
        }

        self.token_line = self.cursor.line();
        self.token_column = self.cursor.column();

        match self.cursor.current_byte() {
            0 => self.make_token(TokenKind::Eof, "EOF"),
            b'\'' => self.scan_character(),
            b'"' => self.scan_string(),
            b if b.is_ascii_alphabetic() || b == b'_' => self.scan_identifier(),
            b if b.is_ascii_digit() => self.scan_number(),
            _ => self.scan_operator(),
        }
    }

    /// Builds a token positioned at the recorded token start.
    pub(crate) fn make_token(&self, kind: TokenKind, lexeme: impl Into<String>) -> Token {
        Token::new(kind, lexeme, self.token_line, self.token_column)
    }

    /// Reports a lexical error at the cursor's current position.
    pub(crate) fn report_error(&self, message: impl Into<String>) {
        self.handler
            .report_at(Span::new(self.cursor.line(), self.cursor.column()), message);
    }
}

impl<'a, R: Read> Iterator for Lexer<'a, R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.current.kind == TokenKind::Eof {
            return None;
        }
        let token = self.current.clone();
        self.advance();
        Some(token)
    }
}

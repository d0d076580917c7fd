//! Identifier and keyword scanning.

use std::io::Read;

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
    /// Scans an identifier or keyword: a maximal run of `[A-Za-z0-9_]`.
    ///
    /// The lexeme is accumulated byte by byte, so identifiers spanning a
    /// buffer refill come out whole.
    pub(crate) fn scan_identifier(&mut self) -> Token {
        let mut text = String::new();
        loop {
            let b = self.cursor.current_byte();
            if !(b.is_ascii_alphanumeric() || b == b'_') {
                break;
            }
            text.push(b as char);
            self.cursor.advance();
        }

        let kind = keyword_from_ident(&text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};
    use minicc_util::Handler;

    fn first(source: &str) -> Token {
        let handler = Handler::new();
        let lexer = Lexer::new(source.as_bytes(), &handler);
        lexer.peek().clone()
    }

    #[test]
    fn test_simple_identifier() {
        let t = first("foo");
        assert_eq!(t.kind, TokenKind::Identifier);
        assert_eq!(t.lexeme, "foo");
    }

    #[test]
    fn test_identifier_with_digits_and_underscores() {
        let t = first("_foo_bar123");
        assert_eq!(t.kind, TokenKind::Identifier);
        assert_eq!(t.lexeme, "_foo_bar123");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(first("int").kind, TokenKind::Int);
        assert_eq!(first("char").kind, TokenKind::Char);
        assert_eq!(first("void").kind, TokenKind::Void);
        assert_eq!(first("if").kind, TokenKind::If);
        assert_eq!(first("else").kind, TokenKind::Else);
        assert_eq!(first("while").kind, TokenKind::While);
        assert_eq!(first("for").kind, TokenKind::For);
        assert_eq!(first("return").kind, TokenKind::Return);
    }

    #[test]
    fn test_keyword_lexemes_materialized() {
        let t = first("return");
        assert_eq!(t.lexeme, "return");
    }

    #[test]
    fn test_keyword_prefix_is_one_identifier() {
        // Maximal munch: a keyword at the start of a longer word is not
        // split off.
        let t = first("ifx");
        assert_eq!(t.kind, TokenKind::Identifier);
        assert_eq!(t.lexeme, "ifx");
    }

    #[test]
    fn test_case_sensitive_keywords() {
        assert_eq!(first("If").kind, TokenKind::Identifier);
        assert_eq!(first("INT").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_identifier_cannot_start_with_digit() {
        let handler = Handler::new();
        let kinds: Vec<_> = Lexer::new(&b"1abc"[..], &handler).map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TokenKind::Integer, TokenKind::Identifier]);
    }
}

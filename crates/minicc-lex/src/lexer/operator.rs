//! Operator and punctuation scanning.
//!
//! Every case here is driven by the byte already under the cursor plus at
//! most one byte of lookahead.

use std::io::Read;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
    /// Scans an operator or punctuation token.
    ///
    /// Handles the two-variant heads (`+`/`++`, `-`/`--`, `=`/`==`,
    /// `!`/`!=`, `&`/`&&`, `|`/`||`), the three-variant heads
    /// (`<`/`<=`/`<<`, `>`/`>=`/`>>`), the single-byte operators
    /// `* / % ^ ~` and punctuation `; : , . ( ) { } [ ] #`. Any other
    /// byte is an unexpected-character error consumed one byte at a time.
    pub(crate) fn scan_operator(&mut self) -> Token {
        let b = self.cursor.current_byte();
        match b {
            b'+' => {
                self.cursor.advance();
                if self.cursor.match_byte(b'+') {
                    self.make_token(TokenKind::Inc, "++")
                } else {
                    self.make_token(TokenKind::Plus, "+")
                }
            },
            b'-' => {
                self.cursor.advance();
                if self.cursor.match_byte(b'-') {
                    self.make_token(TokenKind::Dec, "--")
                } else {
                    self.make_token(TokenKind::Minus, "-")
                }
            },
            b'=' => {
                self.cursor.advance();
                if self.cursor.match_byte(b'=') {
                    self.make_token(TokenKind::Eq, "==")
                } else {
                    self.make_token(TokenKind::Assign, "=")
                }
            },
            b'!' => {
                self.cursor.advance();
                if self.cursor.match_byte(b'=') {
                    self.make_token(TokenKind::Neq, "!=")
                } else {
                    self.make_token(TokenKind::Not, "!")
                }
            },
            b'<' => {
                self.cursor.advance();
                if self.cursor.match_byte(b'=') {
                    self.make_token(TokenKind::Lte, "<=")
                } else if self.cursor.match_byte(b'<') {
                    self.make_token(TokenKind::Shl, "<<")
                } else {
                    self.make_token(TokenKind::Lt, "<")
                }
            },
            b'>' => {
                self.cursor.advance();
                if self.cursor.match_byte(b'=') {
                    self.make_token(TokenKind::Gte, ">=")
                } else if self.cursor.match_byte(b'>') {
                    self.make_token(TokenKind::Shr, ">>")
                } else {
                    self.make_token(TokenKind::Gt, ">")
                }
            },
            b'&' => {
                self.cursor.advance();
                if self.cursor.match_byte(b'&') {
                    self.make_token(TokenKind::And, "&&")
                } else {
                    self.make_token(TokenKind::BitAnd, "&")
                }
            },
            b'|' => {
                self.cursor.advance();
                if self.cursor.match_byte(b'|') {
                    self.make_token(TokenKind::Or, "||")
                } else {
                    self.make_token(TokenKind::BitOr, "|")
                }
            },
            b'*' => {
                self.cursor.advance();
                self.make_token(TokenKind::Star, "*")
            },
            b'/' => {
                self.cursor.advance();
                self.make_token(TokenKind::Slash, "/")
            },
            b'%' => {
                self.cursor.advance();
                self.make_token(TokenKind::Percent, "%")
            },
            b'^' => {
                self.cursor.advance();
                self.make_token(TokenKind::BitXor, "^")
            },
            b'~' => {
                self.cursor.advance();
                self.make_token(TokenKind::BitNot, "~")
            },
            b';' => {
                self.cursor.advance();
                self.make_token(TokenKind::Semicolon, ";")
            },
            b':' => {
                self.cursor.advance();
                self.make_token(TokenKind::Colon, ":")
            },
            b',' => {
                self.cursor.advance();
                self.make_token(TokenKind::Comma, ",")
            },
            b'.' => {
                self.cursor.advance();
                self.make_token(TokenKind::Dot, ".")
            },
            b'(' => {
                self.cursor.advance();
                self.make_token(TokenKind::LParen, "(")
            },
            b')' => {
                self.cursor.advance();
                self.make_token(TokenKind::RParen, ")")
            },
            b'{' => {
                self.cursor.advance();
                self.make_token(TokenKind::LBrace, "{")
            },
            b'}' => {
                self.cursor.advance();
                self.make_token(TokenKind::RBrace, "}")
            },
            b'[' => {
                self.cursor.advance();
                self.make_token(TokenKind::LBracket, "[")
            },
            b']' => {
                self.cursor.advance();
                self.make_token(TokenKind::RBracket, "]")
            },
            b'#' => {
                self.cursor.advance();
                self.make_token(TokenKind::Pound, "#")
            },
            _ => {
                let message = format!("Unexpected character: '{}'", b as char);
                self.report_error(message.clone());
                self.cursor.advance();
                self.make_token(TokenKind::Error, message)
            },
        }
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

    fn kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(source.as_bytes(), &handler)
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_single_char_operators() {
        assert_eq!(first("+").kind, TokenKind::Plus);
        assert_eq!(first("-").kind, TokenKind::Minus);
        assert_eq!(first("*").kind, TokenKind::Star);
        assert_eq!(first("/").kind, TokenKind::Slash);
        assert_eq!(first("%").kind, TokenKind::Percent);
        assert_eq!(first("=").kind, TokenKind::Assign);
        assert_eq!(first("!").kind, TokenKind::Not);
        assert_eq!(first("<").kind, TokenKind::Lt);
        assert_eq!(first(">").kind, TokenKind::Gt);
        assert_eq!(first("&").kind, TokenKind::BitAnd);
        assert_eq!(first("|").kind, TokenKind::BitOr);
        assert_eq!(first("^").kind, TokenKind::BitXor);
        assert_eq!(first("~").kind, TokenKind::BitNot);
    }

    #[test]
    fn test_double_char_operators() {
        assert_eq!(first("++").kind, TokenKind::Inc);
        assert_eq!(first("--").kind, TokenKind::Dec);
        assert_eq!(first("==").kind, TokenKind::Eq);
        assert_eq!(first("!=").kind, TokenKind::Neq);
        assert_eq!(first("<=").kind, TokenKind::Lte);
        assert_eq!(first(">=").kind, TokenKind::Gte);
        assert_eq!(first("<<").kind, TokenKind::Shl);
        assert_eq!(first(">>").kind, TokenKind::Shr);
        assert_eq!(first("&&").kind, TokenKind::And);
        assert_eq!(first("||").kind, TokenKind::Or);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(first(";").kind, TokenKind::Semicolon);
        assert_eq!(first(":").kind, TokenKind::Colon);
        assert_eq!(first(",").kind, TokenKind::Comma);
        assert_eq!(first(".").kind, TokenKind::Dot);
        assert_eq!(first("(").kind, TokenKind::LParen);
        assert_eq!(first(")").kind, TokenKind::RParen);
        assert_eq!(first("{").kind, TokenKind::LBrace);
        assert_eq!(first("}").kind, TokenKind::RBrace);
        assert_eq!(first("[").kind, TokenKind::LBracket);
        assert_eq!(first("]").kind, TokenKind::RBracket);
        assert_eq!(first("#").kind, TokenKind::Pound);
    }

    #[test]
    fn test_operator_lexemes_materialized() {
        assert_eq!(first("<=").lexeme, "<=");
        assert_eq!(first(";").lexeme, ";");
    }

    #[test]
    fn test_adjacent_operators_split_greedily() {
        // `+++` is `++` then `+`, by one-byte lookahead.
        assert_eq!(kinds("+++"), vec![TokenKind::Inc, TokenKind::Plus]);
        assert_eq!(kinds("===") , vec![TokenKind::Eq, TokenKind::Assign]);
        assert_eq!(kinds("<<="), vec![TokenKind::Shl, TokenKind::Assign]);
    }

    #[test]
    fn test_unexpected_character() {
        let handler = Handler::new();
        let tokens: Vec<Token> = Lexer::new(&b"$"[..], &handler).collect();
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].lexeme, "Unexpected character: '$'");
        assert_eq!(handler.error_count(), 1);
    }
}

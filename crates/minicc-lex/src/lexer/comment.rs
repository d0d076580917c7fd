//! Whitespace and comment skipping.

use std::io::Read;

use crate::Lexer;

impl<'a, R: Read> Lexer<'a, R> {
    /// Skips spaces, tabs, carriage returns, and newlines.
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.cursor.current_byte(), b' ' | b'\t' | b'\r' | b'\n') {
            self.cursor.advance();
        }
    }

    /// Skips one comment.
    ///
    /// The caller has already established that the cursor sits on `/`
    /// followed by `/` or `*`. A block comment running to end of input
    /// reports "Unterminated multi-line comment".
    pub(crate) fn skip_comment(&mut self) {
        if self.cursor.peek_byte() == b'/' {
            self.cursor.advance();
            self.cursor.advance();
            while !matches!(self.cursor.current_byte(), b'\n' | 0) {
                self.cursor.advance();
            }
            if self.cursor.current_byte() == b'\n' {
                self.cursor.advance();
            }
        } else {
            self.cursor.advance();
            self.cursor.advance();
            while !(self.cursor.current_byte() == b'*' && self.cursor.peek_byte() == b'/')
                && self.cursor.current_byte() != 0
            {
                self.cursor.advance();
            }
            if self.cursor.current_byte() != 0 {
                self.cursor.advance();
                self.cursor.advance();
            } else {
                self.report_error("Unterminated multi-line comment");
            }
        }
    }
}

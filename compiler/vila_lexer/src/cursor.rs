//! Character cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! The cursor decodes one `char` at a time and caches it, so repeated
//! `current()` calls are free. Position is tracked three ways: byte offset
//! into the full input (for spans), and 1-based line/column (for tokens
//! and diagnostics). Columns count characters, not bytes.
//!
//! # End of Input
//!
//! `current()` returns `None` once decoding stops. That happens either at
//! the true end of input ([`is_eof`](Cursor::is_eof)) or at a malformed
//! UTF-8 sequence ([`malformed_byte`](Cursor::malformed_byte)). Advancing
//! with no current character is a no-op, so the cursor can never move past
//! the end.

use crate::token::Position;

/// Cursor over decodable source text.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    /// Full input bytes (for reporting the malformed byte).
    bytes: &'a [u8],
    /// Decodable text.
    text: &'a str,
    /// Byte offset of `text` within `bytes`.
    base: u32,
    /// Current read index into `text`.
    idx: usize,
    /// Decoded character at `idx`, `None` when decoding has stopped.
    current: Option<char>,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8], text: &'a str, base: u32) -> Self {
        debug_assert!(
            base as usize + text.len() <= bytes.len(),
            "text must lie within the input bytes"
        );
        Self {
            bytes,
            text,
            base,
            idx: 0,
            current: text.chars().next(),
            line: Position::START.line,
            column: Position::START.column,
        }
    }

    /// The character under the cursor.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns `true` if the current character satisfies `pred`.
    #[inline]
    pub fn current_is(&self, pred: impl Fn(char) -> bool) -> bool {
        self.current.is_some_and(pred)
    }

    /// Decode the character `n` positions past the current one without
    /// consuming anything. `peek(0)` is the current character.
    ///
    /// Returns `None` past the end of the decodable text.
    pub fn peek(&self, n: usize) -> Option<char> {
        self.text[self.idx..].chars().nth(n)
    }

    /// Move past the current character.
    ///
    /// A newline moves to column 1 of the next line; anything else moves
    /// one column right. No-op when there is no current character.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.current else {
            return;
        };
        self.idx += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.current = self.text[self.idx..].chars().next();
    }

    /// Advance while `pred` returns `true` for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.current_is(&pred) {
            self.advance();
        }
    }

    /// Skip forward to the next `\n` (not consumed) or the end of the
    /// decodable text, whichever comes first.
    ///
    /// Uses memchr for the scan; the column is advanced by the number of
    /// characters skipped. The line does not change since no newline is
    /// crossed.
    pub fn eat_until_newline(&mut self) {
        let remaining = &self.text[self.idx..];
        let offset = memchr::memchr(b'\n', remaining.as_bytes()).unwrap_or(remaining.len());
        let skipped = &remaining[..offset];
        self.column += u32::try_from(skipped.chars().count()).unwrap_or(u32::MAX);
        self.idx += offset;
        self.current = self.text[self.idx..].chars().next();
    }

    /// Returns `true` at the true end of input.
    ///
    /// A cursor stopped at a malformed sequence is not at EOF: there are
    /// bytes left, they just cannot be decoded.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current.is_none() && self.malformed_byte().is_none()
    }

    /// The first byte of the malformed sequence the cursor is stopped at.
    pub fn malformed_byte(&self) -> Option<u8> {
        if self.current.is_some() {
            return None;
        }
        self.bytes.get(self.pos() as usize).copied()
    }

    /// Current byte offset in the full input.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.base + u32::try_from(self.idx).unwrap_or(u32::MAX - self.base)
    }

    /// Current line and column.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

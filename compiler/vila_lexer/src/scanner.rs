//! Hand-written scanner producing [`Token`] values.
//!
//! # Design
//!
//! Each call to [`Tokenizer::next_token`] skips layout and comments, then
//! classifies the current character in priority order and hands off to a
//! focused recognizer. Recognizers consume through `bump`,
//! which records the character in the accumulation buffer unless it is
//! layout; emitting a token drains the buffer, so nothing leaks from one
//! token into the next.
//!
//! ```text
//! SkippingLayout -> Dispatching -> Number | Identifier | String
//!                                | Character | Operator | Separator
//!                                -> SkippingLayout ...
//!                  Dispatching -> Halted (unrecognized character)
//! ```
//!
//! Every pass ends with exactly one EOF token, including passes that halt
//! on an error.

use std::mem;

use tracing::{debug, trace};

use crate::classify::{
    is_digit, is_identifier_start, is_layout, is_letter_or_digit, is_number_start, is_operator,
    is_separator, CHAR_DELIMITER, COMMENT_MARKER, DECIMAL_POINT, STRING_DELIMITER, UNDERSCORE,
};
use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorContext, LexFailure};
use crate::source_buffer::SourceBuffer;
use crate::token::{Span, Token, TokenKind, TokenStream};

/// Driver state between tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ScanState {
    /// More tokens may follow.
    Running,
    /// The EOF token has been produced.
    Exhausted,
    /// An error stopped the pass; later calls repeat it.
    Halted(LexError),
}

/// Tokenizer state for one lexing pass.
///
/// Owns its cursor, buffer, and driver state; nothing is shared between
/// passes. Drive it with [`run`](Self::run) for a whole stream, or use it
/// as an iterator for one token at a time.
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    /// Text consumed for the token currently being built.
    buffer: String,
    state: ScanState,
}

impl<'a> Tokenizer<'a> {
    /// Bind a tokenizer to `source`, positioned at line 1, column 1.
    pub fn new(source: &SourceBuffer<'a>) -> Self {
        Self {
            cursor: source.cursor(),
            buffer: String::new(),
            state: ScanState::Running,
        }
    }

    /// Returns `true` until EOF has been produced or an error has halted
    /// the pass.
    pub fn is_running(&self) -> bool {
        self.state == ScanState::Running
    }

    /// Drive the scanner to completion.
    ///
    /// `Ok` means the input was exhausted cleanly. `Err` carries the error
    /// that halted the pass together with the tokens produced before it.
    /// Both streams end with exactly one EOF token.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(mut self) -> Result<TokenStream, LexFailure> {
        let mut tokens = TokenStream::new();
        loop {
            match self.next_token() {
                Ok(token) => {
                    let done = token.is_eof();
                    tokens.push(token);
                    if done {
                        debug!(count = tokens.len(), "lexing complete");
                        return Ok(tokens);
                    }
                }
                Err(error) => {
                    tokens.push(self.eof_token());
                    debug!(count = tokens.len(), %error, "lexing halted");
                    return Err(LexFailure { error, tokens });
                }
            }
        }
    }

    /// Produce the next token.
    ///
    /// Returns the EOF token once input is exhausted; subsequent calls keep
    /// returning EOF. After an error, subsequent calls return the same
    /// error.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match &self.state {
            ScanState::Running => {}
            ScanState::Exhausted => return Ok(self.eof_token()),
            ScanState::Halted(error) => return Err(error.clone()),
        }

        self.skip_layout_and_comments();
        match self.dispatch() {
            Ok(token) => {
                if token.is_eof() {
                    self.state = ScanState::Exhausted;
                }
                Ok(token)
            }
            Err(error) => {
                self.buffer.clear();
                self.state = ScanState::Halted(error.clone());
                Err(error)
            }
        }
    }

    // ─── Dispatch ───────────────────────────────────────────────────

    fn dispatch(&mut self) -> Result<Token, LexError> {
        let start = self.cursor.pos();
        let position = self.cursor.position();

        let Some(c) = self.cursor.current() else {
            return self.end_of_input();
        };

        let kind = if is_number_start(c) {
            self.number()
        } else if is_identifier_start(c) {
            self.identifier()
        } else if c == STRING_DELIMITER {
            self.string(start)?
        } else if c == CHAR_DELIMITER {
            self.character(start)?
        } else if is_operator(c) {
            self.single(TokenKind::Operator)
        } else if is_separator(c) {
            self.single(TokenKind::Separator)
        } else {
            return Err(LexError::unrecognized_character(c, position, start));
        };

        let token = Token {
            kind,
            content: mem::take(&mut self.buffer),
            position,
            span: Span::new(start, self.cursor.pos()),
        };
        trace!(
            kind = %token.kind,
            content = %token.content,
            line = token.position.line,
            column = token.position.column,
            "token"
        );
        Ok(token)
    }

    /// No current character: either clean EOF or a malformed sequence.
    fn end_of_input(&self) -> Result<Token, LexError> {
        if let Some(byte) = self.cursor.malformed_byte() {
            return Err(self.encoding_error(byte, LexErrorContext::TopLevel));
        }
        debug_assert!(self.cursor.is_eof(), "no current char but input remains");
        let token = self.eof_token();
        trace!(
            line = token.position.line,
            column = token.position.column,
            "eof"
        );
        Ok(token)
    }

    fn eof_token(&self) -> Token {
        Token::eof(self.cursor.position(), self.cursor.pos())
    }

    // ─── Cursor Primitives ──────────────────────────────────────────

    /// Consume the current character, recording it unless it is layout.
    #[inline]
    fn bump(&mut self) {
        if let Some(c) = self.cursor.current() {
            if !is_layout(c) {
                self.buffer.push(c);
            }
            self.cursor.advance();
        }
    }

    /// Consume the current character and record it as-is.
    #[inline]
    fn bump_verbatim(&mut self) {
        if let Some(c) = self.cursor.current() {
            self.buffer.push(c);
            self.cursor.advance();
        }
    }

    fn eat_letters_and_digits(&mut self) {
        while self.cursor.current_is(is_letter_or_digit) {
            self.bump();
        }
    }

    fn eat_digits(&mut self) {
        while self.cursor.current_is(is_digit) {
            self.bump();
        }
    }

    // ─── Layout & Comments ──────────────────────────────────────────

    /// Skip layout runs and `#` comments until something else is current.
    ///
    /// A comment runs through its newline. A comment that reaches end of
    /// input without one just ends there.
    fn skip_layout_and_comments(&mut self) {
        loop {
            self.cursor.eat_while(is_layout);
            if self.cursor.current() != Some(COMMENT_MARKER) {
                return;
            }
            self.cursor.eat_until_newline();
            self.cursor.advance(); // the '\n', if any
        }
    }

    // ─── Numbers ────────────────────────────────────────────────────

    /// `.digits`, or digits where every digit followed by `.` takes the
    /// dot along with it.
    ///
    /// A digit-led literal swallows each embedded point, so `12.3.4` is one
    /// number. A leading-dot literal stops at the next dot: `.5.5` scans as
    /// `.5` twice.
    fn number(&mut self) -> TokenKind {
        if self.cursor.current() == Some(DECIMAL_POINT) {
            self.bump();
            self.eat_digits();
            return TokenKind::Number;
        }

        while self.cursor.current_is(is_digit) {
            if self.cursor.peek(1) == Some(DECIMAL_POINT) {
                self.bump(); // digit
                self.bump(); // '.'
            } else {
                self.bump();
            }
        }
        TokenKind::Number
    }

    // ─── Identifiers ────────────────────────────────────────────────

    /// A letter, digit, or underscore, then letters and digits. An
    /// underscore continues the identifier only when a letter or digit
    /// follows it.
    fn identifier(&mut self) -> TokenKind {
        self.bump(); // first char (already validated)
        self.eat_letters_and_digits();
        while self.cursor.current() == Some(UNDERSCORE)
            && self.cursor.peek(1).is_some_and(is_letter_or_digit)
        {
            self.bump(); // '_'
            self.eat_letters_and_digits();
        }
        TokenKind::Identifier
    }

    // ─── String & Character Literals ────────────────────────────────

    /// `"..."` with no escapes. Interior layout is kept verbatim.
    fn string(&mut self, start: u32) -> Result<TokenKind, LexError> {
        self.bump(); // opening '"'
        loop {
            match self.cursor.current() {
                Some(STRING_DELIMITER) => {
                    self.bump(); // closing '"'
                    return Ok(TokenKind::String);
                }
                Some(_) => self.bump_verbatim(),
                None => {
                    let context = LexErrorContext::InsideString { start };
                    return Err(match self.cursor.malformed_byte() {
                        Some(byte) => self.encoding_error(byte, context),
                        None => LexError::unterminated_string(
                            self.cursor.position(),
                            self.cursor.pos(),
                            start,
                        ),
                    });
                }
            }
        }
    }

    /// `'c'` where `c` is a single letter or digit.
    fn character(&mut self, start: u32) -> Result<TokenKind, LexError> {
        self.bump(); // opening '\''
        let has_content = self.cursor.current_is(is_letter_or_digit);
        if has_content {
            self.bump();
        }

        match self.cursor.current() {
            Some(CHAR_DELIMITER) if has_content => {
                self.bump(); // closing '\''
                Ok(TokenKind::Character)
            }
            Some(CHAR_DELIMITER) => Err(LexError::empty_char_literal(
                self.cursor.position(),
                self.cursor.pos(),
                start,
            )),
            Some(_) => Err(LexError::unterminated_char(
                self.cursor.position(),
                self.cursor.pos(),
                start,
            )),
            None => {
                let context = LexErrorContext::InsideChar { start };
                Err(match self.cursor.malformed_byte() {
                    Some(byte) => self.encoding_error(byte, context),
                    None => LexError::unterminated_char(
                        self.cursor.position(),
                        self.cursor.pos(),
                        start,
                    ),
                })
            }
        }
    }

    // ─── Operators & Separators ─────────────────────────────────────

    /// Single-character token: consume one character and emit `kind`.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    fn encoding_error(&self, byte: u8, context: LexErrorContext) -> LexError {
        LexError::encoding_error(byte, self.cursor.position(), self.cursor.pos(), context)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    /// Yields each token, then the EOF token (or the halting error) once,
    /// then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if !self.is_running() {
            return None;
        }
        Some(self.next_token())
    }
}

#[cfg(test)]
mod tests;

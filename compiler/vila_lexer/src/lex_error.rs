//! Lexer error types.
//!
//! Errors follow a WHERE+WHAT+WHY shape:
//! - WHERE: `position` and `offset` locating the error in source
//! - WHAT: `kind` describing what went wrong
//! - WHY: `context` explaining what the scanner was doing
//!
//! Every error is fatal for the pass. [`LexFailure`] pairs the error with
//! the EOF-terminated stream produced up to the failure point.

use thiserror::Error;

use crate::token::{Position, TokenStream};

/// A lexer error with enough context for diagnostic rendering.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
#[error("{position}: {kind}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE: line and column.
    pub position: Position,
    /// WHERE: byte offset into the input.
    pub offset: u32,
    /// WHY: what the scanner was doing.
    pub context: LexErrorContext,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// No recognizer claims the character.
    #[error("unrecognized character {found:?}")]
    UnrecognizedCharacter { found: char },
    /// End of input reached before a literal's closing delimiter.
    #[error("unterminated {literal} literal")]
    UnterminatedLiteral { literal: LiteralKind },
    /// `''`: a character literal with nothing between the delimiters.
    #[error("empty character literal")]
    EmptyCharLiteral,
    /// Malformed UTF-8 at the cursor.
    #[error("invalid UTF-8 byte 0x{byte:02X}")]
    EncodingError { byte: u8 },
}

/// Literal forms that need a closing delimiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Character,
}

impl std::fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LiteralKind::String => "string",
            LiteralKind::Character => "character",
        })
    }
}

/// Scanner context at the point of error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexErrorContext {
    /// Between tokens.
    #[default]
    TopLevel,
    /// Inside a string literal opened at byte `start`.
    InsideString { start: u32 },
    /// Inside a character literal opened at byte `start`.
    InsideChar { start: u32 },
}

impl LexError {
    #[cold]
    pub fn unrecognized_character(found: char, position: Position, offset: u32) -> Self {
        Self {
            kind: LexErrorKind::UnrecognizedCharacter { found },
            position,
            offset,
            context: LexErrorContext::TopLevel,
        }
    }

    #[cold]
    pub fn unterminated_string(position: Position, offset: u32, start: u32) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedLiteral {
                literal: LiteralKind::String,
            },
            position,
            offset,
            context: LexErrorContext::InsideString { start },
        }
    }

    #[cold]
    pub fn unterminated_char(position: Position, offset: u32, start: u32) -> Self {
        Self {
            kind: LexErrorKind::UnterminatedLiteral {
                literal: LiteralKind::Character,
            },
            position,
            offset,
            context: LexErrorContext::InsideChar { start },
        }
    }

    #[cold]
    pub fn empty_char_literal(position: Position, offset: u32, start: u32) -> Self {
        Self {
            kind: LexErrorKind::EmptyCharLiteral,
            position,
            offset,
            context: LexErrorContext::InsideChar { start },
        }
    }

    #[cold]
    pub fn encoding_error(
        byte: u8,
        position: Position,
        offset: u32,
        context: LexErrorContext,
    ) -> Self {
        Self {
            kind: LexErrorKind::EncodingError { byte },
            position,
            offset,
            context,
        }
    }

    /// Short actionable hint for the error.
    pub fn help(&self) -> &'static str {
        match self.kind {
            LexErrorKind::UnrecognizedCharacter { .. } => {
                "only letters, digits, `_`, `+ - * / =`, `, { } ( )`, quotes and `#` comments are allowed"
            }
            LexErrorKind::UnterminatedLiteral {
                literal: LiteralKind::String,
            } => "add a closing `\"`",
            LexErrorKind::UnterminatedLiteral {
                literal: LiteralKind::Character,
            } => "character literals hold exactly one letter or digit followed by a closing `'`",
            LexErrorKind::EmptyCharLiteral => "put one letter or digit between the quotes",
            LexErrorKind::EncodingError { .. } => "save the file as UTF-8",
        }
    }
}

/// A lexing pass that halted on an error.
///
/// `tokens` holds everything produced before the failure and is always
/// terminated by exactly one EOF token.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("lexing halted: {error}")]
pub struct LexFailure {
    #[source]
    pub error: LexError,
    pub tokens: TokenStream,
}

//! Tokenizer for the Vila language.
//!
//! Converts source text into an ordered [`TokenStream`] for the parser.
//! The crate is layered leaves-first:
//!
//! - [`classify`]: character classification predicates
//! - `cursor`: single-character advance with one-character lookahead
//! - [`Tokenizer`]: layout/comment skipping, per-kind recognizers, and
//!   the driver loop
//!
//! # Example
//!
//! ```
//! use vila_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("x = 5").unwrap();
//! assert_eq!(
//!     tokens.kinds(),
//!     [TokenKind::Identifier, TokenKind::Operator, TokenKind::Number, TokenKind::Eof]
//! );
//! ```
//!
//! A pass that halts still hands back a well-formed stream:
//!
//! ```
//! use vila_lexer::{tokenize, LexErrorKind, TokenKind};
//!
//! let failure = tokenize("@").unwrap_err();
//! assert_eq!(failure.error.kind, LexErrorKind::UnrecognizedCharacter { found: '@' });
//! assert_eq!(failure.tokens.kinds(), [TokenKind::Eof]);
//! ```

pub mod classify;
mod cursor;
mod lex_error;
mod scanner;
mod source_buffer;
mod token;

pub use lex_error::{LexError, LexErrorContext, LexErrorKind, LexFailure, LiteralKind};
pub use scanner::Tokenizer;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use token::{Position, Span, Token, TokenKind, TokenStream, EOF_CONTENT};

/// Tokenize `source` in one pass.
pub fn tokenize(source: &str) -> Result<TokenStream, LexFailure> {
    tokenize_buffer(&SourceBuffer::new(source))
}

/// Tokenize raw bytes. Malformed UTF-8 halts the pass with
/// [`LexErrorKind::EncodingError`] when the scanner reaches it.
pub fn tokenize_bytes(source: &[u8]) -> Result<TokenStream, LexFailure> {
    tokenize_buffer(&SourceBuffer::from_bytes(source))
}

fn tokenize_buffer(buf: &SourceBuffer<'_>) -> Result<TokenStream, LexFailure> {
    Tokenizer::new(buf).run()
}

//! Borrowed source input with encoding checks done once up front.
//!
//! # Encoding Detection
//!
//! During construction, the buffer scans for encoding issues:
//! - UTF-8 BOM at the start (skipped; the scanner never sees it)
//! - Malformed UTF-8 (the first bad sequence ends the decodable text)
//!
//! Issues are recorded as [`EncodingIssue`] values. The cursor only decodes
//! the valid prefix; when it reaches a malformed sequence the scanner turns
//! the issue into a fatal [`LexError`](crate::LexError).

use crate::cursor::Cursor;

/// The UTF-8 encoding of U+FEFF.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read-only view of one source text for the duration of a lexing pass.
///
/// # Layout
///
/// ```text
/// [BOM?][valid UTF-8 text...][malformed bytes...]
///  ^     ^                    ^
///  0     base                 base + text.len()
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer<'a> {
    /// Full input, including any BOM and malformed tail.
    bytes: &'a [u8],
    /// Decodable text after the BOM and before the first malformed byte.
    text: &'a str,
    /// Byte offset of `text` within `bytes`.
    base: u32,
    /// Encoding issues detected during construction.
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start. Skipped, not an error.
    Utf8Bom,
    /// A byte sequence that is not valid UTF-8. Fatal once reached.
    InvalidUtf8,
}

impl<'a> SourceBuffer<'a> {
    /// Wrap already-validated text.
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Wrap raw bytes, recording a leading BOM and the first malformed
    /// UTF-8 sequence.
    ///
    /// # File Size
    ///
    /// Offsets are `u32`; inputs over 4 GiB saturate the reported offsets.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        let mut encoding_issues = Vec::new();

        let base = if bytes.starts_with(UTF8_BOM) {
            encoding_issues.push(EncodingIssue {
                kind: EncodingIssueKind::Utf8Bom,
                pos: 0,
                len: to_u32(UTF8_BOM.len()),
            });
            UTF8_BOM.len()
        } else {
            0
        };

        // The first chunk is the longest valid prefix; a non-empty invalid
        // part means decoding has to stop there.
        let body = &bytes[base..];
        let (text, invalid) = match body.utf8_chunks().next() {
            Some(chunk) => (chunk.valid(), chunk.invalid()),
            None => ("", &body[..0]),
        };
        if !invalid.is_empty() {
            encoding_issues.push(EncodingIssue {
                kind: EncodingIssueKind::InvalidUtf8,
                pos: to_u32(base + text.len()),
                len: to_u32(invalid.len()),
            });
        }

        Self {
            bytes,
            text,
            base: to_u32(base),
            encoding_issues,
        }
    }

    /// The decodable text the scanner will see.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length of the full input in bytes.
    pub fn len(&self) -> u32 {
        to_u32(self.bytes.len())
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }

    /// The malformed sequence that ends the decodable text, if any.
    pub fn malformed(&self) -> Option<EncodingIssue> {
        self.encoding_issues
            .iter()
            .copied()
            .find(|issue| issue.kind == EncodingIssueKind::InvalidUtf8)
    }

    /// Create a cursor at the first decodable character.
    pub(crate) fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.bytes, self.text, self.base)
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

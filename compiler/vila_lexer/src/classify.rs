//! Character classification for the scanner's dispatch table.
//!
//! Every predicate is total over `char` and side-effect free. The scanner
//! checks them in a fixed priority order (see [`Tokenizer`](crate::Tokenizer)),
//! so the sets may overlap: a digit is both `is_digit` and
//! `is_letter_or_digit`, and the number recognizer wins.

/// Starts a line comment that runs through the next newline.
pub const COMMENT_MARKER: char = '#';

/// Delimits string literals.
pub const STRING_DELIMITER: char = '"';

/// Delimits character literals.
pub const CHAR_DELIMITER: char = '\'';

/// Decimal point inside (or leading) a number literal.
pub const DECIMAL_POINT: char = '.';

/// Joins identifier segments (`snake_case`).
pub const UNDERSCORE: char = '_';

const OPERATORS: &[char] = &['+', '-', '*', '/', '='];
const SEPARATORS: &[char] = &[',', '{', '}', '(', ')'];

/// ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Whitespace or control character: any codepoint up to and including
/// space (U+0020). Layout is consumed but never recorded in token content.
#[inline]
pub fn is_layout(c: char) -> bool {
    u32::from(c) <= 32
}

/// ASCII letter, either case.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// One of `+ - * / =`.
#[inline]
pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// One of `, { } ( )`.
#[inline]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Can start a number literal: a digit or a leading decimal point.
#[inline]
pub fn is_number_start(c: char) -> bool {
    is_digit(c) || c == DECIMAL_POINT
}

/// Can start an identifier. Digits are included for completeness of the
/// priority chain even though [`is_number_start`] claims them first.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    is_letter_or_digit(c) || c == UNDERSCORE
}

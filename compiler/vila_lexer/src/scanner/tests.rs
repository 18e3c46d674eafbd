use pretty_assertions::assert_eq;

use super::*;
use crate::lex_error::{LexErrorKind, LiteralKind};
use crate::token::Position;

/// Helper: run a full pass, panicking on failure.
fn scan(source: &str) -> TokenStream {
    let buf = SourceBuffer::new(source);
    match Tokenizer::new(&buf).run() {
        Ok(tokens) => tokens,
        Err(failure) => panic!("unexpected failure for {source:?}: {failure}"),
    }
}

/// Helper: run a full pass, panicking on success.
fn scan_err(source: &str) -> LexFailure {
    let buf = SourceBuffer::new(source);
    match Tokenizer::new(&buf).run() {
        Ok(tokens) => panic!("expected failure for {source:?}, got {tokens:?}"),
        Err(failure) => failure,
    }
}

/// Helper: `(kind, content)` pairs, EOF included.
fn pairs(source: &str) -> Vec<(TokenKind, String)> {
    scan(source)
        .iter()
        .map(|t| (t.kind, t.content.clone()))
        .collect()
}

fn tok(kind: TokenKind, content: &str) -> (TokenKind, String) {
    (kind, content.to_string())
}

fn eof() -> (TokenKind, String) {
    tok(TokenKind::Eof, "<EOF>")
}

// ─── Empty & Layout ────────────────────────────────────────────

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(pairs(""), vec![eof()]);
}

#[test]
fn layout_only_is_just_eof() {
    assert_eq!(pairs("  \t\r\n \u{1} "), vec![eof()]);
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn integer() {
    assert_eq!(pairs("42"), vec![tok(TokenKind::Number, "42"), eof()]);
}

#[test]
fn decimal() {
    assert_eq!(pairs("3.14"), vec![tok(TokenKind::Number, "3.14"), eof()]);
}

#[test]
fn leading_dot_decimal() {
    assert_eq!(pairs(".52"), vec![tok(TokenKind::Number, ".52"), eof()]);
}

#[test]
fn trailing_dot_is_part_of_number() {
    assert_eq!(pairs("5."), vec![tok(TokenKind::Number, "5."), eof()]);
}

#[test]
fn lone_dot_is_a_number() {
    assert_eq!(pairs("."), vec![tok(TokenKind::Number, "."), eof()]);
}

#[test]
fn every_embedded_dot_is_consumed() {
    assert_eq!(pairs("12.3.4"), vec![tok(TokenKind::Number, "12.3.4"), eof()]);
    assert_eq!(pairs("12.34.56"), vec![tok(TokenKind::Number, "12.34.56"), eof()]);
    assert_eq!(pairs("1.2.3"), vec![tok(TokenKind::Number, "1.2.3"), eof()]);
}

#[test]
fn consecutive_dots_after_digit() {
    assert_eq!(
        pairs("7.."),
        vec![
            tok(TokenKind::Number, "7."),
            tok(TokenKind::Number, "."),
            eof()
        ]
    );
}

#[test]
fn leading_dot_stops_at_next_dot() {
    assert_eq!(
        pairs(".5.5"),
        vec![
            tok(TokenKind::Number, ".5"),
            tok(TokenKind::Number, ".5"),
            eof()
        ]
    );
}

#[test]
fn number_then_identifier() {
    assert_eq!(
        pairs("12ab"),
        vec![
            tok(TokenKind::Number, "12"),
            tok(TokenKind::Identifier, "ab"),
            eof()
        ]
    );
}

// ─── Identifiers ───────────────────────────────────────────────

#[test]
fn identifier_with_internal_underscore() {
    assert_eq!(
        pairs("abc_123"),
        vec![tok(TokenKind::Identifier, "abc_123"), eof()]
    );
}

#[test]
fn identifier_with_several_underscores() {
    assert_eq!(
        pairs("a_b_c"),
        vec![tok(TokenKind::Identifier, "a_b_c"), eof()]
    );
}

#[test]
fn trailing_underscore_is_not_consumed() {
    let tokens = scan("abc_");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].content, "abc");
    assert_eq!(tokens[1].content, "_");
    assert_eq!(tokens[1].position, Position::new(1, 4));
}

#[test]
fn leading_underscore_starts_identifier() {
    assert_eq!(
        pairs("_tmp"),
        vec![tok(TokenKind::Identifier, "_tmp"), eof()]
    );
}

#[test]
fn double_underscore_splits_identifier() {
    assert_eq!(
        pairs("a__b"),
        vec![
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Identifier, "__b"),
            eof()
        ]
    );
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn simple_string_keeps_quotes() {
    assert_eq!(pairs("\"hi\""), vec![tok(TokenKind::String, "\"hi\""), eof()]);
}

#[test]
fn empty_string() {
    assert_eq!(pairs("\"\""), vec![tok(TokenKind::String, "\"\""), eof()]);
}

#[test]
fn string_keeps_interior_layout() {
    assert_eq!(
        pairs("\"hello world\ttab\""),
        vec![tok(TokenKind::String, "\"hello world\ttab\""), eof()]
    );
}

#[test]
fn string_may_span_lines() {
    let tokens = scan("\"a\nb\" x");
    assert_eq!(tokens[0].content, "\"a\nb\"");
    assert_eq!(tokens[1].position, Position::new(2, 4));
}

#[test]
fn string_hides_comment_marker() {
    assert_eq!(
        pairs("\"# not a comment\""),
        vec![tok(TokenKind::String, "\"# not a comment\""), eof()]
    );
}

#[test]
fn unterminated_string() {
    let failure = scan_err("\"abc");
    assert_eq!(
        failure.error.kind,
        LexErrorKind::UnterminatedLiteral {
            literal: LiteralKind::String
        }
    );
    assert_eq!(failure.error.context, LexErrorContext::InsideString { start: 0 });
    assert_eq!(failure.error.offset, 4);
    assert_eq!(failure.tokens.kinds(), vec![TokenKind::Eof]);
}

// ─── Characters ────────────────────────────────────────────────

#[test]
fn simple_char() {
    assert_eq!(pairs("'a'"), vec![tok(TokenKind::Character, "'a'"), eof()]);
}

#[test]
fn digit_char() {
    assert_eq!(pairs("'7'"), vec![tok(TokenKind::Character, "'7'"), eof()]);
}

#[test]
fn empty_char_literal_is_rejected() {
    let failure = scan_err("''");
    assert_eq!(failure.error.kind, LexErrorKind::EmptyCharLiteral);
    assert_eq!(failure.error.position, Position::new(1, 2));
    assert_eq!(failure.error.context, LexErrorContext::InsideChar { start: 0 });
    assert_eq!(failure.tokens.kinds(), vec![TokenKind::Eof]);
}

#[test]
fn multi_char_literal_is_unterminated() {
    let failure = scan_err("'ab'");
    assert_eq!(
        failure.error.kind,
        LexErrorKind::UnterminatedLiteral {
            literal: LiteralKind::Character
        }
    );
    assert_eq!(failure.error.offset, 2);
}

#[test]
fn unterminated_char_at_eof() {
    let failure = scan_err("x 'a");
    assert_eq!(
        failure.error.kind,
        LexErrorKind::UnterminatedLiteral {
            literal: LiteralKind::Character
        }
    );
    assert_eq!(
        failure.tokens.kinds(),
        vec![TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn lone_quote_is_unterminated() {
    let failure = scan_err("'");
    assert_eq!(
        failure.error.kind,
        LexErrorKind::UnterminatedLiteral {
            literal: LiteralKind::Character
        }
    );
}

// ─── Operators & Separators ────────────────────────────────────

#[test]
fn all_operators() {
    let kinds: Vec<TokenKind> = scan("+-*/=").without_eof().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Operator; 5]);
}

#[test]
fn all_separators() {
    assert_eq!(
        pairs(",{}()"),
        vec![
            tok(TokenKind::Separator, ","),
            tok(TokenKind::Separator, "{"),
            tok(TokenKind::Separator, "}"),
            tok(TokenKind::Separator, "("),
            tok(TokenKind::Separator, ")"),
            eof()
        ]
    );
}

#[test]
fn adjacent_operators_are_single_chars() {
    assert_eq!(
        pairs("=="),
        vec![
            tok(TokenKind::Operator, "="),
            tok(TokenKind::Operator, "="),
            eof()
        ]
    );
}

// ─── Comments ──────────────────────────────────────────────────

#[test]
fn comment_line_contributes_nothing() {
    assert_eq!(pairs("# a comment\n"), vec![eof()]);
}

#[test]
fn comment_between_tokens() {
    assert_eq!(
        pairs("x # the x\ny"),
        vec![
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::Identifier, "y"),
            eof()
        ]
    );
}

#[test]
fn consecutive_comments() {
    assert_eq!(
        pairs("# one\n\n   # two\n# three\nz"),
        vec![tok(TokenKind::Identifier, "z"), eof()]
    );
}

#[test]
fn comment_at_eof_without_newline_ends_cleanly() {
    let tokens = scan("x # trailing");
    assert_eq!(tokens.kinds(), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(tokens[1].span, Span::point(12));
}

#[test]
fn comment_text_never_leaks_into_next_token() {
    let tokens = scan("#abc\ndef");
    assert_eq!(tokens[0].content, "def");
}

// ─── Positions & Spans ─────────────────────────────────────────

#[test]
fn positions_mark_first_character() {
    let tokens = scan("x = 5\n  foo");
    let positions: Vec<Position> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(1, 3),
            Position::new(1, 5),
            Position::new(2, 3),
            Position::new(2, 6),
        ]
    );
}

#[test]
fn spans_cover_lexemes() {
    let tokens = scan("ab + 12.5");
    let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 2),
            Span::new(3, 4),
            Span::new(5, 9),
            Span::point(9)
        ]
    );
}

// ─── Halting ───────────────────────────────────────────────────

#[test]
fn unrecognized_character_halts_with_only_eof() {
    let failure = scan_err("@");
    assert_eq!(
        failure.error.kind,
        LexErrorKind::UnrecognizedCharacter { found: '@' }
    );
    assert_eq!(failure.tokens.kinds(), vec![TokenKind::Eof]);
    assert_eq!(failure.tokens[0].span, Span::point(0));
}

#[test]
fn unrecognized_character_keeps_earlier_tokens() {
    let failure = scan_err("x = 1 ; y");
    assert_eq!(
        failure.tokens.kinds(),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::Eof
        ]
    );
    assert_eq!(failure.error.position, Position::new(1, 7));
    assert_eq!(failure.error.offset, 6);
}

#[test]
fn non_ascii_letter_is_unrecognized() {
    let failure = scan_err("é");
    assert_eq!(
        failure.error.kind,
        LexErrorKind::UnrecognizedCharacter { found: 'é' }
    );
}

#[test]
fn malformed_utf8_is_encoding_error() {
    let buf = SourceBuffer::from_bytes(b"ab \xC3");
    let failure = match Tokenizer::new(&buf).run() {
        Ok(tokens) => panic!("expected failure, got {tokens:?}"),
        Err(failure) => failure,
    };
    assert_eq!(failure.error.kind, LexErrorKind::EncodingError { byte: 0xC3 });
    assert_eq!(failure.error.offset, 3);
    assert_eq!(
        failure.tokens.kinds(),
        vec![TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn malformed_utf8_inside_string_reports_context() {
    let buf = SourceBuffer::from_bytes(b"\"ab\xFF\"");
    let failure = match Tokenizer::new(&buf).run() {
        Ok(tokens) => panic!("expected failure, got {tokens:?}"),
        Err(failure) => failure,
    };
    assert_eq!(failure.error.kind, LexErrorKind::EncodingError { byte: 0xFF });
    assert_eq!(failure.error.context, LexErrorContext::InsideString { start: 0 });
}

#[test]
fn bom_is_skipped() {
    let buf = SourceBuffer::from_bytes(b"\xEF\xBB\xBFx");
    let tokens = match Tokenizer::new(&buf).run() {
        Ok(tokens) => tokens,
        Err(failure) => panic!("unexpected failure: {failure}"),
    };
    assert_eq!(tokens[0].content, "x");
    assert_eq!(tokens[0].span, Span::new(3, 4));
    assert_eq!(tokens[0].position, Position::START);
}

// ─── Driver State ──────────────────────────────────────────────

#[test]
fn next_token_repeats_eof_after_exhaustion() {
    let buf = SourceBuffer::new("x");
    let mut tokenizer = Tokenizer::new(&buf);
    assert_eq!(tokenizer.next_token().map(|t| t.kind), Ok(TokenKind::Identifier));
    assert!(tokenizer.is_running());
    assert_eq!(tokenizer.next_token().map(|t| t.kind), Ok(TokenKind::Eof));
    assert!(!tokenizer.is_running());
    assert_eq!(tokenizer.next_token().map(|t| t.kind), Ok(TokenKind::Eof));
}

#[test]
fn next_token_repeats_error_after_halt() {
    let buf = SourceBuffer::new("@ x");
    let mut tokenizer = Tokenizer::new(&buf);
    let first = tokenizer.next_token();
    let second = tokenizer.next_token();
    assert!(first.is_err());
    assert_eq!(first, second);
}

#[test]
fn iterator_yields_tokens_then_none() {
    let buf = SourceBuffer::new("a 1");
    let kinds: Vec<_> = Tokenizer::new(&buf)
        .map(|r| r.map(|t| t.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            Ok(TokenKind::Identifier),
            Ok(TokenKind::Number),
            Ok(TokenKind::Eof)
        ]
    );
}

#[test]
fn iterator_stops_after_error() {
    let buf = SourceBuffer::new("a @ b");
    let results: Vec<_> = Tokenizer::new(&buf).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

// ─── Realistic ─────────────────────────────────────────────────

#[test]
fn assignment() {
    assert_eq!(
        pairs("x = 5"),
        vec![
            tok(TokenKind::Identifier, "x"),
            tok(TokenKind::Operator, "="),
            tok(TokenKind::Number, "5"),
            eof()
        ]
    );
}

#[test]
fn function_like_program() {
    let source = "# add two numbers\nadd(a, b) {\n  sum = a + b * 2.5\n  greet(\"hi there\", 'x')\n}\n";
    assert_eq!(
        pairs(source),
        vec![
            tok(TokenKind::Identifier, "add"),
            tok(TokenKind::Separator, "("),
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Separator, ","),
            tok(TokenKind::Identifier, "b"),
            tok(TokenKind::Separator, ")"),
            tok(TokenKind::Separator, "{"),
            tok(TokenKind::Identifier, "sum"),
            tok(TokenKind::Operator, "="),
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Operator, "+"),
            tok(TokenKind::Identifier, "b"),
            tok(TokenKind::Operator, "*"),
            tok(TokenKind::Number, "2.5"),
            tok(TokenKind::Identifier, "greet"),
            tok(TokenKind::Separator, "("),
            tok(TokenKind::String, "\"hi there\""),
            tok(TokenKind::Separator, ","),
            tok(TokenKind::Character, "'x'"),
            tok(TokenKind::Separator, ")"),
            tok(TokenKind::Separator, "}"),
            eof(),
        ]
    );
}

#[test]
fn eof_position_after_trailing_newline() {
    let tokens = scan("x\n");
    let last = tokens.last().map(|t| (t.position, t.span));
    assert_eq!(last, Some((Position::new(2, 1), Span::point(2))));
}

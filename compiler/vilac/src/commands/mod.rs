//! CLI command implementations.

mod lex;

pub use lex::{lex_file, render_failure, render_tokens, LexOptions};

/// Read a source file as raw bytes.
///
/// Bytes rather than `String`: malformed UTF-8 is reported by the lexer
/// at its exact position instead of failing the whole read.
pub fn read_source(path: &str) -> Result<Vec<u8>, String> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {e}"),
    })
}

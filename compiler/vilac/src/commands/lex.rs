//! `vila lex`: dump the token stream of a file.

use std::fmt::Write as _;
use std::process::ExitCode;

use vila_lexer::{tokenize_bytes, LexFailure, TokenStream};

use super::read_source;

/// Options for `vila lex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Print one kind per line instead of full tokens.
    pub kinds_only: bool,
}

impl LexOptions {
    /// Parse flags, returning the options and the remaining positional
    /// arguments. Unknown flags are an error.
    pub fn parse(args: &[String]) -> Result<(Self, Vec<&str>), String> {
        let mut options = Self::default();
        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--kinds" | "-k" => options.kinds_only = true,
                flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
                path => positional.push(path),
            }
        }
        Ok((options, positional))
    }
}

/// Lex a file and print its token stream to stdout.
///
/// Returns a failure exit code if the file cannot be read or lexing
/// halts; the partial stream is still printed in the latter case.
pub fn lex_file(path: &str, options: LexOptions) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match tokenize_bytes(&source) {
        Ok(tokens) => {
            println!("Tokens for '{path}' ({} tokens):", tokens.len());
            print!("{}", render_tokens(&tokens, options));
            ExitCode::SUCCESS
        }
        Err(failure) => {
            println!("Tokens for '{path}' ({} tokens):", failure.tokens.len());
            print!("{}", render_tokens(&failure.tokens, options));
            eprint!("{}", render_failure(path, &failure));
            ExitCode::FAILURE
        }
    }
}

/// One line per token, indented.
pub fn render_tokens(tokens: &TokenStream, options: LexOptions) -> String {
    let mut out = String::new();
    for tok in tokens {
        if options.kinds_only {
            let _ = writeln!(out, "  {}", tok.kind);
        } else {
            let _ = writeln!(out, "  {tok}");
        }
    }
    out
}

/// Error report for a halted pass: location, message, and hint.
pub fn render_failure(path: &str, failure: &LexFailure) -> String {
    let error = &failure.error;
    format!(
        "error: {}\n  --> {path}:{}\n  = help: {}\n",
        error.kind,
        error.position,
        error.help()
    )
}

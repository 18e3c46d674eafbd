//! Vila toolchain CLI.

use std::process::ExitCode;

use vilac::commands::{lex_file, LexOptions};

fn main() -> ExitCode {
    vilac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    match args[1].as_str() {
        "lex" => {
            let (options, positional) = match LexOptions::parse(&args[2..]) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: vila lex [--kinds] <file.vi>");
                    return ExitCode::FAILURE;
                }
            };
            let [path] = positional.as_slice() else {
                eprintln!("Usage: vila lex [--kinds] <file.vi>");
                return ExitCode::FAILURE;
            };
            lex_file(path, options)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        unknown => {
            eprintln!("Unknown command: {unknown}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Vila toolchain");
    println!();
    println!("Usage: vila <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.vi>       Print the token stream of a file");
    println!("  help                Show this message");
    println!();
    println!("Options for lex:");
    println!("  -k, --kinds         Print token kinds only");
    println!();
    println!("Set RUST_LOG=vila_lexer=trace to trace every token.");
}

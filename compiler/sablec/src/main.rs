//! Sable front-end CLI.

use sablec::commands::{
    check_files, explain_error, lex_file, parse_file, CheckRequest, ParseRequest,
};
use sablec::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: sablec lex <file.bal>");
                std::process::exit(1);
            }
            lex_file(&args[2])
        }
        "parse" => {
            if args.len() < 3 {
                print_parse_usage();
                std::process::exit(1);
            }
            match ParseRequest::from_args(&args[2..]) {
                Ok(request) => parse_file(&request),
                Err(e) => {
                    eprintln!("error: {e}");
                    print_parse_usage();
                    std::process::exit(1);
                }
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: sablec check <files...> [--max-errors N]");
                std::process::exit(1);
            }
            CheckRequest::from_args(&args[2..])
                .and_then(|request| check_files(&request.files, request.max_errors))
        }
        "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: sablec explain <error-code>");
                eprintln!("Example: sablec explain E1003");
                std::process::exit(1);
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(false)
        }
        "version" | "--version" | "-V" => {
            println!("sablec {}", env!("CARGO_PKG_VERSION"));
            Ok(false)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match result {
        Ok(false) => {}
        Ok(true) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_parse_usage() {
    eprintln!("Usage: sablec parse <file.bal> [options]");
    eprintln!();
    eprintln!("Entry point (default: statements):");
    eprintln!("  --expr              Parse one expression");
    eprintln!("  --type              Parse one type descriptor");
    eprintln!("  --pattern           Parse one binding pattern");
    eprintln!("  --match             Parse one match pattern");
    eprintln!("  --destructure       Parse one destructuring pattern");
    eprintln!();
    eprintln!("Output (default: --tree):");
    eprintln!("  --tree              Parenthesized tree dump");
    eprintln!("  --print             Re-print as source");
    eprintln!("  --max-errors N      Stop recording diagnostics after N (default: 100)");
}

fn print_usage() {
    println!("Sable front end");
    println!();
    println!("Usage: sablec <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>            Show the token stream");
    println!("  parse <file>          Show the syntax tree (see `sablec parse` for options)");
    println!("  check <files...>      Parse files in parallel and report diagnostics");
    println!("  explain <code>        Describe a diagnostic code");
    println!("  help                  Show this message");
    println!("  version               Show version information");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=sable_parse=debug      Log parse errors and disambiguation");
    println!("  SABLE_LOG_TREE=1                Nest log output by span");
}

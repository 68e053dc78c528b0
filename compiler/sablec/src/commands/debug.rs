//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::fmt::Write as _;

use sable_diagnostic::Diagnostic;
use sable_fmt::{
    dump_expr, dump_pattern, dump_stmts, dump_type, print_expr, print_pattern, print_stmts,
    print_type,
};
use sable_ir::{AstArena, StringInterner, StringLookup, TokenKind, TokenList};
use sable_lexer::lex;
use sable_parse::{
    parse_binding_pattern, parse_destructuring_pattern, parse_expression, parse_match_pattern,
    parse_source_with, parse_statements, parse_type_descriptor, ParseOptions, ParseOutput,
};
use tracing::debug;

use super::{count, parse_limit, read_file, report_to_stderr};
use crate::DriverError;

/// Which grammar entry point `parse` starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    #[default]
    Statements,
    Expression,
    Type,
    BindingPattern,
    MatchPattern,
    DestructuringPattern,
}

/// How `parse` shows the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Parenthesized dump, one node per group.
    #[default]
    Tree,
    /// Re-printed source.
    Print,
}

/// Arguments of `sablec parse`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseRequest {
    pub path: String,
    pub mode: ParseMode,
    pub output: OutputMode,
    pub max_errors: usize,
}

impl ParseRequest {
    /// Read the arguments that follow `parse`.
    ///
    /// The last mode or output flag wins. `--max-errors` accepts both
    /// `--max-errors 5` and `--max-errors=5`.
    pub fn from_args(args: &[String]) -> Result<Self, DriverError> {
        let mut path = None;
        let mut mode = ParseMode::default();
        let mut output = OutputMode::default();
        let mut max_errors = ParseOptions::DEFAULT_MAX_DIAGNOSTICS;

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "--expr" => mode = ParseMode::Expression,
                "--type" => mode = ParseMode::Type,
                "--pattern" => mode = ParseMode::BindingPattern,
                "--match" => mode = ParseMode::MatchPattern,
                "--destructure" => mode = ParseMode::DestructuringPattern,
                "--stmts" => mode = ParseMode::Statements,
                "--tree" => output = OutputMode::Tree,
                "--print" => output = OutputMode::Print,
                "--max-errors" => {
                    let Some(value) = args.get(i + 1) else {
                        return Err(DriverError::usage("--max-errors needs a value"));
                    };
                    max_errors = parse_limit(value)?;
                    i += 1;
                }
                _ => {
                    if let Some(value) = arg.strip_prefix("--max-errors=") {
                        max_errors = parse_limit(value)?;
                    } else if arg.starts_with('-') {
                        return Err(DriverError::usage(format!("unknown option '{arg}'")));
                    } else if path.is_some() {
                        return Err(DriverError::usage(format!(
                            "unexpected argument '{arg}': parse takes one file"
                        )));
                    } else {
                        path = Some(arg.to_string());
                    }
                }
            }
            i += 1;
        }

        let Some(path) = path else {
            return Err(DriverError::usage("missing file path"));
        };
        Ok(ParseRequest {
            path,
            mode,
            output,
            max_errors,
        })
    }

    fn options(&self) -> ParseOptions {
        ParseOptions::default().with_max_diagnostics(self.max_errors)
    }
}

type Render<R> = fn(&AstArena, &dyn StringLookup, R) -> String;

fn render_with<R: Copy>(
    source: &str,
    options: ParseOptions,
    output: OutputMode,
    entry: fn(&TokenList, ParseOptions) -> ParseOutput<R>,
    print: Render<R>,
    dump: Render<R>,
) -> (String, Vec<Diagnostic>) {
    let interner = StringInterner::new();
    let parsed = parse_source_with(source, &interner, options, entry);
    let render = match output {
        OutputMode::Tree => dump,
        OutputMode::Print => print,
    };
    let text = render(&parsed.output.arena, &interner, parsed.output.root);
    (text, parsed.diagnostics())
}

/// Parse `source` as the request says and render the result.
///
/// Returns the rendered tree and every scanner and parser diagnostic, in
/// source order.
pub fn render_parse(source: &str, request: &ParseRequest) -> (String, Vec<Diagnostic>) {
    let options = request.options();
    let output = request.output;
    match request.mode {
        ParseMode::Statements => {
            render_with(source, options, output, parse_statements, print_stmts, dump_stmts)
        }
        ParseMode::Expression => {
            render_with(source, options, output, parse_expression, print_expr, dump_expr)
        }
        ParseMode::Type => {
            render_with(source, options, output, parse_type_descriptor, print_type, dump_type)
        }
        ParseMode::BindingPattern => render_with(
            source,
            options,
            output,
            parse_binding_pattern,
            print_pattern,
            dump_pattern,
        ),
        ParseMode::MatchPattern => render_with(
            source,
            options,
            output,
            parse_match_pattern,
            print_pattern,
            dump_pattern,
        ),
        ParseMode::DestructuringPattern => render_with(
            source,
            options,
            output,
            parse_destructuring_pattern,
            print_pattern,
            dump_pattern,
        ),
    }
}

/// One line per token: kind, source text and span. `Eof` is left out.
pub fn render_tokens(source: &str) -> (String, Vec<Diagnostic>) {
    let interner = StringInterner::new();
    let lexed = lex(source, &interner);
    let mut out = String::new();
    for token in lexed.tokens.iter() {
        if token.kind == TokenKind::Eof {
            continue;
        }
        let text = source.get(token.span.to_range()).unwrap_or_default();
        let _ = writeln!(out, "{:?} `{}` @ {}", token.kind, text, token.span);
    }
    let diagnostics = lexed.errors.iter().map(|e| e.to_diagnostic()).collect();
    (out, diagnostics)
}

/// Parse a file and print its tree, then its diagnostics.
pub fn parse_file(request: &ParseRequest) -> Result<bool, DriverError> {
    let source = read_file(&request.path)?;
    debug!(path = %request.path, mode = ?request.mode, "parsing");
    let (text, diagnostics) = render_parse(&source, request);
    println!("{text}");
    report_to_stderr(&request.path, &source, &diagnostics);
    Ok(count(&diagnostics).0 > 0)
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) -> Result<bool, DriverError> {
    let source = read_file(path)?;
    let (text, diagnostics) = render_tokens(&source);
    print!("{text}");
    report_to_stderr(path, &source, &diagnostics);
    Ok(count(&diagnostics).0 > 0)
}

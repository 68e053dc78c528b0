use std::io::Write as _;

use pretty_assertions::assert_eq;
use sable_diagnostic::emitter::ColorMode;
use sable_diagnostic::ErrorCode;
use sable_parse::ParseOptions;

use super::*;
use crate::DriverError;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn request(mode: ParseMode, output: OutputMode) -> ParseRequest {
    ParseRequest {
        path: "main.bal".to_string(),
        mode,
        output,
        max_errors: ParseOptions::DEFAULT_MAX_DIAGNOSTICS,
    }
}

// Argument handling

#[test]
fn parse_request_defaults() {
    let req = ParseRequest::from_args(&args(&["main.bal"])).unwrap();
    assert_eq!(req, request(ParseMode::Statements, OutputMode::Tree));
}

#[test]
fn parse_request_flags() {
    let req =
        ParseRequest::from_args(&args(&["--expr", "main.bal", "--print", "--max-errors", "5"]))
            .unwrap();
    assert_eq!(req.mode, ParseMode::Expression);
    assert_eq!(req.output, OutputMode::Print);
    assert_eq!(req.max_errors, 5);

    let req = ParseRequest::from_args(&args(&["--match", "--max-errors=7", "p.bal"])).unwrap();
    assert_eq!(req.mode, ParseMode::MatchPattern);
    assert_eq!(req.max_errors, 7);
    assert_eq!(req.path, "p.bal");
}

#[test]
fn parse_request_rejects_bad_input() {
    let err = ParseRequest::from_args(&args(&["--bogus", "a.bal"])).unwrap_err();
    assert_eq!(err.to_string(), "unknown option '--bogus'");

    let err = ParseRequest::from_args(&args(&["a.bal", "b.bal"])).unwrap_err();
    assert!(err.to_string().contains("parse takes one file"));

    let err = ParseRequest::from_args(&args(&["--type"])).unwrap_err();
    assert_eq!(err.to_string(), "missing file path");

    let err = ParseRequest::from_args(&args(&["a.bal", "--max-errors", "0"])).unwrap_err();
    assert!(matches!(err, DriverError::Usage(_)));

    let err = ParseRequest::from_args(&args(&["a.bal", "--max-errors"])).unwrap_err();
    assert_eq!(err.to_string(), "--max-errors needs a value");
}

#[test]
fn check_request_collects_files() {
    let req = CheckRequest::from_args(&args(&["a.bal", "--max-errors", "3", "b.bal"])).unwrap();
    assert_eq!(req.files, args(&["a.bal", "b.bal"]));
    assert_eq!(req.max_errors, 3);

    let err = CheckRequest::from_args(&args(&["--max-errors=2"])).unwrap_err();
    assert_eq!(err.to_string(), "no input files");
}

// Rendering

#[test]
fn tokens_render_with_text_and_span() {
    let (text, diagnostics) = render_tokens("x = 1;");
    assert_eq!(
        text,
        "Ident `x` @ 0..1\nEq `=` @ 2..3\nInt `1` @ 4..5\nSemi `;` @ 5..6\n"
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn parse_renders_tree_or_source() {
    let (tree, diagnostics) = render_parse(
        "x = a + b * c;",
        &request(ParseMode::Statements, OutputMode::Tree),
    );
    assert_eq!(tree, "(= x (+ a (* b c)))");
    assert!(diagnostics.is_empty());

    let (printed, _) = render_parse("a+b*  c", &request(ParseMode::Expression, OutputMode::Print));
    assert_eq!(printed, "a + b * c");

    let (tree, _) = render_parse("int|string?", &request(ParseMode::Type, OutputMode::Tree));
    assert_eq!(tree, "(nullable (union int string))");

    let (tree, _) = render_parse(
        "[a, ...rest]",
        &request(ParseMode::BindingPattern, OutputMode::Tree),
    );
    assert_eq!(tree, "(list-pattern a (rest rest))");
}

#[test]
fn parse_reports_diagnostics_in_source_order() {
    let (tree, diagnostics) = render_parse(
        "x = ;\ny = 2;",
        &request(ParseMode::Statements, OutputMode::Tree),
    );
    assert_eq!(tree, "<error>\n(= y 2)");
    let codes: Vec<ErrorCode> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1002]);
}

#[test]
fn explanation_names_code_and_phase() {
    assert_eq!(
        explanation("e1003").unwrap(),
        "E1003: unclosed delimiter\n\nReported by the parser."
    );
    assert_eq!(
        explanation("E0002").unwrap(),
        "E0002: unterminated string literal\n\nReported by the scanner."
    );
    let err = explanation("E9999").unwrap_err();
    assert_eq!(err.to_string(), "unknown error code `E9999`");
}

// Files and reports

#[test]
fn read_file_classifies_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.bal");
    let missing = missing.to_str().unwrap();
    let err = read_file(missing).unwrap_err();
    assert_eq!(err.to_string(), format!("cannot find file '{missing}'"));

    let present = dir.path().join("ok.bal");
    let mut file = std::fs::File::create(&present).unwrap();
    file.write_all(b"x = 1;").unwrap();
    assert_eq!(read_file(present.to_str().unwrap()).unwrap(), "x = 1;");
}

#[test]
fn check_source_collects_diagnostics() {
    let report = check_source(
        "a.bal".to_string(),
        "x = ;\n;".to_string(),
        ParseOptions::default(),
    );
    assert_eq!(count(&report.diagnostics), (1, 1));
}

#[test]
fn emit_reports_stops_at_the_limit() {
    let reports: Vec<FileReport> = ["a.bal", "b.bal"]
        .iter()
        .map(|path| {
            check_source(
                (*path).to_string(),
                "x = ;\ny = ;".to_string(),
                ParseOptions::default(),
            )
        })
        .collect();

    let mut out = Vec::new();
    let (totals, truncated) = emit_reports(&reports, &mut out, ColorMode::Never, false, 3);
    assert!(truncated);
    assert_eq!(totals, Totals { errors: 3, warnings: 0 });
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("error[E1002]").count(), 3);
    assert!(text.contains(" --> b.bal:1:"));

    let mut out = Vec::new();
    let (totals, truncated) = emit_reports(&reports, &mut out, ColorMode::Never, false, 10);
    assert!(!truncated);
    assert_eq!(totals.errors, 4);
}

#[test]
fn io_errors_are_classified() {
    let err = DriverError::from_io(
        "x.bal",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert_eq!(err.to_string(), "permission denied reading 'x.bal'");

    let err = DriverError::from_io("x.bal", std::io::Error::other("disk on fire"));
    assert_eq!(err.to_string(), "error reading 'x.bal': disk on fire");
    assert!(std::error::Error::source(&err).is_some());

    let err = DriverError::DiagnosticLimit { limit: 4 };
    assert_eq!(
        err.to_string(),
        "aborting after 4 errors (raise the limit with --max-errors)"
    );
}

//! The `explain` command: describe a diagnostic code.

use sable_diagnostic::ErrorCode;

use crate::DriverError;

/// Text shown by `sablec explain <code>`.
pub fn explanation(code_str: &str) -> Result<String, DriverError> {
    let code = code_str.parse::<ErrorCode>()?;
    let phase = if code.is_scanner_error() {
        "scanner"
    } else {
        "parser"
    };
    Ok(format!("{code}: {}\n\nReported by the {phase}.", code.description()))
}

/// Print the explanation for `code_str`.
pub fn explain_error(code_str: &str) -> Result<bool, DriverError> {
    match explanation(code_str) {
        Ok(text) => {
            println!("{text}");
            Ok(false)
        }
        Err(e) => {
            eprintln!("Codes have the format EXXXX where X is a digit.");
            eprintln!("Examples: E0001, E1003, E1009");
            Err(e)
        }
    }
}

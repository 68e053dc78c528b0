//! Stable error codes.
//!
//! `E0xxx` codes come from the scanner, `E1xxx` from the parser.

use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner
    /// Unrecognized character
    E0001,
    /// Unterminated string literal
    E0002,
    /// Malformed or out-of-range numeric literal
    E0003,
    /// Invalid escape sequence in a string literal
    E0004,

    // Parser
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected type descriptor
    E1005,
    /// No reading of an ambiguous construct parsed
    E1006,
    /// Malformed pattern (misplaced rest element, mixed shapes)
    E1007,
    /// Expected pattern
    E1008,
    /// Chained non-associative operator
    E1009,
    /// Expected statement
    E1010,
    /// Empty statement
    E1011,
    /// Too many errors; parsing stopped
    E1012,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
        }
    }

    /// One-line summary, used by `sablec explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unrecognized character",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E0003 => "malformed numeric literal",
            ErrorCode::E0004 => "invalid escape sequence",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1005 => "expected type descriptor",
            ErrorCode::E1006 => "ambiguous construct: no alternative parsed",
            ErrorCode::E1007 => "malformed pattern",
            ErrorCode::E1008 => "expected pattern",
            ErrorCode::E1009 => "non-associative operator chained",
            ErrorCode::E1010 => "expected statement",
            ErrorCode::E1011 => "empty statement",
            ErrorCode::E1012 => "too many errors",
        }
    }

    pub fn is_scanner_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string did not name a known error code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErrorCodeError(pub String);

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for ParseErrorCodeError {}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    /// Case-insensitive: `e1003` and `E1003` are the same code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseErrorCodeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_round_trips_through_from_str() {
        for code in ErrorCode::ALL {
            assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
        }
        assert_eq!("e1007".parse::<ErrorCode>(), Ok(ErrorCode::E1007));
        assert!("E9999".parse::<ErrorCode>().is_err());
    }

    #[test]
    fn phases_split_on_first_digit() {
        assert!(ErrorCode::E0002.is_scanner_error());
        assert!(!ErrorCode::E1006.is_scanner_error());
    }
}

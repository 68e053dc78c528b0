//! String literal escapes.
//!
//! Recognized: `\n \r \t \\ \" \'` and `\u{XXXX}`. An unknown escape is
//! kept literally and reported.

/// Result of unescaping one string body.
pub(crate) struct Unescaped {
    pub text: String,
    /// Byte offset (within the body) and character of each bad escape.
    pub invalid: Vec<(usize, char)>,
}

pub(crate) fn unescape_string(body: &str) -> Unescaped {
    let mut text = String::with_capacity(body.len());
    let mut invalid = Vec::new();
    let mut chars = body.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some((_, 'n')) => text.push('\n'),
            Some((_, 'r')) => text.push('\r'),
            Some((_, 't')) => text.push('\t'),
            Some((_, '\\')) => text.push('\\'),
            Some((_, '"')) => text.push('"'),
            Some((_, '\'')) => text.push('\''),
            Some((_, 'u')) if chars.peek().map(|&(_, c)| c) == Some('{') => {
                chars.next();
                let mut digits = String::new();
                let mut closed = false;
                for (_, d) in chars.by_ref() {
                    if d == '}' {
                        closed = true;
                        break;
                    }
                    digits.push(d);
                }
                match u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if closed => text.push(decoded),
                    _ => {
                        invalid.push((offset, 'u'));
                        text.push_str("\\u{");
                        text.push_str(&digits);
                        if closed {
                            text.push('}');
                        }
                    }
                }
            }
            Some((_, other)) => {
                invalid.push((offset, other));
                text.push('\\');
                text.push(other);
            }
            None => text.push('\\'),
        }
    }

    Unescaped { text, invalid }
}

/// Inverse of [`unescape_string`], used when printing string literals.
pub fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if c.is_control() => out.push_str(&format!("\\u{{{:X}}}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

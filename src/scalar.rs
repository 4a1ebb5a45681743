//! Scalar formatting and parsing.
//!
//! Scalars are written as compactly as the grammar allows: strings stay
//! bare unless leaving them bare would change how they read back. The same
//! predicates decide both directions, so anything written bare parses back
//! to the identical value.
//!
//! | Value | Text |
//! |-------|------|
//! | `Null` | `null` |
//! | `Bool` | `true` / `false` |
//! | `Number::Integer` | `42`, `-7` |
//! | `Number::Float` | `3.5`, `2.0`, `1e21` (shortest form, always fractional-looking) |
//! | `String` | `Alice`, or `"quoted, with \"escapes\""` |
//!
//! ```rust
//! use toon_codec::{scalar, Delimiter, Value};
//!
//! let text = scalar::format_scalar(&Value::from("a,b"), Delimiter::Comma).unwrap();
//! assert_eq!(text, "\"a,b\"");
//! assert_eq!(scalar::parse_scalar(&text).unwrap(), Value::from("a,b"));
//! ```

use crate::{Delimiter, Error, Number, Result, Value};

pub(crate) const NULL_LITERAL: &str = "null";
pub(crate) const TRUE_LITERAL: &str = "true";
pub(crate) const FALSE_LITERAL: &str = "false";

/// Renders a scalar value. Returns `None` for arrays and objects.
///
/// `delimiter` is the separator active where the text will be placed;
/// strings containing it are quoted.
#[must_use]
pub fn format_scalar(value: &Value, delimiter: Delimiter) -> Option<String> {
    if !value.is_scalar() {
        return None;
    }
    let mut out = String::new();
    write_scalar(&mut out, value, delimiter);
    Some(out)
}

/// Renders an object key or tabular field name, quoting it unless it is a plain identifier.
///
/// # Examples
///
/// ```rust
/// use toon_codec::scalar::format_key;
///
/// assert_eq!(format_key("user_id"), "user_id");
/// assert_eq!(format_key("user id"), "\"user id\"");
/// ```
#[must_use]
pub fn format_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    write_key(&mut out, key);
    out
}

pub(crate) fn write_scalar(out: &mut String, value: &Value, delimiter: Delimiter) {
    match value {
        Value::Null => out.push_str(NULL_LITERAL),
        Value::Bool(true) => out.push_str(TRUE_LITERAL),
        Value::Bool(false) => out.push_str(FALSE_LITERAL),
        Value::Number(n) => write_number(out, n),
        Value::String(s) => write_string(out, s, delimiter),
        // Composites are laid out by the encoder, never inline.
        Value::Array(_) | Value::Object(_) => {}
    }
}

/// Writes the shortest text that parses back to the same number.
///
/// Floats always carry a fraction or an exponent so they never read back as
/// integers. Non-finite floats have no textual form and are written as `null`.
pub(crate) fn write_number(out: &mut String, number: &Number) {
    match number {
        Number::Integer(i) => out.push_str(&i.to_string()),
        Number::Float(f) if !f.is_finite() => out.push_str(NULL_LITERAL),
        Number::Float(f) => {
            let mut positional = f.to_string();
            if !positional.contains('.') {
                positional.push_str(".0");
            }
            let exponent = format!("{:e}", f);
            if exponent.len() < positional.len() {
                out.push_str(&exponent);
            } else {
                out.push_str(&positional);
            }
        }
    }
}

fn write_string(out: &mut String, s: &str, delimiter: Delimiter) {
    if needs_quotes(s, delimiter) {
        write_quoted(out, s);
    } else {
        out.push_str(s);
    }
}

pub(crate) fn write_key(out: &mut String, key: &str) {
    if is_bare_key(key) {
        out.push_str(key);
    } else {
        write_quoted(out, key);
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Returns `true` when `s` cannot be written bare in a context using `delimiter`.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{scalar::needs_quotes, Delimiter};
///
/// assert!(!needs_quotes("hello world", Delimiter::Comma));
/// assert!(needs_quotes("hello,world", Delimiter::Comma));
/// assert!(!needs_quotes("hello,world", Delimiter::Pipe));
/// assert!(needs_quotes("true", Delimiter::Comma));
/// assert!(needs_quotes("42", Delimiter::Comma));
/// assert!(needs_quotes(" padded", Delimiter::Comma));
/// ```
#[must_use]
pub fn needs_quotes(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }

    if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
        return true;
    }

    if s == NULL_LITERAL || s == TRUE_LITERAL || s == FALSE_LITERAL || is_numeric_literal(s) {
        return true;
    }

    // Would read as a list item, a header, or the empty-object literal.
    if s == "-" || s.starts_with("- ") || s.starts_with('[') || s.starts_with('{') {
        return true;
    }

    let active = delimiter.as_char();
    s.chars()
        .any(|c| c == ':' || c == '"' || c == '\\' || c == active || c.is_control())
}

/// Keys matching `[A-Za-z_][A-Za-z0-9_.]*` are written without quotes.
#[must_use]
pub fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Returns `true` if `s` matches `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
pub(crate) fn is_numeric_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b) if b.is_ascii_digit() => i += count_digits(&bytes[i..]),
        _ => return false,
    }

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let digits = count_digits(&bytes[i..]);
        if digits == 0 {
            return false;
        }
        i += digits;
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let digits = count_digits(&bytes[i..]);
        if digits == 0 {
            return false;
        }
        i += digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parses a numeric literal. Integers that overflow `i64` fall back to `Float`.
pub(crate) fn parse_number(s: &str) -> Option<Number> {
    if !is_numeric_literal(s) {
        return None;
    }
    if !s.contains(['.', 'e', 'E']) {
        if let Ok(i) = s.parse::<i64>() {
            return Some(Number::Integer(i));
        }
    }
    s.parse::<f64>().ok().map(Number::Float)
}

/// Parses one scalar token.
///
/// Quoted tokens are unescaped; `null`, `true` and `false` are recognized
/// case-sensitively; numeric literals become numbers; anything else is a
/// bare string. Surrounding spaces are ignored.
///
/// Errors report line 1 and a column relative to the token.
///
/// # Errors
///
/// Returns [`Error::MalformedScalar`] for an empty token, an unterminated
/// quote, an invalid escape, or characters trailing a closing quote.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{scalar::parse_scalar, Number, Value};
///
/// assert_eq!(parse_scalar("null").unwrap(), Value::Null);
/// assert_eq!(parse_scalar("-12").unwrap(), Value::Number(Number::Integer(-12)));
/// assert_eq!(parse_scalar("2.0").unwrap(), Value::Number(Number::Float(2.0)));
/// assert_eq!(parse_scalar("\"42\"").unwrap(), Value::from("42"));
/// assert_eq!(parse_scalar("Alice").unwrap(), Value::from("Alice"));
/// assert!(parse_scalar("\"open").is_err());
/// ```
pub fn parse_scalar(token: &str) -> Result<Value> {
    let leading = token.len() - token.trim_start_matches(' ').len();
    let trimmed = token.trim_matches(' ');

    if trimmed.is_empty() {
        return Err(Error::malformed_scalar(1, leading + 1, "missing value"));
    }

    if trimmed.starts_with('"') {
        let (s, end) = parse_quoted(trimmed).map_err(|e| e.at(1, leading))?;
        if end != trimmed.len() {
            return Err(Error::malformed_scalar(
                1,
                leading + column_of(trimmed, end),
                "unexpected characters after closing quote",
            ));
        }
        return Ok(Value::String(s));
    }

    Ok(match trimmed {
        NULL_LITERAL => Value::Null,
        TRUE_LITERAL => Value::Bool(true),
        FALSE_LITERAL => Value::Bool(false),
        _ => match parse_number(trimmed) {
            Some(n) => Value::Number(n),
            None => Value::String(trimmed.to_string()),
        },
    })
}

/// Parses a quoted string at the start of `text`.
///
/// Returns the unescaped string and the byte offset just past the closing quote.
pub(crate) fn parse_quoted(text: &str) -> Result<(String, usize)> {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, '"')) => {}
        _ => return Err(Error::malformed_scalar(1, 1, "expected '\"'")),
    }

    let mut result = String::new();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '"' => return Ok((result, idx + 1)),
            '\\' => {
                let col = column_of(text, idx);
                match chars.next() {
                    Some((_, '"')) => result.push('"'),
                    Some((_, '\\')) => result.push('\\'),
                    Some((_, 'n')) => result.push('\n'),
                    Some((_, 'r')) => result.push('\r'),
                    Some((_, 't')) => result.push('\t'),
                    Some((_, 'u')) => {
                        let mut code = 0u32;
                        for _ in 0..4 {
                            let digit = chars
                                .next()
                                .and_then(|(_, c)| c.to_digit(16))
                                .ok_or_else(|| {
                                    Error::malformed_scalar(
                                        1,
                                        col,
                                        "invalid unicode escape (expected 4 hex digits)",
                                    )
                                })?;
                            code = code * 16 + digit;
                        }
                        let decoded = char::from_u32(code).ok_or_else(|| {
                            Error::malformed_scalar(1, col, "invalid unicode code point")
                        })?;
                        result.push(decoded);
                    }
                    Some((_, other)) => {
                        return Err(Error::malformed_scalar(
                            1,
                            col,
                            &format!("invalid escape sequence '\\{}'", other),
                        ))
                    }
                    None => return Err(Error::malformed_scalar(1, col, "unterminated string")),
                }
            }
            other => result.push(other),
        }
    }

    Err(Error::malformed_scalar(1, 1, "unterminated string"))
}

/// Splits `text` on `delimiter`, ignoring delimiters inside quoted tokens.
///
/// Each token comes back trimmed of surrounding spaces, paired with the byte
/// offset where it starts in `text`.
pub(crate) fn split_delimited(text: &str, delimiter: Delimiter) -> Result<Vec<(usize, &str)>> {
    let active = delimiter.as_char();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    let mut quote_start = 0;

    for (idx, ch) in text.char_indices() {
        if in_quotes {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_quotes = false;
            }
        } else if ch == '"' {
            in_quotes = true;
            quote_start = idx;
        } else if ch == active {
            tokens.push(trim_token(text, start, idx));
            start = idx + ch.len_utf8();
        }
    }

    if in_quotes {
        return Err(Error::malformed_scalar(
            1,
            column_of(text, quote_start),
            "unterminated string",
        ));
    }

    tokens.push(trim_token(text, start, text.len()));
    Ok(tokens)
}

fn trim_token(text: &str, start: usize, end: usize) -> (usize, &str) {
    let raw = &text[start..end];
    let leading = raw.len() - raw.trim_start_matches(' ').len();
    (start + leading, raw.trim_matches(' '))
}

/// Finds the first `needle` in `text` that is not inside a quoted token.
pub(crate) fn find_unquoted(text: &str, needle: char) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;
    for (idx, ch) in text.char_indices() {
        if in_quotes {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_quotes = false;
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == needle {
            return Some(idx);
        }
    }
    None
}

/// 1-based column of byte offset `byte` within `text`.
pub(crate) fn column_of(text: &str, byte: usize) -> usize {
    text[..byte].chars().count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: Value) -> String {
        format_scalar(&value, Delimiter::Comma).unwrap()
    }

    #[test]
    fn test_format_literals() {
        assert_eq!(fmt(Value::Null), "null");
        assert_eq!(fmt(Value::Bool(true)), "true");
        assert_eq!(fmt(Value::Bool(false)), "false");
        assert!(format_scalar(&Value::Array(vec![]), Delimiter::Comma).is_none());
    }

    #[test]
    fn test_format_numbers() {
        assert_eq!(fmt(Value::from(0)), "0");
        assert_eq!(fmt(Value::from(-42)), "-42");
        assert_eq!(fmt(Value::from(i64::MAX)), "9223372036854775807");
        assert_eq!(fmt(Value::from(3.5)), "3.5");
        assert_eq!(fmt(Value::from(2.0)), "2.0");
        assert_eq!(fmt(Value::from(0.1)), "0.1");
        assert_eq!(fmt(Value::from(1e21)), "1e21");
        assert_eq!(fmt(Value::from(1.5e-7)), "1.5e-7");
        assert_eq!(fmt(Value::from(f64::NAN)), "null");
        assert_eq!(fmt(Value::from(f64::INFINITY)), "null");
    }

    #[test]
    fn test_numbers_parse_back() {
        for n in [0.1, -2.5, 2.0, 1e21, 1.5e-7, 123456.789, f64::MAX, f64::MIN_POSITIVE] {
            let text = fmt(Value::from(n));
            assert_eq!(parse_scalar(&text).unwrap(), Value::from(n), "{}", text);
        }
    }

    #[test]
    fn test_format_strings() {
        assert_eq!(fmt(Value::from("Alice")), "Alice");
        assert_eq!(fmt(Value::from("hello world")), "hello world");
        assert_eq!(fmt(Value::from("")), "\"\"");
        assert_eq!(fmt(Value::from("a,b")), "\"a,b\"");
        assert_eq!(fmt(Value::from("a:b")), "\"a:b\"");
        assert_eq!(fmt(Value::from("say \"hi\"")), "\"say \\\"hi\\\"\"");
        assert_eq!(fmt(Value::from("line1\nline2")), "\"line1\\nline2\"");
        assert_eq!(fmt(Value::from("null")), "\"null\"");
        assert_eq!(fmt(Value::from("-3.5")), "\"-3.5\"");
        assert_eq!(fmt(Value::from("- item")), "\"- item\"");
        assert_eq!(fmt(Value::from("[2]")), "\"[2]\"");
        assert_eq!(fmt(Value::from("{}")), "\"{}\"");
        assert_eq!(fmt(Value::from("bell\u{7}")), "\"bell\\u0007\"");
    }

    #[test]
    fn test_numeric_literal_grammar() {
        for ok in ["0", "-0", "42", "-7", "3.25", "1e5", "1E+5", "2.5e-3"] {
            assert!(is_numeric_literal(ok), "{}", ok);
        }
        for not in ["", "-", "007", "1.", ".5", "+1", "1e", "NaN", "Infinity", "1_000", "0x1f"] {
            assert!(!is_numeric_literal(not), "{}", not);
        }
    }

    #[test]
    fn test_parse_number_kinds() {
        assert_eq!(parse_number("12"), Some(Number::Integer(12)));
        assert_eq!(parse_number("12.0"), Some(Number::Float(12.0)));
        assert_eq!(parse_number("1e3"), Some(Number::Float(1000.0)));
        assert_eq!(
            parse_number("9223372036854775808"),
            Some(Number::Float(9223372036854775808.0))
        );
        assert_eq!(parse_number("007"), None);
    }

    #[test]
    fn test_parse_scalar_literals_are_case_sensitive() {
        assert_eq!(parse_scalar("True").unwrap(), Value::from("True"));
        assert_eq!(parse_scalar("NULL").unwrap(), Value::from("NULL"));
        assert_eq!(parse_scalar(" true ").unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_parse_quoted_escapes() {
        assert_eq!(
            parse_scalar(r#""a\"b\\c\nd\teé""#).unwrap(),
            Value::from("a\"b\\c\nd\te\u{e9}")
        );
    }

    #[test]
    fn test_parse_scalar_errors() {
        let err = parse_scalar("\"open").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::MalformedScalar);

        let err = parse_scalar(r#""bad \q escape""#).unwrap_err();
        assert!(matches!(err, Error::MalformedScalar { col: 6, .. }), "{:?}", err);

        assert!(parse_scalar(r#""\u12""#).is_err());
        assert!(parse_scalar(r#""done" trailing"#).is_err());
        assert!(parse_scalar("   ").is_err());
    }

    #[test]
    fn test_split_respects_quotes() {
        let tokens = split_delimited(r#"1, "a,b" ,c"#, Delimiter::Comma).unwrap();
        let texts: Vec<_> = tokens.iter().map(|(_, t)| *t).collect();
        assert_eq!(texts, vec!["1", "\"a,b\"", "c"]);
        assert_eq!(tokens[1].0, 3);

        let tokens = split_delimited("a|b,c", Delimiter::Pipe).unwrap();
        assert_eq!(tokens.len(), 2);

        assert!(split_delimited("1,\"open", Delimiter::Comma).is_err());
    }

    #[test]
    fn test_keys() {
        assert!(is_bare_key("name"));
        assert!(is_bare_key("_private.field2"));
        assert!(!is_bare_key(""));
        assert!(!is_bare_key("2nd"));
        assert!(!is_bare_key("user-id"));
        assert_eq!(format_key("fav food"), "\"fav food\"");
    }

    #[test]
    fn test_find_unquoted() {
        assert_eq!(find_unquoted(r#""a:b": c"#, ':'), Some(5));
        assert_eq!(find_unquoted(r#""a:b""#, ':'), None);
    }
}

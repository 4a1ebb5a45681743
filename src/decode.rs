//! Text to value.
//!
//! Decoding is line oriented. The input is first split into non-blank lines
//! with their nesting depth, then parsed top-down. Each line is classified
//! by its leading token:
//!
//! - `- ...` is a list item
//! - `[N]...:` is an array header (rows, inline values or list items follow)
//! - `key: ...` or `key[N]...:` is an object entry
//! - anything else is a scalar
//!
//! Decoding is strict. Declared lengths and field counts are checked, keys
//! must be unique, and indentation must continue the current block exactly.
//!
//! ```rust
//! use toon_codec::{decode, toon};
//!
//! let value = decode("users: [2]{id,name}:\n  1,Alice\n  2,Bob").unwrap();
//! assert_eq!(
//!     value,
//!     toon!({"users": [{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]})
//! );
//! ```

use crate::scalar::{column_of, find_unquoted, parse_quoted, parse_scalar, split_delimited};
use crate::{DecodeOptions, Delimiter, Error, Map, Result, Value};
use tracing::debug;

/// Parses text into values using a fixed set of [`DecodeOptions`].
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    #[must_use]
    pub fn new(options: DecodeOptions) -> Self {
        Decoder { options }
    }

    #[must_use]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes a complete document. Empty input decodes to an empty object.
    ///
    /// # Errors
    ///
    /// Fails on the first construct that does not follow the grammar; the
    /// error carries the 1-based line it was found on.
    pub fn decode(&self, input: &str) -> Result<Value> {
        let width = self.options.indent_width();
        let result = scan(input, width).and_then(|lines| {
            let mut parser = Parser {
                lines,
                pos: 0,
                width,
            };
            parser.parse_document()
        });

        match &result {
            Ok(_) => debug!(bytes = input.len(), "decoded value"),
            Err(err) => debug!(kind = ?err.kind(), line = ?err.line(), "decode failed"),
        }
        result
    }
}

/// Decodes `input` with the default options.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(input: &str) -> Result<Value> {
    Decoder::default().decode(input)
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    /// 1-based line number in the input.
    number: usize,
    depth: usize,
    /// Leading spaces.
    indent: usize,
    /// Text after the indentation, trailing whitespace removed.
    content: &'a str,
}

fn scan(input: &str, width: usize) -> Result<Vec<Line<'_>>> {
    let mut lines = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let text = raw.trim_end();
        if text.is_empty() {
            continue;
        }

        let content = text.trim_start_matches(' ');
        let indent = text.len() - content.len();
        let number = idx + 1;

        if content.starts_with(char::is_whitespace) || indent % width != 0 {
            return Err(Error::unexpected_indent(
                number,
                indent - indent % width,
                indent,
                text,
            ));
        }

        lines.push(Line {
            number,
            depth: indent / width,
            indent,
            content,
        });
    }
    Ok(lines)
}

/// A parsed `[#N|]{a|b}:` header. `tail` is what follows the colon.
struct Header {
    len: usize,
    delimiter: Delimiter,
    fields: Option<Vec<String>>,
    tail_start: usize,
}

/// Parses an array header at the start of `text`. Positions are relative to `text`.
fn parse_header(text: &str) -> Result<Header> {
    if !text.starts_with('[') {
        return Err(Error::invalid_header(1, 1, "expected '['"));
    }
    let mut i = 1;

    if text[i..].starts_with('#') {
        i += 1;
    }

    let digits = text[i..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(Error::invalid_header(
            1,
            column_of(text, i),
            "expected array length",
        ));
    }
    let len: usize = text[i..i + digits]
        .parse()
        .map_err(|_| Error::invalid_header(1, column_of(text, i), "array length out of range"))?;
    i += digits;

    let mut delimiter = Delimiter::Comma;
    if let Some(mark) = text[i..].chars().next() {
        if let Some(found) = Delimiter::from_header_mark(mark) {
            delimiter = found;
            i += mark.len_utf8();
        }
    }

    if !text[i..].starts_with(']') {
        return Err(Error::invalid_header(1, column_of(text, i), "expected ']'"));
    }
    i += 1;

    let fields = if text[i..].starts_with('{') {
        let inner_start = i + 1;
        let close = find_unquoted(&text[inner_start..], '}')
            .ok_or_else(|| {
                Error::invalid_header(1, column_of(text, i), "unterminated field list")
            })?
            + inner_start;
        let fields = parse_fields(&text[inner_start..close], delimiter)
            .map_err(|e| e.at(1, column_of(text, inner_start) - 1))?;
        i = close + 1;
        Some(fields)
    } else {
        None
    };

    if !text[i..].starts_with(':') {
        return Err(Error::invalid_header(
            1,
            column_of(text, i),
            "expected ':' after array header",
        ));
    }
    i += 1;

    let after = &text[i..];
    let tail_start = i + (after.len() - after.trim_start_matches(' ').len());

    Ok(Header {
        len,
        delimiter,
        fields,
        tail_start,
    })
}

fn parse_fields(inner: &str, delimiter: Delimiter) -> Result<Vec<String>> {
    if inner.trim_matches(' ').is_empty() {
        return Err(Error::invalid_header(1, 1, "empty field list"));
    }

    let mut fields: Vec<String> = Vec::new();
    for (start, token) in split_delimited(inner, delimiter)? {
        let col = column_of(inner, start);
        let name = if token.starts_with('"') {
            let (name, end) = parse_quoted(token).map_err(|e| e.at(1, col - 1))?;
            if end != token.len() {
                return Err(Error::invalid_header(
                    1,
                    col + column_of(token, end) - 1,
                    "unexpected characters after field name",
                ));
            }
            name
        } else if token.is_empty() {
            return Err(Error::invalid_header(1, col, "empty field name"));
        } else {
            token.to_string()
        };

        if fields.contains(&name) {
            return Err(Error::invalid_header(
                1,
                col,
                &format!("duplicate field '{}'", name),
            ));
        }
        fields.push(name);
    }
    Ok(fields)
}

/// Reads the key at the start of an entry line.
///
/// Returns the key and the byte offset of the `:` or `[` that follows it.
fn parse_key(text: &str) -> Result<(String, usize)> {
    if text.starts_with('"') {
        let (key, end) = parse_quoted(text)?;
        return match text[end..].chars().next() {
            Some(':') | Some('[') => Ok((key, end)),
            _ => Err(Error::syntax(
                1,
                column_of(text, end),
                "expected ':' after key",
                text,
            )),
        };
    }

    let colon = find_unquoted(text, ':')
        .ok_or_else(|| Error::syntax(1, 1, "expected 'key: value'", text))?;
    let end = text[..colon].find('[').unwrap_or(colon);
    let key = text[..end].trim_end_matches(' ');

    if key.is_empty() {
        return Err(Error::syntax(1, 1, "missing key", text));
    }
    if let Some(quote) = key.find('"') {
        return Err(Error::syntax(
            1,
            column_of(text, quote),
            "unexpected quote in key",
            text,
        ));
    }
    Ok((key.to_string(), end))
}

fn is_bullet(text: &str) -> bool {
    text == "-" || text.starts_with("- ")
}

/// Strings containing `:` are always quoted, so an unquoted colon marks an entry.
fn is_key_line(text: &str) -> bool {
    if text.starts_with('"') {
        return match parse_quoted(text) {
            Ok((_, end)) => matches!(text[end..].chars().next(), Some(':') | Some('[')),
            Err(_) => false,
        };
    }
    find_unquoted(text, ':').is_some()
}

/// 0-based character offset of `byte` within `text`, shifted by `base`.
fn offset(base: usize, text: &str, byte: usize) -> usize {
    base + column_of(text, byte) - 1
}

struct Parser<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
    width: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.pos).copied()
    }

    /// The next line if it belongs to a block at `depth`.
    ///
    /// Returns `None` at end of input or on dedent; a deeper line is an error.
    fn next_in_block(&self, depth: usize) -> Result<Option<Line<'a>>> {
        match self.peek() {
            Some(line) if line.depth == depth => Ok(Some(line)),
            Some(line) if line.depth > depth => Err(self.indent_error(line, depth)),
            _ => Ok(None),
        }
    }

    fn indent_error(&self, line: Line<'_>, depth: usize) -> Error {
        Error::unexpected_indent(line.number, depth * self.width, line.indent, line.content)
    }

    fn parse_document(&mut self) -> Result<Value> {
        let first = match self.peek() {
            Some(line) => line,
            None => return Ok(Value::Object(Map::new())),
        };
        if first.depth != 0 {
            return Err(self.indent_error(first, 0));
        }

        let value = if is_bullet(first.content) {
            Value::Array(self.parse_list(0, None)?)
        } else if first.content.starts_with('[') {
            self.pos += 1;
            self.parse_array(first.content, first, 0, 1)?
        } else if is_key_line(first.content) {
            Value::Object(self.parse_object(0)?)
        } else {
            self.pos += 1;
            parse_inline_value(first.content, first, 0)?
        };

        if let Some(extra) = self.peek() {
            if extra.depth > 0 {
                return Err(self.indent_error(extra, 0));
            }
            return Err(Error::syntax(
                extra.number,
                1,
                "unexpected content after root value",
                extra.content,
            ));
        }
        Ok(value)
    }

    fn parse_object(&mut self, depth: usize) -> Result<Map> {
        let mut map = Map::new();
        self.parse_entries(depth, &mut map)?;
        Ok(map)
    }

    fn parse_entries(&mut self, depth: usize, map: &mut Map) -> Result<()> {
        while let Some(line) = self.next_in_block(depth)? {
            if is_bullet(line.content) {
                return Err(Error::syntax(
                    line.number,
                    line.indent + 1,
                    "unexpected list item in object",
                    line.content,
                ));
            }
            self.pos += 1;
            let (key, value) = self.parse_entry(line.content, line, line.indent, depth)?;
            if map.contains_key(&key) {
                return Err(Error::duplicate_key(line.number, &key));
            }
            map.insert(key, value);
        }
        Ok(())
    }

    /// Parses `key: ...` found in `text`, which starts `base` characters into
    /// `line`. The entry sits at `depth`; nested content is one level deeper.
    fn parse_entry(
        &mut self,
        text: &str,
        line: Line<'a>,
        base: usize,
        depth: usize,
    ) -> Result<(String, Value)> {
        let (key, key_end) = parse_key(text).map_err(|e| e.at(line.number, base))?;
        let rest = &text[key_end..];
        let rest_base = offset(base, text, key_end);

        let after = match rest.strip_prefix(':') {
            Some(after) => after,
            // Attached header: `key[N]{fields}:`
            None => {
                let value = self.parse_array(rest, line, rest_base, depth + 1)?;
                return Ok((key, value));
            }
        };

        let tail = after.trim_start_matches(' ');
        let tail_base = rest_base + 1 + (after.len() - tail.len());

        let value = if tail.is_empty() {
            self.parse_nested(depth + 1, line)?
        } else if tail.starts_with('[') {
            self.parse_array(tail, line, tail_base, depth + 1)?
        } else {
            parse_inline_value(tail, line, tail_base)?
        };
        Ok((key, value))
    }

    /// Parses the block opened by a bare `key:` or `-`.
    fn parse_nested(&mut self, depth: usize, opener: Line<'_>) -> Result<Value> {
        match self.next_in_block(depth)? {
            Some(next) if is_bullet(next.content) => Ok(Value::Array(self.parse_list(depth, None)?)),
            Some(_) => Ok(Value::Object(self.parse_object(depth)?)),
            None => Err(Error::unterminated_block(
                opener.number,
                "an indented block",
            )),
        }
    }

    /// Parses the items of a list at `depth`, checking them against a declared
    /// `(length, header line)` when there is one.
    fn parse_list(&mut self, depth: usize, declared: Option<(usize, Line<'_>)>) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        while let Some(line) = self.next_in_block(depth)? {
            if !is_bullet(line.content) {
                return Err(Error::syntax(
                    line.number,
                    line.indent + 1,
                    "expected list item '- '",
                    line.content,
                ));
            }
            self.pos += 1;
            items.push(self.parse_item(line, depth)?);
        }

        if let Some((len, header)) = declared {
            if items.len() != len {
                return Err(Error::row_count_mismatch(header.number, len, items.len()));
            }
        }
        Ok(items)
    }

    fn parse_item(&mut self, line: Line<'a>, depth: usize) -> Result<Value> {
        let (rest, base) = match line.content.strip_prefix("- ") {
            Some(rest) => {
                let trimmed = rest.trim_start_matches(' ');
                (trimmed, line.indent + 2 + (rest.len() - trimmed.len()))
            }
            None => ("", line.indent + 1),
        };

        if rest.is_empty() {
            return self.parse_nested(depth + 1, line);
        }
        if rest.starts_with('[') {
            return self.parse_array(rest, line, base, depth + 1);
        }
        if is_key_line(rest) {
            // First entry shares the bullet line; the rest follow one level deeper.
            let mut map = Map::new();
            let (key, value) = self.parse_entry(rest, line, base, depth + 1)?;
            map.insert(key, value);
            self.parse_entries(depth + 1, &mut map)?;
            return Ok(Value::Object(map));
        }
        parse_inline_value(rest, line, base)
    }

    /// Parses an array starting with a header in `text`. Rows and list items
    /// are read at `child_depth`.
    fn parse_array(
        &mut self,
        text: &str,
        line: Line<'a>,
        base: usize,
        child_depth: usize,
    ) -> Result<Value> {
        let header = parse_header(text).map_err(|e| e.at(line.number, base))?;
        let tail = &text[header.tail_start..];
        let tail_base = offset(base, text, header.tail_start);

        match &header.fields {
            Some(fields) => {
                if !tail.is_empty() {
                    return Err(Error::syntax(
                        line.number,
                        tail_base + 1,
                        "unexpected content after tabular header",
                        line.content,
                    ));
                }
                self.expect_children(&header, line, "tabular rows")?;
                self.parse_rows(&header, fields, line, child_depth)
            }
            None if !tail.is_empty() => parse_inline_items(tail, &header, line, tail_base),
            None if header.len == 0 => Ok(Value::Array(Vec::new())),
            None => {
                self.expect_children(&header, line, "list items")?;
                Ok(Value::Array(
                    self.parse_list(child_depth, Some((header.len, line)))?,
                ))
            }
        }
    }

    fn expect_children(&self, header: &Header, line: Line<'_>, what: &str) -> Result<()> {
        if header.len > 0 && self.peek().is_none() {
            return Err(Error::unterminated_block(
                line.number,
                &format!("{} {}", header.len, what),
            ));
        }
        Ok(())
    }

    fn parse_rows(
        &mut self,
        header: &Header,
        fields: &[String],
        header_line: Line<'_>,
        depth: usize,
    ) -> Result<Value> {
        let mut rows = Vec::with_capacity(header.len.min(self.lines.len()));
        while let Some(line) = self.next_in_block(depth)? {
            self.pos += 1;
            rows.push(Value::Object(parse_row(line, fields, header.delimiter)?));
        }

        if rows.len() != header.len {
            return Err(Error::row_count_mismatch(
                header_line.number,
                header.len,
                rows.len(),
            ));
        }
        Ok(Value::Array(rows))
    }
}

fn parse_row(line: Line<'_>, fields: &[String], delimiter: Delimiter) -> Result<Map> {
    let tokens =
        split_delimited(line.content, delimiter).map_err(|e| e.at(line.number, line.indent))?;
    if tokens.len() != fields.len() {
        return Err(Error::header_mismatch(line.number, fields.len(), tokens.len()));
    }

    let mut row = Map::with_capacity(fields.len());
    for (field, (start, token)) in fields.iter().zip(tokens) {
        let value = parse_scalar(token)
            .map_err(|e| e.at(line.number, offset(line.indent, line.content, start)))?;
        row.insert(field.clone(), value);
    }
    Ok(row)
}

fn parse_inline_items(tail: &str, header: &Header, line: Line<'_>, base: usize) -> Result<Value> {
    let tokens = split_delimited(tail, header.delimiter).map_err(|e| e.at(line.number, base))?;
    if tokens.len() != header.len {
        return Err(Error::row_count_mismatch(line.number, header.len, tokens.len()));
    }

    tokens
        .into_iter()
        .map(|(start, token)| {
            parse_scalar(token).map_err(|e| e.at(line.number, offset(base, tail, start)))
        })
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// A value written on the same line as its key or bullet.
fn parse_inline_value(text: &str, line: Line<'_>, base: usize) -> Result<Value> {
    if text == "{}" {
        return Ok(Value::Object(Map::new()));
    }
    parse_scalar(text).map_err(|e| e.at(line.number, base))
}

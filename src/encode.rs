//! Value to text.
//!
//! The encoder walks a [`Value`] depth-first and writes one construct per
//! line. Objects become `key: value` entries, nested composites move one
//! indentation level deeper, and arrays pick the most compact form they
//! qualify for:
//!
//! - `[0]:` when empty
//! - `[N]{f1,f2}:` followed by one row per element when the
//!   [tabular detector](crate::tabular::detect) accepts them
//! - `[N]: a,b,c` for scalars when inline arrays are enabled
//! - one `- item` bullet per element otherwise
//!
//! ```rust
//! use toon_codec::{toon, Encoder, EncodeOptions};
//!
//! let value = toon!({
//!     "name": "Alice",
//!     "tags": ["admin", "ops"],
//!     "profile": {"age": 30}
//! });
//!
//! let text = Encoder::new(EncodeOptions::new()).encode(&value);
//! assert_eq!(text, "name: Alice\ntags:\n  - admin\n  - ops\nprofile:\n  age: 30");
//! ```

use crate::scalar::{write_key, write_scalar};
use crate::tabular::{self, Detection};
use crate::{EncodeOptions, Map, Value};
use tracing::debug;

/// Writes values as text using a fixed set of [`EncodeOptions`].
///
/// Encoding never fails: every `Value` has a textual form. Non-finite floats
/// are written as `null`.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    #[must_use]
    pub fn new(options: EncodeOptions) -> Self {
        Encoder { options }
    }

    #[must_use]
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encodes `value` into a string with no trailing newline.
    #[must_use]
    pub fn encode(&self, value: &Value) -> String {
        let mut writer = Writer {
            out: String::new(),
            options: &self.options,
        };
        writer.write_root(value);
        debug!(bytes = writer.out.len(), "encoded value");
        writer.out
    }
}

/// Encodes `value` with the default options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{encode, toon};
///
/// let rows = toon!([{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]);
/// assert_eq!(encode(&rows), "[2]{id,name}:\n  1,Alice\n  2,Bob");
/// ```
#[must_use]
pub fn encode(value: &Value) -> String {
    Encoder::default().encode(value)
}

enum ArrayForm<'a> {
    Empty,
    Tabular(Vec<&'a str>),
    Inline,
    List,
}

struct Writer<'o> {
    out: String,
    options: &'o EncodeOptions,
}

impl Writer<'_> {
    fn write_root(&mut self, value: &Value) {
        match value {
            // An empty document is an empty object.
            Value::Object(map) => self.write_entries(map, 0),
            Value::Array(items) => self.write_array(items, 0, None),
            scalar => write_scalar(&mut self.out, scalar, self.options.delimiter),
        }
    }

    fn start_line(&mut self, depth: usize) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        let width = depth * self.options.indent_width();
        self.out.extend(std::iter::repeat(' ').take(width));
    }

    fn write_entries(&mut self, map: &Map, depth: usize) {
        for (key, value) in map {
            self.start_line(depth);
            self.write_entry(key, value, depth);
        }
    }

    /// Writes `key: ...` at the current position. Nested content goes to `depth + 1`.
    fn write_entry(&mut self, key: &str, value: &Value, depth: usize) {
        write_key(&mut self.out, key);
        self.out.push(':');
        match value {
            Value::Object(map) if map.is_empty() => self.out.push_str(" {}"),
            Value::Object(map) => self.write_entries(map, depth + 1),
            Value::Array(items) => self.write_array(items, depth, Some(' ')),
            scalar => {
                self.out.push(' ');
                write_scalar(&mut self.out, scalar, self.options.delimiter);
            }
        }
    }

    fn write_item(&mut self, value: &Value, depth: usize) {
        self.start_line(depth);
        self.out.push('-');
        match value {
            Value::Object(map) if map.is_empty() => self.out.push_str(" {}"),
            Value::Object(map) => {
                let mut entries = map.iter();
                if let Some((key, first)) = entries.next() {
                    self.out.push(' ');
                    self.write_entry(key, first, depth + 1);
                }
                for (key, value) in entries {
                    self.start_line(depth + 1);
                    self.write_entry(key, value, depth + 1);
                }
            }
            Value::Array(items) => self.write_array(items, depth, Some(' ')),
            scalar => {
                self.out.push(' ');
                write_scalar(&mut self.out, scalar, self.options.delimiter);
            }
        }
    }

    /// Writes an array owned by a line at `depth`.
    ///
    /// `separator` is what goes between the owning prefix (`key:` or `-`) and
    /// an inline header; the root array has no prefix and its bullets stay at
    /// depth 0.
    fn write_array(&mut self, items: &[Value], depth: usize, separator: Option<char>) {
        let form = self.array_form(items);
        if !matches!(form, ArrayForm::List) {
            if let Some(sep) = separator {
                self.out.push(sep);
            }
        }

        match form {
            ArrayForm::Empty => self.write_header(0, None),
            ArrayForm::Tabular(fields) => {
                self.write_header(items.len(), Some(&fields));
                self.write_rows(items, depth + 1);
            }
            ArrayForm::Inline => {
                self.write_header(items.len(), None);
                self.out.push(' ');
                self.write_delimited(items);
            }
            ArrayForm::List => {
                let item_depth = if separator.is_some() { depth + 1 } else { depth };
                for item in items {
                    self.write_item(item, item_depth);
                }
            }
        }
    }

    fn array_form<'v>(&self, items: &'v [Value]) -> ArrayForm<'v> {
        if items.is_empty() {
            return ArrayForm::Empty;
        }
        if let Detection::Tabular(fields) = tabular::detect(items) {
            return ArrayForm::Tabular(fields);
        }
        if self.options.inline_primitive_arrays && items.iter().all(Value::is_scalar) {
            return ArrayForm::Inline;
        }
        ArrayForm::List
    }

    /// `[#N|]{a|b}:` with the marker, delimiter mark and field list as configured.
    fn write_header(&mut self, len: usize, fields: Option<&[&str]>) {
        let delimiter = self.options.delimiter;
        self.out.push('[');
        if self.options.length_marker {
            self.out.push('#');
        }
        self.out.push_str(&len.to_string());
        self.out.push_str(delimiter.header_mark());
        self.out.push(']');

        if let Some(fields) = fields {
            self.out.push('{');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(delimiter.as_str());
                }
                write_key(&mut self.out, field);
            }
            self.out.push('}');
        }
        self.out.push(':');
    }

    fn write_rows(&mut self, items: &[Value], depth: usize) {
        for item in items {
            if let Value::Object(row) = item {
                self.start_line(depth);
                self.write_delimited(row.values());
            }
        }
    }

    fn write_delimited<'v, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'v Value>,
    {
        let delimiter = self.options.delimiter;
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                self.out.push_str(delimiter.as_str());
            }
            write_scalar(&mut self.out, value, delimiter);
        }
    }
}

//! Configuration for the encoder and decoder.
//!
//! - [`EncodeOptions`]: indentation, delimiter, length marker and inline arrays
//! - [`DecodeOptions`]: indentation the decoder measures depth with
//! - [`Delimiter`]: separator used inside tabular rows and inline arrays
//!
//! Indentation is an explicit parameter on both sides: text produced with
//! `EncodeOptions::new().with_indent(4)` must be decoded with
//! `DecodeOptions::new().with_indent(4)`.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{toon, Delimiter, EncodeOptions, Encoder};
//!
//! let rows = toon!([{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]);
//!
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! let text = Encoder::new(options).encode(&rows);
//! assert_eq!(text, "[2|]{id|name}:\n  1|Alice\n  2|Bob");
//! ```

/// Delimiter choice for tabular rows and inline arrays.
///
/// - **Comma**: Default, most compact
/// - **Tab**: Best for TSV-like output
/// - **Pipe**: Readable for markdown-style tables
///
/// Non-comma delimiters are announced inside the header brackets
/// (`[3|]`, `[3\t]`) so the decoder never has to guess.
///
/// # Examples
///
/// ```rust
/// use toon_codec::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Pipe.as_str(), "|");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Maps the mark found inside header brackets back to a delimiter.
    pub(crate) fn from_header_mark(mark: char) -> Option<Self> {
        match mark {
            ',' => Some(Delimiter::Comma),
            '\t' => Some(Delimiter::Tab),
            '|' => Some(Delimiter::Pipe),
            _ => None,
        }
    }

    /// The mark the encoder writes inside header brackets. Comma is implicit.
    pub(crate) const fn header_mark(&self) -> &'static str {
        match self {
            Delimiter::Comma => "",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

/// Configuration options for encoding.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{EncodeOptions, Delimiter};
///
/// // Defaults: 2-space indent, comma delimiter, no length marker
/// let options = EncodeOptions::new();
/// assert_eq!(options.indent, 2);
///
/// let options = EncodeOptions::new()
///     .with_indent(4)
///     .with_delimiter(Delimiter::Tab)
///     .with_length_marker(true)
///     .with_inline_primitive_arrays(true);
/// assert!(options.length_marker);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    pub delimiter: Delimiter,
    /// Prefix declared lengths with `#`, e.g. `[#3]`.
    pub length_marker: bool,
    /// Write arrays of scalars as `[N]: a,b,c` instead of one bullet per element.
    pub inline_primitive_arrays: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            length_marker: false,
            inline_primitive_arrays: false,
        }
    }
}

impl EncodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level). Zero is treated as one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::EncodeOptions;
    ///
    /// let options = EncodeOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the delimiter for tabular rows and inline arrays.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Writes declared lengths as `[#3]` instead of `[3]`.
    ///
    /// `#` is the only marker the decoder reads, so it is the only one offered.
    #[must_use]
    pub fn with_length_marker(mut self, enabled: bool) -> Self {
        self.length_marker = enabled;
        self
    }

    #[must_use]
    pub fn with_inline_primitive_arrays(mut self, inline: bool) -> Self {
        self.inline_primitive_arrays = inline;
        self
    }

    pub(crate) fn indent_width(&self) -> usize {
        self.indent.max(1)
    }
}

/// Configuration options for decoding.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{DecodeOptions, Decoder};
///
/// let decoder = Decoder::new(DecodeOptions::new().with_indent(4));
/// let value = decoder.decode("user:\n    name: Alice").unwrap();
/// assert!(value.is_object());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Spaces per nesting level; indentation must be a multiple of it.
    pub indent: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions { indent: 2 }
    }
}

impl DecodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub(crate) fn indent_width(&self) -> usize {
        self.indent.max(1)
    }
}

impl From<&EncodeOptions> for DecodeOptions {
    /// Decode options matching the layout an encoder with `options` produces.
    fn from(options: &EncodeOptions) -> Self {
        DecodeOptions {
            indent: options.indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_marks() {
        for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
            assert_eq!(
                Delimiter::from_header_mark(delimiter.as_char()),
                Some(delimiter)
            );
        }
        assert_eq!(Delimiter::from_header_mark(';'), None);
        assert_eq!(Delimiter::Comma.header_mark(), "");
    }

    #[test]
    fn test_length_marker_toggle() {
        assert!(!EncodeOptions::new().length_marker);
        assert!(EncodeOptions::new().with_length_marker(true).length_marker);
        assert!(!EncodeOptions::new()
            .with_length_marker(true)
            .with_length_marker(false)
            .length_marker);
    }

    #[test]
    fn test_zero_indent_is_clamped() {
        assert_eq!(EncodeOptions::new().with_indent(0).indent_width(), 1);
        assert_eq!(DecodeOptions::new().with_indent(0).indent_width(), 1);
    }

    #[test]
    fn test_decode_options_follow_encoder() {
        let encode = EncodeOptions::new().with_indent(3);
        assert_eq!(DecodeOptions::from(&encode).indent, 3);
    }
}

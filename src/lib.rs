//! # toon_codec
//!
//! A compact, indentation-based text codec for structured data, built
//! around one idea: arrays of uniform flat records are written as a table
//! with a single header line instead of repeating every key on every row.
//!
//! ```text
//! [2]{id,name}:
//!   1,Alice
//!   2,Bob
//! ```
//!
//! ## Key Features
//!
//! - **Tabular arrays**: uniform records collapse into `[N]{fields}:` plus one row each
//! - **Minimal quoting**: strings stay bare unless that would change how they read back
//! - **Lossless**: `decode(&encode(&v)) == v` for every [`Value`], key order included
//! - **Strict decoding**: typed errors with line numbers, never best-effort repair
//! - **Serde compatible**: any `Serialize` type encodes, any `Deserialize` type decodes
//!
//! ## Quick Start
//!
//! ```rust
//! use toon_codec::{decode, encode, toon};
//!
//! let users = toon!([
//!     {"id": 1, "name": "Alice"},
//!     {"id": 2, "name": "Bob"}
//! ]);
//!
//! let text = encode(&users);
//! assert_eq!(text, "[2]{id,name}:\n  1,Alice\n  2,Bob");
//! assert_eq!(decode(&text).unwrap(), users);
//! ```
//!
//! ### With Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_codec::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Alice\nactive: true");
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(user, back);
//! ```
//!
//! ## Modules
//!
//! - [`scalar`]: formatting and parsing of single scalars
//! - [`tabular`]: the decision whether an array can be written as a table
//! - [`format`]: the grammar the encoder writes and the decoder accepts
//!
//! ## Logging
//!
//! Encode and decode calls emit `tracing` events at `debug` level and
//! tabular decisions at `trace` level. No subscriber is installed by the
//! library.
//!
//! ## Examples
//!
//! The `demos/` directory holds runnable programs:
//!
//! - **`simple.rs`** - encoding and decoding the basic scenarios
//! - **`macro.rs`** - building values with the `toon!` macro
//! - **`tabular_arrays.rs`** - when arrays become tables and when they don't
//! - **`dynamic_values.rs`** - inspecting decoded values
//! - **`custom_options.rs`** - delimiters, indentation and length markers
//! - **`token_efficiency.rs`** - size comparison against JSON
//! - **`query_rows.rs`** - query rows packed into a prompt, TOON vs pretty JSON
//!
//! Run any of them with: `cargo run --example <name>`

mod decode;
pub mod de;
mod encode;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod scalar;
pub mod ser;
pub mod tabular;
pub mod value;

pub use de::{from_value, ValueDeserializer};
pub use decode::{decode, Decoder};
pub use encode::{encode, Encoder};
pub use error::{Error, ErrorKind, Result};
pub use map::Map;
pub use options::{DecodeOptions, Delimiter, EncodeOptions};
pub use ser::{to_value, ValueSerializer};
pub use tabular::Detection;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to text with the default options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_string;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an error if `T` cannot be represented as a [`Value`], for example
/// a map with non-string keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::{to_string_with_options, Delimiter, EncodeOptions};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let points = vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];
/// let options = EncodeOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_length_marker(true);
/// let text = to_string_with_options(&points, options).unwrap();
/// assert_eq!(text, "[#2|]{x|y}:\n  1|2\n  3|4");
/// ```
///
/// # Errors
///
/// Returns an error if `T` cannot be represented as a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(Encoder::new(options).encode(&value))
}

/// Serialize any `T: Serialize` to a writer.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_writer;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a decode error (with its line) if the text is malformed, or a
/// [`Error::Custom`] if the decoded value does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, DecodeOptions::default())
}

/// Deserialize an instance of type `T` from text with custom options.
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(s: &str, options: DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = Decoder::new(options).decode(s)?;
    from_value(value)
}

/// Deserialize an instance of type `T` from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use std::io::Cursor;
/// use toon_codec::from_reader;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x: 1\ny: 2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the text is malformed, or the value
/// does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from UTF-8 bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, the text is
/// malformed, or the value does not fit `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

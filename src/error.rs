//! Error types for TOON encoding and decoding.
//!
//! Encoding a well-formed [`Value`](crate::Value) never fails, so every
//! variant here except [`Error::Io`] and [`Error::Custom`] comes from the
//! decoder. Decode errors always carry the 1-based line they were detected
//! on; errors raised while reading a token also carry its column.
//!
//! ## Error Categories
//!
//! - **Scalar errors**: unterminated quotes, invalid escape sequences
//! - **Layout errors**: indentation that is neither a sibling nor exactly one level deeper
//! - **Tabular errors**: rows whose width or count disagrees with their header
//! - **Structural errors**: blocks that never materialize, stray lines, duplicate keys
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{decode, ErrorKind};
//!
//! let err = decode("[3]{a,b}:\n  1,2\n  3,4").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::RowCountMismatch);
//! assert_eq!(err.line(), Some(1));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token could not be read as null, bool, number or string.
    #[error("Malformed scalar at line {line}, column {col}: {msg}")]
    MalformedScalar { line: usize, col: usize, msg: String },

    /// Indentation that does not continue the current block.
    #[error("Unexpected indentation at line {line}: expected {expected} spaces, found {found}\n{context}")]
    UnexpectedIndent {
        line: usize,
        expected: usize,
        found: usize,
        context: String,
    },

    /// A tabular row whose value count differs from the header's field count.
    #[error("Header mismatch at line {line}: header declares {expected} fields, row has {found}")]
    HeaderMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The number of rows or items under a header differs from its declared length.
    #[error("Row count mismatch for header at line {line}: declared {declared}, found {found}")]
    RowCountMismatch {
        line: usize,
        declared: usize,
        found: usize,
    },

    /// Input ended (or dedented) where a nested block or row set was required.
    #[error("Unterminated block at line {line}: expected {expected}")]
    UnterminatedBlock { line: usize, expected: String },

    /// Malformed `[N]{fields}:` header syntax.
    #[error("Invalid array header at line {line}, column {col}: {msg}")]
    InvalidHeader { line: usize, col: usize, msg: String },

    /// A line that fits none of the format's productions.
    #[error("Syntax error at line {line}, column {col}: {msg}\n{context}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        context: String,
    },

    /// The same key appears twice in one object.
    #[error("Duplicate key '{key}' at line {line}")]
    DuplicateKey { line: usize, key: String },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Error raised by a `Serialize` or `Deserialize` implementation.
    #[error("Error: {0}")]
    Custom(String),
}

/// Field-less discriminant of [`Error`], convenient for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedScalar,
    UnexpectedIndent,
    HeaderMismatch,
    RowCountMismatch,
    UnterminatedBlock,
    InvalidHeader,
    Syntax,
    DuplicateKey,
    Io,
    Custom,
}

impl Error {
    pub fn malformed_scalar(line: usize, col: usize, msg: &str) -> Self {
        Error::MalformedScalar {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an indentation error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Error;
    ///
    /// let err = Error::unexpected_indent(8, 2, 4, "    name: Alice");
    /// assert!(err.to_string().contains("expected 2 spaces"));
    /// ```
    pub fn unexpected_indent(line: usize, expected: usize, found: usize, context: &str) -> Self {
        Error::UnexpectedIndent {
            line,
            expected,
            found,
            context: context.to_string(),
        }
    }

    pub fn header_mismatch(line: usize, expected: usize, found: usize) -> Self {
        Error::HeaderMismatch {
            line,
            expected,
            found,
        }
    }

    pub fn row_count_mismatch(line: usize, declared: usize, found: usize) -> Self {
        Error::RowCountMismatch {
            line,
            declared,
            found,
        }
    }

    pub fn unterminated_block(line: usize, expected: &str) -> Self {
        Error::UnterminatedBlock {
            line,
            expected: expected.to_string(),
        }
    }

    pub fn invalid_header(line: usize, col: usize, msg: &str) -> Self {
        Error::InvalidHeader {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates a syntax error with the offending line as context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Error;
    ///
    /// let err = Error::syntax(10, 5, "expected `key: value`", "name Alice");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str, context: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
        }
    }

    pub fn duplicate_key(line: usize, key: &str) -> Self {
        Error::DuplicateKey {
            line,
            key: key.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the discriminant of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedScalar { .. } => ErrorKind::MalformedScalar,
            Error::UnexpectedIndent { .. } => ErrorKind::UnexpectedIndent,
            Error::HeaderMismatch { .. } => ErrorKind::HeaderMismatch,
            Error::RowCountMismatch { .. } => ErrorKind::RowCountMismatch,
            Error::UnterminatedBlock { .. } => ErrorKind::UnterminatedBlock,
            Error::InvalidHeader { .. } => ErrorKind::InvalidHeader,
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            Error::Io(_) => ErrorKind::Io,
            Error::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the 1-based line the error was detected on, if it came from the decoder.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedScalar { line, .. }
            | Error::UnexpectedIndent { line, .. }
            | Error::HeaderMismatch { line, .. }
            | Error::RowCountMismatch { line, .. }
            | Error::UnterminatedBlock { line, .. }
            | Error::InvalidHeader { line, .. }
            | Error::Syntax { line, .. }
            | Error::DuplicateKey { line, .. } => Some(*line),
            Error::Io(_) | Error::Custom(_) => None,
        }
    }

    /// Moves a token-relative error onto its real line and column.
    ///
    /// Scalar and header parsing work on isolated tokens and report positions
    /// relative to that token; the decoder rebases them once it knows where the
    /// token sits in the document.
    pub(crate) fn at(self, line: usize, col_offset: usize) -> Self {
        match self {
            Error::MalformedScalar { col, msg, .. } => Error::MalformedScalar {
                line,
                col: col + col_offset,
                msg,
            },
            Error::InvalidHeader { col, msg, .. } => Error::InvalidHeader {
                line,
                col: col + col_offset,
                msg,
            },
            Error::Syntax {
                col, msg, context, ..
            } => Error::Syntax {
                line,
                col: col + col_offset,
                msg,
                context,
            },
            other => other,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

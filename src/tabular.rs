//! Tabular array detection.
//!
//! An array qualifies for the row format when every element is an object
//! holding only scalars, and every object lists the same keys in the same
//! order. The field list is taken from the first element and fixes the
//! column order for the header and every row.
//!
//! ```rust
//! use toon_codec::{tabular::{detect, Detection}, toon};
//!
//! let rows = toon!([{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]);
//! let rows = rows.as_array().unwrap();
//! assert_eq!(detect(rows), Detection::Tabular(vec!["id", "name"]));
//!
//! let mixed = toon!([{"id": 1}, {"name": "Bob"}]);
//! assert_eq!(detect(mixed.as_array().unwrap()), Detection::NotTabular);
//! ```

use crate::{Map, Value};
use tracing::trace;

/// Outcome of [`detect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection<'a> {
    NotTabular,
    /// Shared field names, in column order.
    Tabular(Vec<&'a str>),
}

impl<'a> Detection<'a> {
    #[must_use]
    pub fn is_tabular(&self) -> bool {
        matches!(self, Detection::Tabular(_))
    }

    /// Returns the field list if the array is tabular.
    #[must_use]
    pub fn fields(&self) -> Option<&[&'a str]> {
        match self {
            Detection::Tabular(fields) => Some(fields),
            Detection::NotTabular => None,
        }
    }
}

/// Decides whether `elements` can be written as a table.
///
/// An empty slice is never tabular since there is no field list to infer,
/// and neither are rows of empty objects, which would leave blank rows.
/// A single flat object is.
#[must_use]
pub fn detect(elements: &[Value]) -> Detection<'_> {
    let first = match elements.first() {
        Some(Value::Object(obj)) => obj,
        Some(_) => {
            trace!(len = elements.len(), "not tabular: first element is not an object");
            return Detection::NotTabular;
        }
        None => return Detection::NotTabular,
    };

    if first.is_empty() {
        trace!(len = elements.len(), "not tabular: first row has no fields");
        return Detection::NotTabular;
    }

    if !is_flat(first) {
        trace!(len = elements.len(), "not tabular: nested value in first row");
        return Detection::NotTabular;
    }

    let fields: Vec<&str> = first.keys().map(String::as_str).collect();

    for (index, element) in elements.iter().enumerate().skip(1) {
        let obj = match element {
            Value::Object(obj) => obj,
            _ => {
                trace!(index, "not tabular: element is not an object");
                return Detection::NotTabular;
            }
        };

        if obj.len() != fields.len() || !obj.keys().map(String::as_str).eq(fields.iter().copied())
        {
            trace!(index, "not tabular: key set or order differs from first row");
            return Detection::NotTabular;
        }

        if !is_flat(obj) {
            trace!(index, "not tabular: nested value in row");
            return Detection::NotTabular;
        }
    }

    trace!(rows = elements.len(), fields = fields.len(), "tabular array");
    Detection::Tabular(fields)
}

#[inline]
fn is_flat(obj: &Map) -> bool {
    obj.values().all(Value::is_scalar)
}

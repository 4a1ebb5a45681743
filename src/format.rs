//! The text format.
//!
//! This module holds no code; it documents the grammar that
//! [`Encoder`](crate::Encoder) writes and [`Decoder`](crate::Decoder) accepts.
//!
//! # Lines and indentation
//!
//! A document is a sequence of lines. Each nesting level adds a fixed
//! number of spaces (2 by default, see [`EncodeOptions::indent`]); the
//! decoder must be configured with the same width. Tabs are never valid
//! indentation. Blank lines are ignored, as are trailing spaces and `\r`.
//!
//! An empty document is an empty object.
//!
//! [`EncodeOptions::indent`]: crate::EncodeOptions::indent
//!
//! # Scalars
//!
//! | Value | Text |
//! |-------|------|
//! | null | `null` |
//! | booleans | `true`, `false` |
//! | integers | `-?(0\|[1-9][0-9]*)` |
//! | floats | the integer form plus `.digits` and/or `e[+-]digits`, e.g. `2.0`, `1e21` |
//! | strings | bare, or `"quoted"` |
//!
//! A string is quoted when it is empty, has leading or trailing whitespace,
//! reads as `null`/`true`/`false` or as a number, contains `:`, `"`, `\`, a
//! control character or the active delimiter, starts with `[` or `{`, or is
//! `-` or starts with `- `. Quoted strings support the escapes `\"`, `\\`,
//! `\n`, `\r`, `\t` and `\uXXXX`.
//!
//! Keys matching `[A-Za-z_][A-Za-z0-9_.]*` are bare; all others are quoted.
//!
//! # Objects
//!
//! One entry per line, in insertion order:
//!
//! ```text
//! name: Alice
//! address:
//!   city: Paris
//! settings: {}
//! ```
//!
//! A key followed by nothing opens a nested block one level deeper. `{}`
//! is the empty object.
//!
//! # Arrays
//!
//! Arrays are introduced by a header `[N]`, where `N` is the exact element
//! count, optionally preceded by a length marker (`[#N]`) and followed by a
//! delimiter mark (`[N|]` for pipe, `[N<TAB>]` for tab, `[N,]` for an
//! explicit comma). The decoder checks `N` against what actually follows.
//!
//! Empty:
//!
//! ```text
//! tags: [0]:
//! ```
//!
//! Tabular, when every element is a flat object with the same keys in the
//! same order. Rows sit one level deeper and list values positionally:
//!
//! ```text
//! users: [2]{id,name}:
//!   1,Alice
//!   2,Bob
//! ```
//!
//! Inline, for scalars when enabled:
//!
//! ```text
//! tags: [3]: a,b,c
//! ```
//!
//! Everything else is a list of `- ` items one level deeper. An object item
//! puts its first entry on the bullet line and the rest one level deeper;
//! a nested array item puts its own items under a bare `-`:
//!
//! ```text
//! items:
//!   - 42
//!   - id: 1
//!     tags:
//!       - a
//!   -
//!     - nested
//!   - [0]:
//! ```
//!
//! The decoder also accepts a header directly attached to its key
//! (`users[2]{id,name}:`) and a list under an explicit header (`items: [2]:`
//! followed by two `- ` items).
//!
//! # Root
//!
//! The root is whatever the first line is: a list item starts a root list,
//! a header starts a root array, an entry starts a root object, and
//! anything else is a single root scalar.
//!
//! ```text
//! [2]{id,name}:
//!   1,Alice
//!   2,Bob
//! ```

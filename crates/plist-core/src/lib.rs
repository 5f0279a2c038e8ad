//! # plist-core
//!
//! A property-list value model with encoders for the two textual plist
//! grammars: Apple's OpenStep/ASCII-style format and the XML plist v1.0
//! format, each in a compact and a pretty (tab-indented) rendering.
//!
//! A [`Value`] is a closed union over dictionary, array, string, real,
//! integer, boolean, data and date. Dictionaries keep their entries in
//! ascending key order, so encoding the same tree always yields byte-identical
//! output. Encoding is a pure function of the tree; there is no decoder and
//! no I/O here — callers own writing the result wherever it needs to go.
//!
//! ## Quick start
//!
//! ```rust
//! use plist_core::{encode, Format, Value};
//!
//! let mut root = Value::default();          // an empty dictionary
//! *root.entry("title").unwrap() = "Hello plist".into();
//! *root.entry("count").unwrap() = 3.into();
//! *root.entry("flags").unwrap() = Value::Array(vec![true.into(), false.into()]);
//!
//! let text = encode(&root, Format::Text, false).unwrap();
//! assert_eq!(text, "// !$*UTF8*$!\n{count=3;flags=(YES,NO);title=\"Hello plist\";}");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tree: typed accessors, numeric coercions,
//!   container operations
//! - [`encoder`] — `encode(value, format, pretty)` for text and XML output
//! - [`error`] — error types for accessor and encoding failures

pub mod encoder;
pub mod error;
pub mod value;

pub use encoder::{encode, Format};
pub use error::{PlistError, Result};
pub use value::{Kind, Value};

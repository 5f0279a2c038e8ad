//! The property-list value model.
//!
//! A [`Value`] is a closed tagged union over the eight plist cases
//! (dictionary, array, string, real, integer, boolean, data, date). Typed
//! accessors either return the stored payload, apply a defined numeric
//! coercion, or fail with [`PlistError::WrongType`]; read-only container
//! access fails with the range kind when a key or index is absent, while
//! mutable container access auto-creates missing entries instead.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::{PlistError, Result};

/// The case discriminant of a [`Value`]. Carried in error messages and
/// returned by [`Value::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Dictionary,
    Array,
    String,
    Real,
    Integer,
    Boolean,
    Data,
    Date,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Dictionary => "dictionary",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Real => "real",
            Kind::Integer => "integer",
            Kind::Boolean => "boolean",
            Kind::Data => "data",
            Kind::Date => "date",
        };
        f.write_str(name)
    }
}

/// A property-list value. Exactly one case is active at any time; assigning a
/// new payload (via the `From` conversions) replaces the case wholesale.
///
/// Dictionaries use a sorted map, so iteration — and therefore encoded output —
/// always visits entries in ascending key order regardless of insertion order.
/// Arrays preserve insertion order. Containers own their children outright, so
/// a value is always a tree; cycles cannot be constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Dictionary(BTreeMap<String, Value>),
    Array(Vec<Value>),
    String(String),
    Real(f64),
    Integer(i64),
    Boolean(bool),
    Data(Vec<u8>),
    Date(DateTime<Utc>),
}

/// The default value is an *empty dictionary*, not an absent value. This is
/// what auto-inserted dictionary entries and auto-extended array slots hold,
/// and it encodes as `{}` / `<dict></dict>`.
impl Default for Value {
    fn default() -> Self {
        Value::Dictionary(BTreeMap::new())
    }
}

impl Value {
    /// The active case.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Dictionary(_) => Kind::Dictionary,
            Value::Array(_) => Kind::Array,
            Value::String(_) => Kind::String,
            Value::Real(_) => Kind::Real,
            Value::Integer(_) => Kind::Integer,
            Value::Boolean(_) => Kind::Boolean,
            Value::Data(_) => Kind::Data,
            Value::Date(_) => Kind::Date,
        }
    }

    fn wrong_type(&self, expected: &'static str) -> PlistError {
        PlistError::WrongType {
            expected,
            found: self.kind(),
        }
    }

    // ------------------------------------------------------------------
    // Type queries
    // ------------------------------------------------------------------

    pub fn is_dictionary(&self) -> bool {
        matches!(self, Value::Dictionary(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Value::Data(_))
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    // ------------------------------------------------------------------
    // Coercing accessors
    // ------------------------------------------------------------------

    /// Read as a boolean. Booleans return themselves; reals and integers
    /// coerce to `value != 0`. Everything else is a type error.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            Value::Real(r) => Ok(*r != 0.0),
            Value::Integer(i) => Ok(*i != 0),
            _ => Err(self.wrong_type("a boolean or numeric")),
        }
    }

    /// Read as a signed 64-bit integer. Reals truncate; booleans coerce to
    /// 1 or 0. Everything else is a type error.
    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            Value::Real(r) => Ok(*r as i64),
            Value::Boolean(b) => Ok(i64::from(*b)),
            _ => Err(self.wrong_type("a numeric or boolean")),
        }
    }

    /// Read as a 64-bit float. Integers widen; booleans coerce to 1.0 or 0.0.
    /// Everything else is a type error.
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Value::Real(r) => Ok(*r),
            Value::Integer(i) => Ok(*i as f64),
            Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            _ => Err(self.wrong_type("a numeric or boolean")),
        }
    }

    // ------------------------------------------------------------------
    // Exact-case accessors (no cross-coercion)
    // ------------------------------------------------------------------

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.wrong_type("a string")),
        }
    }

    pub fn as_dictionary(&self) -> Result<&BTreeMap<String, Value>> {
        match self {
            Value::Dictionary(d) => Ok(d),
            _ => Err(self.wrong_type("a dictionary")),
        }
    }

    pub fn as_dictionary_mut(&mut self) -> Result<&mut BTreeMap<String, Value>> {
        match self {
            Value::Dictionary(d) => Ok(d),
            _ => Err(self.wrong_type("a dictionary")),
        }
    }

    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.wrong_type("an array")),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.wrong_type("an array")),
        }
    }

    pub fn as_data(&self) -> Result<&[u8]> {
        match self {
            Value::Data(d) => Ok(d),
            _ => Err(self.wrong_type("a data")),
        }
    }

    pub fn as_data_mut(&mut self) -> Result<&mut Vec<u8>> {
        match self {
            Value::Data(d) => Ok(d),
            _ => Err(self.wrong_type("a data")),
        }
    }

    pub fn as_date(&self) -> Result<DateTime<Utc>> {
        match self {
            Value::Date(d) => Ok(*d),
            _ => Err(self.wrong_type("a date")),
        }
    }

    // ------------------------------------------------------------------
    // Dictionary operations
    // ------------------------------------------------------------------

    /// Read-only lookup. Fails with [`PlistError::NoSuchKey`] when the key is
    /// absent — only the mutable path ([`Value::entry`]) auto-creates.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.as_dictionary()?
            .get(key)
            .ok_or_else(|| PlistError::NoSuchKey(key.to_string()))
    }

    /// Mutable lookup. A missing key is inserted with a default
    /// (empty-dictionary) value before the reference is returned.
    pub fn entry(&mut self, key: impl Into<String>) -> Result<&mut Value> {
        Ok(self.as_dictionary_mut()?.entry(key.into()).or_default())
    }

    /// Dictionary membership test.
    pub fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.as_dictionary()?.contains_key(key))
    }

    // ------------------------------------------------------------------
    // Array operations
    // ------------------------------------------------------------------

    /// Read-only indexing, bounds-checked.
    pub fn at(&self, index: usize) -> Result<&Value> {
        let items = self.as_array()?;
        let len = items.len();
        items
            .get(index)
            .ok_or(PlistError::OutOfRange { index, len })
    }

    /// Mutable indexing. Indexing past the end extends the array with default
    /// (empty-dictionary) values up to and including `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value> {
        let items = self.as_array_mut()?;
        if index >= items.len() {
            items.resize_with(index + 1, Value::default);
        }
        Ok(&mut items[index])
    }

    /// Number of elements in an array.
    pub fn len(&self) -> Result<usize> {
        Ok(self.as_array()?.len())
    }

    /// True when an array has no elements.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.as_array()?.is_empty())
    }

    /// Grow or shrink an array; new slots hold default values.
    pub fn resize(&mut self, len: usize) -> Result<()> {
        self.as_array_mut()?.resize_with(len, Value::default);
        Ok(())
    }

    /// Append to an array.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        self.as_array_mut()?.push(value.into());
        Ok(())
    }

    /// Append a byte to a data value.
    pub fn push_byte(&mut self, byte: u8) -> Result<()> {
        self.as_data_mut()?.push(byte);
        Ok(())
    }

    /// Iterate over an array's elements in insertion order.
    pub fn iter(&self) -> Result<std::slice::Iter<'_, Value>> {
        Ok(self.as_array()?.iter())
    }

    /// Mutably iterate over an array's elements in insertion order.
    pub fn iter_mut(&mut self) -> Result<std::slice::IterMut<'_, Value>> {
        Ok(self.as_array_mut()?.iter_mut())
    }
}

// ----------------------------------------------------------------------
// Literal conversions. Assigning `v = x.into()` switches the active case.
// ----------------------------------------------------------------------

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Integer(i64::from(v))
            }
        })*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Real(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Data(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Data(v.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Dictionary(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Date(v)
    }
}

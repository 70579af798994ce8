//! Attribute value kinds and the tagged value container.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RegistryError;

/// The kind of value an attribute holds.
///
/// Kinds are compared by tag: an `Int` value is never accepted where
/// `Bool` is declared, and vice versa.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrKind {
    /// A boolean flag.
    Bool,
    /// A signed 64-bit integer.
    Int,
    /// A UTF-8 string.
    String,
    /// An ordered sequence of strings.
    StringArray,
}

impl AttrKind {
    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            AttrKind::Bool => "bool",
            AttrKind::Int => "int",
            AttrKind::String => "string",
            AttrKind::StringArray => "array<string>",
        }
    }

    /// Stable type token reported to tooling by option introspection.
    ///
    /// Tooling matches on these strings, so they must never change.
    /// Booleans and integers share the `IntImm` token.
    pub fn type_key(self) -> &'static str {
        match self {
            AttrKind::Bool | AttrKind::Int => "IntImm",
            AttrKind::String => "runtime.String",
            AttrKind::StringArray => "Array",
        }
    }
}

impl fmt::Display for AttrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single attribute value. One variant per [`AttrKind`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// A boolean flag.
    Bool(bool),
    /// A signed 64-bit integer.
    Int(i64),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence of strings.
    StringArray(Vec<String>),
}

impl AttrValue {
    /// The kind tag of this value.
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Bool(_) => AttrKind::Bool,
            AttrValue::Int(_) => AttrKind::Int,
            AttrValue::String(_) => AttrKind::String,
            AttrValue::StringArray(_) => AttrKind::StringArray,
        }
    }

    /// Returns the boolean, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the strings, if this is a `StringArray`.
    pub fn as_string_array(&self) -> Option<&[String]> {
        match self {
            AttrValue::StringArray(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Int(i) => write!(f, "{i}"),
            AttrValue::String(s) => write!(f, "{s:?}"),
            AttrValue::StringArray(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(i: i64) -> Self {
        AttrValue::Int(i)
    }
}

impl From<i32> for AttrValue {
    fn from(i: i32) -> Self {
        AttrValue::Int(i64::from(i))
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::String(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::String(s)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(items: Vec<String>) -> Self {
        AttrValue::StringArray(items)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(items: Vec<&str>) -> Self {
        AttrValue::StringArray(items.into_iter().map(str::to_owned).collect())
    }
}

/// Converts untyped JSON into an attribute value.
///
/// Only the shapes with a direct [`AttrKind`] counterpart are accepted:
/// booleans, integers that fit in `i64`, strings, and arrays whose
/// elements are all strings.
impl TryFrom<serde_json::Value> for AttrValue {
    type Error = RegistryError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Ok(AttrValue::Bool(b)),
            Value::Number(n) => n.as_i64().map(AttrValue::Int).ok_or_else(|| {
                RegistryError::InvalidConfig(format!("number {n} is not a 64-bit integer"))
            }),
            Value::String(s) => Ok(AttrValue::String(s)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(RegistryError::InvalidConfig(format!(
                        "array element {other} is not a string"
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(AttrValue::StringArray),
            Value::Null => Err(RegistryError::InvalidConfig(
                "null is not an attribute value".into(),
            )),
            Value::Object(_) => Err(RegistryError::InvalidConfig(
                "nested objects are not attribute values".into(),
            )),
        }
    }
}

/// A Rust type that maps onto exactly one [`AttrKind`].
///
/// Used by typed declaration (`add_attr_option::<bool>`) and typed lookup
/// (`Instance::get::<bool>`).
pub trait AttrType: Sized {
    /// The kind this type is stored as.
    const KIND: AttrKind;

    /// Wrap into an [`AttrValue`].
    fn into_value(self) -> AttrValue;

    /// Extract from an [`AttrValue`]; `None` when the kinds differ.
    fn from_value(value: &AttrValue) -> Option<Self>;
}

impl AttrType for bool {
    const KIND: AttrKind = AttrKind::Bool;

    fn into_value(self) -> AttrValue {
        AttrValue::Bool(self)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        value.as_bool()
    }
}

impl AttrType for i64 {
    const KIND: AttrKind = AttrKind::Int;

    fn into_value(self) -> AttrValue {
        AttrValue::Int(self)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        value.as_int()
    }
}

impl AttrType for String {
    const KIND: AttrKind = AttrKind::String;

    fn into_value(self) -> AttrValue {
        AttrValue::String(self)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl AttrType for Vec<String> {
    const KIND: AttrKind = AttrKind::StringArray;

    fn into_value(self) -> AttrValue {
        AttrValue::StringArray(self)
    }

    fn from_value(value: &AttrValue) -> Option<Self> {
        value.as_string_array().map(<[String]>::to_vec)
    }
}

//! Validated, immutable realizations of a kind.

use std::collections::BTreeMap;
use std::fmt;

use kindreg_types::{AttrType, AttrValue, RegistryError};

/// A kind instantiated from a validated configuration.
///
/// Holds only the attributes that were supplied or defaulted, and never
/// an attribute the kind did not declare. Instances own their values and
/// keep no reference back to the registry that built them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    family: &'static str,
    kind: String,
    attrs: BTreeMap<String, AttrValue>,
}

impl Instance {
    pub(crate) fn new(
        family: &'static str,
        kind: String,
        attrs: BTreeMap<String, AttrValue>,
    ) -> Self {
        Self {
            family,
            kind,
            attrs,
        }
    }

    /// The kind this instance was created from.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The family of the registry that created this instance.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Typed lookup.
    ///
    /// `Ok(None)` means the attribute is undefined: declared without a
    /// default and not supplied. A stored value of a different kind than
    /// `T` is a caller error and yields [`RegistryError::Type`].
    pub fn get<T: AttrType>(&self, name: &str) -> Result<Option<T>, RegistryError> {
        let Some(value) = self.attrs.get(name) else {
            return Ok(None);
        };
        T::from_value(value)
            .map(Some)
            .ok_or_else(|| RegistryError::Type {
                attr: name.to_owned(),
                expected: T::KIND,
                actual: value.kind(),
            })
    }

    /// Typed lookup that falls back when the attribute is undefined.
    pub fn get_or<T: AttrType>(&self, name: &str, fallback: T) -> Result<T, RegistryError> {
        Ok(self.get(name)?.unwrap_or(fallback))
    }

    /// Untyped lookup.
    pub fn value(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Whether the attribute is defined.
    pub fn is_defined(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Defined attributes, ordered by name.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.kind)?;
        for (i, (name, value)) in self.attrs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str("}")
    }
}

//! Declared attribute options and kind descriptors.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::value::{AttrKind, AttrValue};

/// One declared attribute of a kind: name, value kind, optional default.
///
/// An option without a default is optional, not required. Leaving it out
/// of a configuration makes it undefined on the resulting instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttrOptionSpec {
    name: String,
    kind: AttrKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<AttrValue>,
}

impl AttrOptionSpec {
    /// Option name, unique within its descriptor.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared value kind.
    pub fn kind(&self) -> AttrKind {
        self.kind
    }

    /// Default value, if one was declared. Always of [`Self::kind`].
    pub fn default_value(&self) -> Option<&AttrValue> {
        self.default.as_ref()
    }
}

/// A named component kind and its ordered attribute options.
///
/// Options keep declaration order; that order is what introspection
/// reports. Deserialization replays every option through
/// [`KindDescriptor::add_option`], so the same checks apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DescriptorRepr")]
pub struct KindDescriptor {
    name: String,
    options: Vec<AttrOptionSpec>,
}

impl KindDescriptor {
    /// Create a descriptor with no options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// The kind name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All declared options, in declaration order.
    pub fn options(&self) -> &[AttrOptionSpec] {
        &self.options
    }

    /// Look up a declared option by name.
    pub fn option(&self, name: &str) -> Option<&AttrOptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Append an option.
    ///
    /// Fails with [`RegistryError::Schema`] if `name` is already declared
    /// on this kind, or if `default` is present and of a different kind.
    pub fn add_option(
        &mut self,
        name: impl Into<String>,
        kind: AttrKind,
        default: Option<AttrValue>,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.option(&name).is_some() {
            return Err(RegistryError::schema(
                &self.name,
                format!("duplicate attribute {name}"),
            ));
        }
        if let Some(d) = &default {
            if d.kind() != kind {
                return Err(RegistryError::schema(
                    &self.name,
                    format!(
                        "default for attribute {name} expected {kind}, got {}",
                        d.kind()
                    ),
                ));
            }
        }
        self.options.push(AttrOptionSpec {
            name,
            kind,
            default,
        });
        Ok(())
    }
}

#[derive(Deserialize)]
struct DescriptorRepr {
    name: String,
    options: Vec<OptionRepr>,
}

#[derive(Deserialize)]
struct OptionRepr {
    name: String,
    kind: AttrKind,
    #[serde(default)]
    default: Option<AttrValue>,
}

impl TryFrom<DescriptorRepr> for KindDescriptor {
    type Error = RegistryError;

    fn try_from(repr: DescriptorRepr) -> Result<Self, Self::Error> {
        let mut descriptor = KindDescriptor::new(repr.name);
        for o in repr.options {
            descriptor.add_option(o.name, o.kind, o.default)?;
        }
        Ok(descriptor)
    }
}

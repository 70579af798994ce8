//! Kind registry: declare kinds, validate configurations, create instances.

use std::collections::HashMap;

use kindreg_types::{
    AttrKind, AttrType, AttrValue, ConfigMap, KindDescriptor, RegistryError, config_from_json,
};

use crate::instance::Instance;

/// Registry of kinds for one family (executors, runtimes, ...).
///
/// Declaration takes `&mut self` and happens during startup. Once the
/// registry is shared it is only reachable through `&Registry`, so
/// lookups and creation need no synchronization.
#[derive(Debug, Clone)]
pub struct Registry {
    family: &'static str,
    kinds: Vec<KindDescriptor>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Create an empty registry for the given family label.
    pub fn new(family: &'static str) -> Self {
        Self {
            family,
            kinds: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// The family label, e.g. `"executor"`.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Declare a kind, or reopen it if it already exists.
    ///
    /// Never fails. Options added through the returned builder accumulate
    /// on the one descriptor registered under `name`.
    pub fn declare(&mut self, name: impl Into<String>) -> KindBuilder<'_> {
        let name = name.into();
        let family = self.family;
        let slot = match self.index.get(&name) {
            Some(&i) => i,
            None => {
                tracing::debug!(family, kind = %name, "declared kind");
                self.kinds.push(KindDescriptor::new(name.clone()));
                let i = self.kinds.len() - 1;
                self.index.insert(name, i);
                i
            }
        };
        KindBuilder {
            family,
            descriptor: &mut self.kinds[slot],
        }
    }

    /// Look up a kind's descriptor.
    pub fn descriptor(&self, kind: &str) -> Option<&KindDescriptor> {
        self.index.get(kind).map(|&i| &self.kinds[i])
    }

    /// Whether `kind` is registered.
    pub fn contains(&self, kind: &str) -> bool {
        self.index.contains_key(kind)
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// All registered kind names, in first-declaration order.
    pub fn list_kinds(&self) -> Vec<&str> {
        self.kinds.iter().map(KindDescriptor::name).collect()
    }

    /// Option name to stable type token, in declaration order.
    pub fn list_options(&self, kind: &str) -> Result<Vec<(&str, &'static str)>, RegistryError> {
        let descriptor = self.lookup(kind)?;
        Ok(descriptor
            .options()
            .iter()
            .map(|o| (o.name(), o.kind().type_key()))
            .collect())
    }

    /// Validate `config` against `kind` and build an [`Instance`].
    ///
    /// Every supplied key must be a declared option with a value of the
    /// declared kind. Defaults fill the options the caller left out;
    /// options with no default stay undefined. Validation runs to
    /// completion before anything is built.
    pub fn create(&self, kind: &str, config: ConfigMap) -> Result<Instance, RegistryError> {
        let descriptor = self.lookup(kind)?;

        for (name, value) in &config {
            let Some(spec) = descriptor.option(name) else {
                tracing::debug!(family = self.family, kind, attr = %name, "unknown attribute");
                return Err(RegistryError::schema(
                    kind,
                    format!("unknown attribute {name}"),
                ));
            };
            if value.kind() != spec.kind() {
                tracing::debug!(
                    family = self.family,
                    kind,
                    attr = %name,
                    expected = %spec.kind(),
                    actual = %value.kind(),
                    "attribute kind mismatch"
                );
                return Err(RegistryError::Type {
                    attr: name.clone(),
                    expected: spec.kind(),
                    actual: value.kind(),
                });
            }
        }

        let mut attrs = config;
        for spec in descriptor.options() {
            if let Some(default) = spec.default_value() {
                attrs
                    .entry(spec.name().to_owned())
                    .or_insert_with(|| default.clone());
            }
        }

        tracing::debug!(family = self.family, kind, attrs = attrs.len(), "created instance");
        Ok(Instance::new(self.family, kind.to_owned(), attrs))
    }

    /// Convert an untyped JSON object and [`create`](Self::create) from it.
    pub fn create_from_json(
        &self,
        kind: &str,
        config: &serde_json::Value,
    ) -> Result<Instance, RegistryError> {
        // Unknown kinds are reported before config conversion problems.
        self.lookup(kind)?;
        self.create(kind, config_from_json(config)?)
    }

    fn lookup(&self, kind: &str) -> Result<&KindDescriptor, RegistryError> {
        self.descriptor(kind).ok_or_else(|| {
            tracing::debug!(family = self.family, kind, "unknown kind");
            RegistryError::not_found(self.family, kind)
        })
    }
}

/// Fluent declaration of options on one kind.
///
/// Each call consumes the builder and hands it back on success, so
/// declarations chain with `?`:
///
/// ```
/// # use kindreg::Registry;
/// # fn main() -> Result<(), kindreg::RegistryError> {
/// let mut registry = Registry::new("executor");
/// registry
///     .declare("graph")
///     .add_attr_option_with_default::<bool>("link-params", false)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct KindBuilder<'a> {
    family: &'static str,
    descriptor: &'a mut KindDescriptor,
}

impl KindBuilder<'_> {
    /// The kind being declared.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Declare an option with an explicit kind and optional default.
    pub fn add_option(
        self,
        name: impl Into<String>,
        value_kind: AttrKind,
        default: Option<AttrValue>,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        let has_default = default.is_some();
        self.descriptor.add_option(name.clone(), value_kind, default)?;
        tracing::debug!(
            family = self.family,
            kind = %self.descriptor.name(),
            attr = %name,
            %value_kind,
            has_default,
            "declared attribute option"
        );
        Ok(self)
    }

    /// Declare an option of type `T` with no default.
    pub fn add_attr_option<T: AttrType>(
        self,
        name: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        self.add_option(name, T::KIND, None)
    }

    /// Declare an option of type `T` with a default value.
    pub fn add_attr_option_with_default<T: AttrType>(
        self,
        name: impl Into<String>,
        default: impl Into<T>,
    ) -> Result<Self, RegistryError> {
        self.add_option(name, T::KIND, Some(default.into().into_value()))
    }
}

//! Process-wide registries, one per family.
//!
//! Registration runs once, from a single ordered startup call to
//! [`Family::init`]. Every module that defines kinds contributes a
//! [`Registrar`]; the family's built-in registrar always runs first.
//! After `init` the registry is only reachable as `&'static Registry`.

use std::sync::OnceLock;

use kindreg_types::{ConfigMap, RegistryError};

use crate::builtin;
use crate::instance::Instance;
use crate::registry::Registry;

/// A registration function contributed by a kind-defining module.
pub type Registrar = fn(&mut Registry) -> Result<(), RegistryError>;

/// A lazily installed, process-wide [`Registry`].
pub struct Family {
    name: &'static str,
    builtins: Registrar,
    cell: OnceLock<Registry>,
}

/// Executors: how a compiled module is driven (`graph`, `aot`).
pub static EXECUTORS: Family = Family::new("executor", builtin::register_executors);

/// Runtimes: what the compiled module links against (`crt`, `cpp`).
pub static RUNTIMES: Family = Family::new("runtime", builtin::register_runtimes);

impl Family {
    /// Create an uninstalled family. `builtins` runs before any
    /// registrar passed to [`init`](Self::init).
    pub const fn new(name: &'static str, builtins: Registrar) -> Self {
        Self {
            name,
            builtins,
            cell: OnceLock::new(),
        }
    }

    /// The family label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build and install the registry.
    ///
    /// Runs the built-in registrar, then `registrars` in order. Any
    /// registrar error aborts installation. A second call fails with
    /// [`RegistryError::AlreadyInitialized`].
    pub fn init(&self, registrars: &[Registrar]) -> Result<&Registry, RegistryError> {
        if self.cell.get().is_some() {
            return Err(RegistryError::AlreadyInitialized(self.name.into()));
        }

        let mut registry = Registry::new(self.name);
        (self.builtins)(&mut registry)?;
        for register in registrars {
            register(&mut registry)?;
        }
        let kinds = registry.len();

        // Lost a race with a concurrent init.
        if self.cell.set(registry).is_err() {
            return Err(RegistryError::AlreadyInitialized(self.name.into()));
        }
        tracing::debug!(family = self.name, kinds, "installed registry");
        self.get()
    }

    /// Whether [`init`](Self::init) has completed.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The installed registry.
    pub fn get(&self) -> Result<&Registry, RegistryError> {
        self.cell
            .get()
            .ok_or_else(|| RegistryError::NotInitialized(self.name.into()))
    }

    /// [`Registry::create`] on the installed registry.
    pub fn create(&self, kind: &str, config: ConfigMap) -> Result<Instance, RegistryError> {
        self.get()?.create(kind, config)
    }

    /// [`Registry::list_kinds`] on the installed registry.
    pub fn list_kinds(&self) -> Result<Vec<&str>, RegistryError> {
        Ok(self.get()?.list_kinds())
    }

    /// [`Registry::list_options`] on the installed registry.
    pub fn list_options(&self, kind: &str) -> Result<Vec<(&str, &'static str)>, RegistryError> {
        self.get()?.list_options(kind)
    }
}

impl std::fmt::Debug for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Family")
            .field("name", &self.name)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

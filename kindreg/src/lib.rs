#![deny(missing_docs)]
//! Typed component registry with declarative configuration schemas.
//!
//! Modules register named kinds (executors, runtimes) and the typed
//! attribute options each kind accepts. Callers later create an
//! [`Instance`] of a kind from a configuration map; the registry checks
//! every supplied attribute against the declared schema and fills in
//! declared defaults.
//!
//! ## Registration
//!
//! ```
//! use kindreg::{ConfigMap, EXECUTORS, Registry, RegistryError, declare_kind};
//!
//! fn register_test_executor(registry: &mut Registry) -> Result<(), RegistryError> {
//!     declare_kind!(registry, "TestExecutor", {
//!         "my_bool": bool,
//!         "your_names": Vec<String>,
//!         "defaulty_the_default_option": bool = false,
//!     })
//! }
//!
//! # fn main() -> Result<(), RegistryError> {
//! EXECUTORS.init(&[register_test_executor])?;
//!
//! let exec = EXECUTORS.create(
//!     "TestExecutor",
//!     ConfigMap::from([("my_bool".into(), true.into())]),
//! )?;
//! assert_eq!(exec.get::<bool>("my_bool")?, Some(true));
//! assert_eq!(exec.get::<Vec<String>>("your_names")?, None);
//! assert_eq!(exec.get::<bool>("defaulty_the_default_option")?, Some(false));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Declaration needs `&mut Registry` and happens once at startup.
//! Afterwards the registry is shared read-only; `create`, `list_kinds`
//! and `list_options` are synchronous, in-memory, and safe from any
//! number of threads.

pub mod builtin;
pub mod family;
pub mod instance;
mod macros;
pub mod registry;

pub use family::{EXECUTORS, Family, RUNTIMES, Registrar};
pub use instance::Instance;
pub use kindreg_types::{
    AttrKind, AttrOptionSpec, AttrType, AttrValue, ConfigMap, KindDescriptor, RegistryError,
    config_from_json,
};
pub use registry::{KindBuilder, Registry};

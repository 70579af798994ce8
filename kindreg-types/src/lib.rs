//! # kindreg-types — vocabulary for typed component registries
//!
//! This crate defines the data that flows through a component registry:
//! what an attribute value is, how an attribute option is declared, what
//! a kind looks like, and what can go wrong. The registry itself, the
//! validation algorithm, and instances live in `kindreg`.
//!
//! | Type | What it is |
//! |------|------------|
//! | [`AttrKind`] | The closed set of value kinds, with stable type tokens |
//! | [`AttrValue`] | A tagged value, one variant per kind |
//! | [`AttrType`] | Binds a Rust type to its kind for typed access |
//! | [`AttrOptionSpec`] | One declared option: name, kind, default |
//! | [`KindDescriptor`] | A kind name plus its ordered options |
//! | [`ConfigMap`] | Caller-supplied attribute values |
//! | [`RegistryError`] | Not found, schema, and type errors |

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod schema;
pub mod value;

pub use config::{ConfigMap, config_from_json};
pub use error::RegistryError;
pub use schema::{AttrOptionSpec, KindDescriptor};
pub use value::{AttrKind, AttrType, AttrValue};

//! Configuration maps handed to kind creation.

use std::collections::BTreeMap;

use crate::error::RegistryError;
use crate::value::AttrValue;

/// Attribute name to value, as supplied by a caller.
pub type ConfigMap = BTreeMap<String, AttrValue>;

/// Convert an untyped JSON object into a [`ConfigMap`].
///
/// Every member must convert with `AttrValue::try_from`. This does not
/// check names or kinds against any schema; creation does that.
pub fn config_from_json(value: &serde_json::Value) -> Result<ConfigMap, RegistryError> {
    let obj = value.as_object().ok_or_else(|| {
        RegistryError::InvalidConfig(format!("expected a JSON object, got {value}"))
    })?;
    obj.iter()
        .map(|(k, v)| {
            AttrValue::try_from(v.clone())
                .map(|av| (k.clone(), av))
                .map_err(|e| match e {
                    RegistryError::InvalidConfig(msg) => {
                        RegistryError::InvalidConfig(format!("attribute {k}: {msg}"))
                    }
                    other => other,
                })
        })
        .collect()
}

//! Kinds every process registers.

use kindreg_types::RegistryError;

use crate::declare_kind;
use crate::registry::Registry;

/// Built-in executors: `graph` and `aot`.
pub fn register_executors(registry: &mut Registry) -> Result<(), RegistryError> {
    declare_kind!(registry, "graph", {
        "link-params": bool = false,
    })?;
    declare_kind!(registry, "aot", {
        "link-params": bool = false,
        "unpacked-api": bool,
        "interface-api": String,
        "workspace-byte-alignment": i64,
        "constant-byte-alignment": i64,
    })
}

/// Built-in runtimes: `crt` and `cpp`.
pub fn register_runtimes(registry: &mut Registry) -> Result<(), RegistryError> {
    declare_kind!(registry, "crt", {
        "system-lib": bool,
    })?;
    declare_kind!(registry, "cpp", {
        "system-lib": bool,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindreg_types::{AttrValue, ConfigMap};

    #[test]
    fn builtin_executors_declare_expected_options() {
        let mut r = Registry::new("executor");
        register_executors(&mut r).unwrap();
        assert_eq!(r.list_kinds(), vec!["graph", "aot"]);
        assert_eq!(
            r.list_options("aot").unwrap(),
            vec![
                ("link-params", "IntImm"),
                ("unpacked-api", "IntImm"),
                ("interface-api", "runtime.String"),
                ("workspace-byte-alignment", "IntImm"),
                ("constant-byte-alignment", "IntImm"),
            ]
        );
    }

    #[test]
    fn graph_defaults_link_params_off() {
        let mut r = Registry::new("executor");
        register_executors(&mut r).unwrap();
        let graph = r.create("graph", ConfigMap::new()).unwrap();
        assert_eq!(graph.value("link-params"), Some(&AttrValue::Bool(false)));
    }

    #[test]
    fn builtin_runtimes() {
        let mut r = Registry::new("runtime");
        register_runtimes(&mut r).unwrap();
        assert_eq!(r.list_kinds(), vec!["crt", "cpp"]);
        let crt = r
            .create("crt", ConfigMap::from([("system-lib".into(), true.into())]))
            .unwrap();
        assert_eq!(crt.get::<bool>("system-lib"), Ok(Some(true)));
    }

    #[test]
    fn registering_twice_is_a_schema_error() {
        let mut r = Registry::new("runtime");
        register_runtimes(&mut r).unwrap();
        let err = register_runtimes(&mut r).unwrap_err();
        assert!(matches!(err, RegistryError::Schema { .. }));
        assert_eq!(r.len(), 2);
    }
}

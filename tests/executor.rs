//! End-to-end: a test-defined executor registered alongside the
//! built-ins through the process-wide executor family.

use std::sync::LazyLock;

use kindreg::{EXECUTORS, Registry, declare_kind};
use kindreg_types::{ConfigMap, RegistryError, config_from_json};
use serde_json::json;

fn register_test_executor(registry: &mut Registry) -> Result<(), RegistryError> {
    declare_kind!(registry, "TestExecutor", {
        "my_bool": bool,
        "your_names": Vec<String>,
        "another_option": String,
        "defaulty_the_default_option": bool = false,
    })
}

static EXECUTOR_REGISTRY: LazyLock<&'static Registry> =
    LazyLock::new(|| EXECUTORS.init(&[register_test_executor]).unwrap());

fn executors() -> &'static Registry {
    *EXECUTOR_REGISTRY
}

fn config(pairs: serde_json::Value) -> ConfigMap {
    config_from_json(&pairs).unwrap()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Executor creation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn create() {
    let exec = executors()
        .create("TestExecutor", config(json!({"my_bool": true})))
        .unwrap();
    assert_eq!(exec.kind(), "TestExecutor");
    assert_eq!(exec.family(), "executor");
    assert_eq!(exec.get::<bool>("my_bool"), Ok(Some(true)));
    assert_eq!(exec.get::<Vec<String>>("your_names"), Ok(None));
    assert_eq!(exec.get::<bool>("defaulty_the_default_option"), Ok(Some(false)));
}

#[test]
fn unknown_attr() {
    let err = executors()
        .create("TestExecutor", config(json!({"woofles": true})))
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::schema("TestExecutor", "unknown attribute woofles")
    );
}

#[test]
fn incorrect_attr_type() {
    let err = executors()
        .create("TestExecutor", config(json!({"my_bool": "snuck_in"})))
        .unwrap_err();
    assert_eq!(err.to_string(), "attribute my_bool expected bool, got string");
}

#[test]
fn unregistered_name() {
    let err = executors()
        .create("NeverNameAnExecutorThis", ConfigMap::new())
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[test]
fn create_from_json_matches_typed_create() {
    let from_json = executors()
        .create_from_json(
            "TestExecutor",
            &json!({"your_names": ["alice", "bob"], "another_option": "x"}),
        )
        .unwrap();
    assert_eq!(
        from_json.get::<Vec<String>>("your_names"),
        Ok(Some(vec!["alice".to_string(), "bob".to_string()]))
    );
    assert_eq!(from_json.get::<String>("another_option"), Ok(Some("x".into())));
    assert_eq!(from_json.get::<bool>("my_bool"), Ok(None));
}

#[test]
fn builtin_aot_executor() {
    let aot = executors()
        .create(
            "aot",
            config(json!({"interface-api": "c", "workspace-byte-alignment": 16})),
        )
        .unwrap();
    assert_eq!(
        aot.to_string(),
        "aot{interface-api=\"c\", link-params=false, workspace-byte-alignment=16}"
    );
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Introspection
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn list_executors() {
    let names = executors().list_kinds();
    assert!(!names.is_empty());
    assert_eq!(names.iter().filter(|n| **n == "TestExecutor").count(), 1);
    assert_eq!(names, vec!["graph", "aot", "TestExecutor"]);
}

#[test]
fn list_executor_options() {
    let options: std::collections::HashMap<_, _> = executors()
        .list_options("TestExecutor")
        .unwrap()
        .into_iter()
        .collect();
    assert!(!options.is_empty());
    assert_eq!(options["my_bool"], "IntImm");
    assert_eq!(options["your_names"], "Array");
    assert_eq!(options["another_option"], "runtime.String");
}

#[test]
fn list_executor_options_no_executor() {
    let err = executors()
        .list_options("NeverNameAnExecutorThis")
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown executor: NeverNameAnExecutorThis");
}

#[test]
fn family_forwards_to_installed_registry() {
    let _ = executors();
    assert_eq!(
        EXECUTORS.list_kinds().unwrap(),
        executors().list_kinds()
    );
    assert!(matches!(
        EXECUTORS.init(&[]),
        Err(RegistryError::AlreadyInitialized(_))
    ));
}

use super::*;

const SAMPLE_JSON: &str = r#"{
    "modules": [
        {
            "name": "ietf-interfaces",
            "namespace": "urn:ietf:params:xml:ns:yang:ietf-interfaces",
            "top_level": ["interfaces", "interfaces-state"]
        },
        {
            "name": "vendor-system",
            "namespace": "urn:vendor:system",
            "top_level": ["system", "interfaces"]
        },
        {
            "name": "iana-if-type",
            "namespace": "urn:ietf:params:xml:ns:yang:iana-if-type"
        }
    ]
}"#;

#[test]
fn parse_registry() {
    let registry = SchemaRegistry::from_json(SAMPLE_JSON).unwrap();
    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());

    let info = registry.get("vendor-system").unwrap();
    assert_eq!(info.namespace, "urn:vendor:system");
    assert_eq!(info.top_level, vec!["system", "interfaces"]);

    assert!(registry.get("iana-if-type").unwrap().top_level.is_empty());
}

#[test]
fn iteration_follows_registration_order() {
    let registry = SchemaRegistry::from_json(SAMPLE_JSON).unwrap();
    let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["ietf-interfaces", "vendor-system", "iana-if-type"]);
}

#[test]
fn resolve_by_namespace() {
    let registry = SchemaRegistry::from_json(SAMPLE_JSON).unwrap();
    assert_eq!(
        registry.resolve_by_namespace("urn:ietf:params:xml:ns:yang:ietf-interfaces"),
        Some("ietf-interfaces")
    );
    assert_eq!(registry.resolve_by_namespace("urn:unknown"), None);
}

#[test]
fn resolve_by_name_returns_every_owner_in_order() {
    let registry = SchemaRegistry::from_json(SAMPLE_JSON).unwrap();
    let candidates = registry.resolve_by_name("interfaces");
    assert_eq!(
        candidates,
        vec![
            ModuleCandidate::new(
                "ietf-interfaces",
                "urn:ietf:params:xml:ns:yang:ietf-interfaces"
            ),
            ModuleCandidate::new("vendor-system", "urn:vendor:system"),
        ]
    );

    assert!(registry.resolve_by_name("routing").is_empty());
}

#[test]
fn duplicate_module_rejected() {
    let mut registry = SchemaRegistry::new();
    registry.add_module("ex", "urn:a", ["top"]).unwrap();
    let err = registry.add_module("ex", "urn:b", ["top"]).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateModule(name) if name == "ex"));
}

#[test]
fn duplicate_namespace_rejected() {
    let mut registry = SchemaRegistry::new();
    registry.add_module("a", "urn:shared", Vec::<String>::new()).unwrap();
    let err = registry
        .add_module("b", "urn:shared", Vec::<String>::new())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "namespace 'urn:shared' is claimed by both 'a' and 'b'"
    );
}

#[test]
fn malformed_json_rejected() {
    let err = SchemaRegistry::from_json(r#"{ "modules": [ { "name": "x" } ] }"#).unwrap_err();
    assert!(matches!(err, RegistryError::Json(_)));
}

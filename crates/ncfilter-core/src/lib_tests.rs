use super::*;

#[test]
fn content_ignores_surrounding_whitespace() {
    let node = FilterNode::new("name").with_text("  eth0\n");
    assert_eq!(node.content(), Some("eth0"));
    assert_eq!(node.content_match(), Some("eth0"));
}

#[test]
fn whitespace_only_text_is_absent() {
    let node = FilterNode::new("interface").with_text(" \n\t ");
    assert_eq!(node.content(), None);
    assert_eq!(node.content_match(), None);
}

#[test]
fn node_with_children_is_not_content_match() {
    let node = FilterNode::new("interfaces")
        .with_text("stray")
        .with_child(FilterNode::new("interface"));
    assert_eq!(node.content(), Some("stray"));
    assert_eq!(node.content_match(), None);
}

#[test]
fn base_namespace_is_not_a_schema_namespace() {
    let node = FilterNode::new("top").with_namespace(NETCONF_BASE_NS);
    assert_eq!(node.schema_namespace(), None);

    let node = FilterNode::new("top").with_namespace("urn:example:top");
    assert_eq!(node.schema_namespace(), Some("urn:example:top"));
}

#[test]
fn innermost_prefix_declaration_wins() {
    let node = FilterNode::new("type")
        .with_prefix("ex", "urn:outer")
        .with_prefix("ex", "urn:inner");
    assert_eq!(node.resolve_prefix("ex"), Some("urn:inner"));
    assert_eq!(node.resolve_prefix("missing"), None);
}

#[test]
fn resolver_through_reference() {
    let mut registry = SchemaRegistry::new();
    registry
        .add_module("ex", "urn:example", ["top"])
        .unwrap();

    fn lookup<R: ModuleResolver>(resolver: R) -> Option<String> {
        resolver.resolve_by_namespace("urn:example").map(str::to_owned)
    }

    assert_eq!(lookup(&registry), Some("ex".to_string()));
}

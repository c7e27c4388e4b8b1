use indoc::indoc;
use ncfilter_core::{FilterAttribute, FilterNode};

use crate::FilterError;
use crate::dispatch::{FilterCarrier, FilterPayload, FilterType, create_filters, request_filters};
use crate::test_utils::{TOP_NS, test_registry};

#[test]
fn xpath_select_passed_through_verbatim() {
    let select = "/ex:top/users/user[name='bob' and uid > 100]//role";
    let carrier = FilterCarrier::xpath(select);
    assert_eq!(carrier.filter_type(), FilterType::XPath);

    let filters = create_filters(&carrier, &test_registry()).unwrap();
    assert_eq!(filters.into_vec(), vec![select]);
}

#[test]
fn empty_xpath_select_yields_nothing() {
    let filters = create_filters(&FilterCarrier::xpath(""), &test_registry()).unwrap();
    assert!(filters.is_empty());
}

#[test]
fn xpath_without_select_rejected() {
    let carrier = FilterCarrier::new().with_attribute(FilterAttribute::new("type", "xpath"));
    let err = create_filters(&carrier, &test_registry()).unwrap_err();
    assert!(matches!(err, FilterError::MissingSelectAttribute));
}

#[test]
fn xpath_ignores_payload() {
    let mut carrier = FilterCarrier::xpath("/ex:top");
    carrier.payload = Some(FilterPayload::Text("<not-used/>".to_string()));

    let filters = create_filters(&carrier, &test_registry()).unwrap();
    assert_eq!(filters.into_vec(), vec!["/ex:top"]);
}

#[test]
fn missing_payload_yields_nothing() {
    let filters = create_filters(&FilterCarrier::new(), &test_registry()).unwrap();
    assert!(filters.is_empty());
}

#[test]
fn empty_text_payload_yields_nothing() {
    let carrier = FilterCarrier::subtree(FilterPayload::Text(String::new()));
    assert!(create_filters(&carrier, &test_registry()).unwrap().is_empty());

    let carrier = FilterCarrier::subtree(FilterPayload::Text("\n  ".to_string()));
    assert!(create_filters(&carrier, &test_registry()).unwrap().is_empty());
}

#[test]
fn empty_tree_payload_yields_nothing() {
    let carrier = FilterCarrier::subtree(FilterPayload::Tree(Vec::new()));
    assert!(create_filters(&carrier, &test_registry()).unwrap().is_empty());
}

#[test]
fn text_payload_compiled() {
    let carrier = FilterCarrier::subtree(FilterPayload::Text(
        indoc! {r#"
            <top xmlns="urn:example:top">
              <a>val</a>
            </top>
            <top xmlns="urn:example:top">
              <b/>
            </top>
        "#}
        .to_string(),
    ));

    let filters = create_filters(&carrier, &test_registry()).unwrap();
    assert_eq!(filters.into_vec(), vec!["/ex:top[a='val']", "/ex:top/b"]);
}

#[test]
fn bytes_payload_compiled() {
    let carrier = FilterCarrier::subtree(FilterPayload::Bytes(
        br#"<top xmlns="urn:example:top"><a/><b/></top>"#.to_vec(),
    ));

    let filters = create_filters(&carrier, &test_registry()).unwrap();
    assert_eq!(filters.into_vec(), vec!["/ex:top/a", "/ex:top/b"]);
}

#[test]
fn tree_payload_compiled() {
    let carrier = FilterCarrier::subtree(FilterPayload::Tree(vec![
        FilterNode::new("top")
            .with_namespace(TOP_NS)
            .with_child(FilterNode::new("a").with_text("it's")),
    ]));

    let filters = create_filters(&carrier, &test_registry()).unwrap();
    assert_eq!(filters.into_vec(), vec![r#"/ex:top[a="it's"]"#]);
}

#[test]
fn malformed_text_payload_rejected() {
    let carrier = FilterCarrier::subtree(FilterPayload::Text("<top><a></top>".to_string()));
    let err = create_filters(&carrier, &test_registry()).unwrap_err();
    assert!(matches!(err, FilterError::UnparsableFilterContent(_)));
}

#[test]
fn non_utf8_payload_rejected() {
    let carrier = FilterCarrier::subtree(FilterPayload::Bytes(vec![b'<', 0xff, b'/', b'>']));
    let err = create_filters(&carrier, &test_registry()).unwrap_err();
    assert!(matches!(err, FilterError::UnparsableFilterContent(_)));
}

#[test]
fn explicit_subtree_type() {
    let carrier = FilterCarrier::subtree(FilterPayload::Text(
        r#"<top xmlns="urn:example:top"/>"#.to_string(),
    ))
    .with_attribute(FilterAttribute::new("type", "subtree"));
    assert_eq!(carrier.filter_type(), FilterType::Subtree);

    let filters = create_filters(&carrier, &test_registry()).unwrap();
    assert_eq!(filters.into_vec(), vec!["/ex:top"]);
}

#[test]
fn unknown_type_falls_back_to_subtree() {
    let carrier = FilterCarrier::new()
        .with_attribute(FilterAttribute::new("type", "json"))
        .with_attribute(FilterAttribute::new("select", "/ex:top"));
    assert_eq!(carrier.filter_type(), FilterType::Subtree);
    assert!(create_filters(&carrier, &test_registry()).unwrap().is_empty());
}

#[test]
fn later_known_type_wins_over_unknown() {
    let carrier = FilterCarrier::new()
        .with_attribute(FilterAttribute::new("type", "json"))
        .with_attribute(FilterAttribute::new("type", "xpath"));
    assert_eq!(carrier.filter_type(), FilterType::XPath);
}

#[test]
fn type_matched_by_local_name() {
    let carrier = FilterCarrier::new()
        .with_attribute(
            FilterAttribute::new("type", "xpath")
                .with_namespace("urn:ietf:params:xml:ns:netconf:base:1.0"),
        )
        .with_attribute(FilterAttribute::new("select", "/ex:top"));
    assert_eq!(carrier.filter_type(), FilterType::XPath);
}

#[test]
fn no_filter_element_selects_everything() {
    let filters = request_filters(None, &test_registry()).unwrap();
    assert_eq!(filters.into_vec(), vec!["/*"]);
}

#[test]
fn filter_element_dispatched() {
    let carrier = FilterCarrier::xpath("/ex:top");
    let filters = request_filters(Some(&carrier), &test_registry()).unwrap();
    assert_eq!(filters.into_vec(), vec!["/ex:top"]);
}

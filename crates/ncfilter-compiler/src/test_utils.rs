//! Test utilities and snapshot macros.

use ncfilter_core::SchemaRegistry;
use ncfilter_core::xml::parse_filter;

use crate::{Compiler, FilterSet, Result};

pub const TOP_NS: &str = "urn:example:top";
pub const EXT_NS: &str = "urn:example:ext";
pub const IF_NS: &str = "urn:ietf:params:xml:ns:yang:ietf-interfaces";
pub const IANA_IF_NS: &str = "urn:ietf:params:xml:ns:yang:iana-if-type";
pub const VENDOR_NS: &str = "urn:vendor";

/// Small fixed registry shared by compiler tests.
///
/// `interfaces` is defined by two modules, so unqualified filters for it
/// compile once per module.
pub fn test_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry
        .add_module("ex", TOP_NS, ["top", "users"])
        .expect("valid test module");
    registry
        .add_module("ext", EXT_NS, Vec::<String>::new())
        .expect("valid test module");
    registry
        .add_module("ietf-interfaces", IF_NS, ["interfaces"])
        .expect("valid test module");
    registry
        .add_module("iana-if-type", IANA_IF_NS, Vec::<String>::new())
        .expect("valid test module");
    registry
        .add_module("vnd", VENDOR_NS, ["interfaces", "system"])
        .expect("valid test module");
    registry
}

/// Parse and compile a filter body against `test_registry()`.
pub fn compile_xml(xml: &str) -> Result<FilterSet> {
    let roots = parse_filter(xml)?;
    Compiler::compile(&test_registry(), &roots)
}

/// Compiled filters, one per line.
pub fn expect_filters(xml: &str) -> String {
    let filters = compile_xml(xml).expect("filter should compile");
    filters.iter().collect::<Vec<_>>().join("\n")
}

/// Snapshot test for compiled filters.
#[macro_export]
macro_rules! shot_filters {
    ($xml:literal, @$snapshot:literal) => {{
        let xml = indoc::indoc!($xml).trim();
        let output = $crate::test_utils::expect_filters(xml);
        insta::assert_snapshot!(output, @$snapshot);
    }};
}

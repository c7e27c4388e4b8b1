#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for NETCONF subtree filters.
//!
//! Three pieces:
//! - **Filter tree** (`FilterNode`): a read-only XML element view of a filter body
//! - **Module resolution** (`ModuleResolver`): maps namespaces and top-level
//!   node names to schema modules
//! - **XML decoding** (`xml::parse_filter`): builds filter trees from payload text

mod registry;
pub mod xml;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod registry_tests;

pub use registry::{ModuleInfo, RegistryError, SchemaRegistry};

/// Namespace of the NETCONF protocol elements themselves.
///
/// Filter elements in this namespace are treated as carrying no namespace.
pub const NETCONF_BASE_NS: &str = "urn:ietf:params:xml:ns:netconf:base:1.0";

// ============================================================================
// Filter Tree
// ============================================================================

/// Attribute of a filter element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterAttribute {
    pub namespace: Option<String>,
    pub name: String,
    pub value: String,
}

impl FilterAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// One element of a subtree filter.
///
/// Text is "present" only if it is non-empty after trimming: an element with
/// whitespace-only text behaves exactly like an element without text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterNode {
    pub name: String,
    pub namespace: Option<String>,
    pub attributes: Vec<FilterAttribute>,
    pub children: Vec<FilterNode>,
    pub text: Option<String>,
    /// Prefixed namespace declarations in scope at this element, innermost last.
    pub prefixes: Vec<(String, String)>,
}

impl FilterNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_attribute(mut self, attribute: FilterAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_child(mut self, child: FilterNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes.push((prefix.into(), namespace.into()));
        self
    }

    /// Trimmed text content, if any non-whitespace text is present.
    pub fn content(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Content of a content-match node: no children and non-whitespace text.
    pub fn content_match(&self) -> Option<&str> {
        if !self.children.is_empty() {
            return None;
        }
        self.content()
    }

    /// Namespace of this element, unless absent or the NETCONF base namespace.
    pub fn schema_namespace(&self) -> Option<&str> {
        self.namespace
            .as_deref()
            .filter(|namespace| *namespace != NETCONF_BASE_NS)
    }

    /// Look up an in-scope prefix declaration.
    pub fn resolve_prefix(&self, prefix: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .rev()
            .find(|(declared, _)| declared == prefix)
            .map(|(_, namespace)| namespace.as_str())
    }
}

// ============================================================================
// Module Resolution
// ============================================================================

/// A schema module that may own a filter element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCandidate {
    pub name: String,
    pub namespace: String,
}

impl ModuleCandidate {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

/// Schema lookups needed to qualify filter elements.
///
/// Implementations must not change while a compilation that uses them is in
/// flight; the compiler itself performs no locking.
pub trait ModuleResolver {
    /// Module owning `namespace`.
    fn resolve_by_namespace(&self, namespace: &str) -> Option<&str>;

    /// Every module defining a top-level node named `local_name`, in a stable order.
    fn resolve_by_name(&self, local_name: &str) -> Vec<ModuleCandidate>;
}

impl<T: ModuleResolver + ?Sized> ModuleResolver for &T {
    fn resolve_by_namespace(&self, namespace: &str) -> Option<&str> {
        (**self).resolve_by_namespace(namespace)
    }

    fn resolve_by_name(&self, local_name: &str) -> Vec<ModuleCandidate> {
        (**self).resolve_by_name(local_name)
    }
}

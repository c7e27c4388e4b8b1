//! Compiler state and the recursive walk.

use ncfilter_core::{FilterNode, ModuleCandidate, ModuleResolver};
use tracing::{debug, instrument, trace};

use crate::Result;
use crate::filter_set::FilterSet;
use crate::fragment::XPathFragment;

use super::content::qualified_value;

/// Subtree filter compiler.
///
/// Borrows a resolver snapshot and appends every finished path to one
/// `FilterSet`. Errors abort the whole compilation; fragments still in
/// flight are dropped with it.
pub struct Compiler<'a, R: ModuleResolver + ?Sized> {
    resolver: &'a R,
    output: FilterSet,
}

impl<'a, R: ModuleResolver + ?Sized> Compiler<'a, R> {
    pub fn new(resolver: &'a R) -> Self {
        Self {
            resolver,
            output: FilterSet::new(),
        }
    }

    /// Compile top-level filter elements into a new filter set.
    pub fn compile(resolver: &'a R, roots: &[FilterNode]) -> Result<FilterSet> {
        let mut compiler = Self::new(resolver);
        compiler.compile_roots(roots)?;
        Ok(compiler.finish())
    }

    /// Compile top-level filter elements in document order.
    #[instrument(level = "trace", skip_all, fields(roots = roots.len()))]
    pub fn compile_roots(&mut self, roots: &[FilterNode]) -> Result<()> {
        for root in roots {
            self.compile_top(root)?;
        }
        Ok(())
    }

    pub fn finish(self) -> FilterSet {
        self.output
    }

    fn compile_top(&mut self, elem: &FilterNode) -> Result<()> {
        for module in &self.candidates(elem) {
            let mut fragment = XPathFragment::new();
            fragment.push_node_step(Some(&module.name), &elem.name)?;

            // Top-level content match: `/module:name[text()='value']`
            if let Some(content) = elem.content_match() {
                let value = qualified_value(self.resolver, elem, content)?;
                fragment.push_text_predicate(&value)?;
                self.push_attributes(&mut fragment, elem)?;
                self.emit(fragment)?;
                continue;
            }

            self.push_attributes(&mut fragment, elem)?;
            self.compile_children(elem, &module.namespace, fragment)?;
        }
        Ok(())
    }

    /// Modules that may own a top-level element.
    ///
    /// An explicit namespace names exactly one module; without one, every
    /// module defining a top-level node of that name is a candidate.
    fn candidates(&self, elem: &FilterNode) -> Vec<ModuleCandidate> {
        let Some(namespace) = elem.schema_namespace() else {
            let candidates = self.resolver.resolve_by_name(&elem.name);
            if candidates.is_empty() {
                debug!(element = %elem.name, "no module defines this top-level node");
            }
            return candidates;
        };

        match self.resolver.resolve_by_namespace(namespace) {
            Some(module) => vec![ModuleCandidate::new(module, namespace)],
            None => {
                debug!(element = %elem.name, namespace, "namespace not mapped to any module");
                Vec::new()
            }
        }
    }

    /// Content leaves narrow `fragment` in place. Every other child continues
    /// on its own copy, except the last, which takes `fragment` itself.
    fn compile_children(
        &mut self,
        elem: &FilterNode,
        namespace: &str,
        mut fragment: XPathFragment,
    ) -> Result<()> {
        let mut branches = Vec::new();
        branches.try_reserve(elem.children.len())?;

        for child in &elem.children {
            match child.content_match() {
                Some(content) => {
                    if !self.push_content_match(&mut fragment, child, content, namespace)? {
                        return Ok(());
                    }
                }
                None => branches.push(child),
            }
        }

        let Some((last, rest)) = branches.split_last() else {
            return self.emit(fragment);
        };

        for child in rest {
            let branch = fragment.try_clone()?;
            self.compile_branch(child, namespace, branch)?;
        }
        self.compile_branch(last, namespace, fragment)
    }

    fn compile_branch(
        &mut self,
        elem: &FilterNode,
        parent_namespace: &str,
        mut fragment: XPathFragment,
    ) -> Result<()> {
        let Some((module, namespace)) = self.qualify(elem, parent_namespace) else {
            debug!(element = %elem.name, "namespace not mapped to any module, branch dropped");
            return Ok(());
        };

        fragment.push_node_step(module, &elem.name)?;
        self.push_attributes(&mut fragment, elem)?;
        self.compile_children(elem, namespace, fragment)
    }

    /// `[name='value']`, with the leaf's attribute predicates inside.
    ///
    /// Returns false if the leaf's namespace maps to no module: the path can
    /// then match nothing and must be dropped.
    fn push_content_match(
        &self,
        fragment: &mut XPathFragment,
        leaf: &FilterNode,
        content: &str,
        parent_namespace: &str,
    ) -> Result<bool> {
        let Some((module, _)) = self.qualify(leaf, parent_namespace) else {
            debug!(element = %leaf.name, "content match in unmapped namespace, path dropped");
            return Ok(false);
        };

        fragment.open_content_predicate(module, &leaf.name)?;
        self.push_attributes(fragment, leaf)?;
        let value = qualified_value(self.resolver, leaf, content)?;
        fragment.close_content_predicate(&value)?;
        Ok(true)
    }

    /// Attribute predicates, in document order. Attributes without a namespace
    /// or in an unknown one cannot match anything and are left out.
    fn push_attributes(&self, fragment: &mut XPathFragment, elem: &FilterNode) -> Result<()> {
        for attr in &elem.attributes {
            let module = attr
                .namespace
                .as_deref()
                .and_then(|namespace| self.resolver.resolve_by_namespace(namespace));
            let Some(module) = module else {
                debug!(element = %elem.name, attribute = %attr.name, "attribute dropped");
                continue;
            };
            fragment.push_attribute_predicate(module, &attr.name, &attr.value)?;
        }
        Ok(())
    }

    /// Module prefix and namespace for a nested element.
    ///
    /// The prefix is only written when the element leaves the enclosing
    /// namespace. `None` means the new namespace maps to no module.
    fn qualify<'n>(
        &self,
        elem: &'n FilterNode,
        parent_namespace: &'n str,
    ) -> Option<(Option<&'a str>, &'n str)> {
        let resolver: &'a R = self.resolver;
        match elem.schema_namespace() {
            Some(namespace) if namespace != parent_namespace => resolver
                .resolve_by_namespace(namespace)
                .map(|module| (Some(module), namespace)),
            _ => Some((None, parent_namespace)),
        }
    }

    fn emit(&mut self, fragment: XPathFragment) -> Result<()> {
        let filter = fragment.finish();
        trace!(%filter, "filter emitted");
        self.output.push(filter)
    }
}

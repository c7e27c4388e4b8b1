//! XML decoding of subtree filter payloads.
//!
//! A filter body is an element list, so several top-level elements are
//! accepted. Namespaces are resolved while reading; `xmlns` declarations are
//! recorded as in-scope prefixes rather than reported as attributes.

use quick_xml::NsReader;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::events::attributes::AttrError;
use quick_xml::name::{PrefixDeclaration, ResolveResult};

use crate::{FilterAttribute, FilterNode};

/// Error while decoding a filter payload.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("malformed XML: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("undeclared namespace prefix '{0}'")]
    UnknownPrefix(String),

    #[error("element '{0}' is never closed")]
    Unclosed(String),

    #[error("closing tag without a matching opening tag")]
    UnmatchedEnd,

    #[error("text outside of any element")]
    StrayText,
}

/// Decode filter payload text into its top-level elements.
///
/// Empty or whitespace-only input yields no elements.
pub fn parse_filter(text: &str) -> Result<Vec<FilterNode>, XmlError> {
    let mut reader = NsReader::from_str(text);
    let mut roots = Vec::new();
    let mut open: Vec<FilterNode> = Vec::new();

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        let namespace = resolved_namespace(resolved)?;

        match event {
            Event::Start(start) => {
                let node = open_element(&reader, &start, namespace, open.last())?;
                open.push(node);
            }
            Event::Empty(start) => {
                let node = open_element(&reader, &start, namespace, open.last())?;
                attach(&mut open, &mut roots, node);
            }
            Event::End(_) => {
                let node = open.pop().ok_or(XmlError::UnmatchedEnd)?;
                attach(&mut open, &mut roots, node);
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                append_text(&mut open, &text)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data)?;
                append_text(&mut open, text)?;
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(node) = open.pop() {
        return Err(XmlError::Unclosed(node.name));
    }

    Ok(roots)
}

fn resolved_namespace(resolved: ResolveResult<'_>) -> Result<Option<String>, XmlError> {
    match resolved {
        ResolveResult::Bound(namespace) => {
            Ok(Some(std::str::from_utf8(namespace.into_inner())?.to_owned()))
        }
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(XmlError::UnknownPrefix(
            String::from_utf8_lossy(&prefix).into_owned(),
        )),
    }
}

fn open_element(
    reader: &NsReader<&[u8]>,
    start: &BytesStart<'_>,
    namespace: Option<String>,
    parent: Option<&FilterNode>,
) -> Result<FilterNode, XmlError> {
    let name = std::str::from_utf8(start.local_name().into_inner())?.to_owned();
    let mut prefixes = parent.map(|p| p.prefixes.clone()).unwrap_or_default();
    let mut attributes = Vec::new();

    for attr in start.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;

        match attr.key.as_namespace_binding() {
            Some(PrefixDeclaration::Named(prefix)) => {
                let prefix = std::str::from_utf8(prefix)?.to_owned();
                prefixes.retain(|(declared, _)| *declared != prefix);
                prefixes.push((prefix, value.into_owned()));
                continue;
            }
            Some(PrefixDeclaration::Default) => continue,
            None => {}
        }

        let (resolved, local) = reader.resolve_attribute(attr.key);
        let namespace = resolved_namespace(resolved)?;
        attributes.push(FilterAttribute {
            namespace,
            name: std::str::from_utf8(local.into_inner())?.to_owned(),
            value: value.into_owned(),
        });
    }

    Ok(FilterNode {
        name,
        namespace,
        attributes,
        children: Vec::new(),
        text: None,
        prefixes,
    })
}

fn attach(open: &mut [FilterNode], roots: &mut Vec<FilterNode>, node: FilterNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

fn append_text(open: &mut [FilterNode], text: &str) -> Result<(), XmlError> {
    let Some(node) = open.last_mut() else {
        if text.trim().is_empty() {
            return Ok(());
        }
        return Err(XmlError::StrayText);
    };

    match &mut node.text {
        Some(existing) => existing.push_str(text),
        None => node.text = Some(text.to_owned()),
    }
    Ok(())
}

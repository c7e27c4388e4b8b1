//! Filter element dispatch.
//!
//! A `<filter>` element is either `type="xpath"`, whose `select` attribute is
//! passed through untouched, or a subtree filter (the default), whose body is
//! compiled.

use ncfilter_core::xml::{XmlError, parse_filter};
use ncfilter_core::{FilterAttribute, FilterNode, ModuleResolver};
use tracing::{debug, instrument};

use crate::compile::Compiler;
use crate::filter_set::FilterSet;
use crate::{FilterError, Result};

/// Filter flavour selected by the `type` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterType {
    #[default]
    Subtree,
    XPath,
}

/// Body of a subtree filter, as delivered by the message decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPayload {
    /// Serialized XML still to be parsed.
    Text(String),
    /// Serialized XML in raw bytes; must be UTF-8.
    Bytes(Vec<u8>),
    /// Elements already decoded.
    Tree(Vec<FilterNode>),
}

/// The `<filter>` element of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCarrier {
    pub attributes: Vec<FilterAttribute>,
    pub payload: Option<FilterPayload>,
}

impl FilterCarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<filter type="xpath" select="...">`
    pub fn xpath(select: impl Into<String>) -> Self {
        Self::new()
            .with_attribute(FilterAttribute::new("type", "xpath"))
            .with_attribute(FilterAttribute::new("select", select))
    }

    /// `<filter>` with a subtree body.
    pub fn subtree(payload: FilterPayload) -> Self {
        Self {
            attributes: Vec::new(),
            payload: Some(payload),
        }
    }

    pub fn with_attribute(mut self, attribute: FilterAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// First attribute with this local name, regardless of namespace.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// The first `type` attribute naming a known flavour wins; anything else
    /// means subtree.
    pub fn filter_type(&self) -> FilterType {
        self.attributes
            .iter()
            .filter(|attr| attr.name == "type")
            .find_map(|attr| match attr.value.as_str() {
                "xpath" => Some(FilterType::XPath),
                "subtree" => Some(FilterType::Subtree),
                _ => None,
            })
            .unwrap_or_default()
    }
}

/// Filters for a request that may or may not carry a `<filter>` element.
///
/// No filter element at all selects the whole datastore.
pub fn request_filters<R>(carrier: Option<&FilterCarrier>, resolver: &R) -> Result<FilterSet>
where
    R: ModuleResolver + ?Sized,
{
    match carrier {
        Some(carrier) => create_filters(carrier, resolver),
        None => Ok(FilterSet::select_all()),
    }
}

/// Turn one `<filter>` element into its filter set.
///
/// An empty result is not "match nothing": callers treat it as an empty
/// filter, as for an empty subtree body or an empty `select`.
#[instrument(level = "trace", skip_all)]
pub fn create_filters<R>(carrier: &FilterCarrier, resolver: &R) -> Result<FilterSet>
where
    R: ModuleResolver + ?Sized,
{
    match carrier.filter_type() {
        FilterType::XPath => xpath_filters(carrier),
        FilterType::Subtree => subtree_filters(carrier.payload.as_ref(), resolver),
    }
}

fn xpath_filters(carrier: &FilterCarrier) -> Result<FilterSet> {
    let select = carrier
        .attribute("select")
        .ok_or(FilterError::MissingSelectAttribute)?;

    let mut filters = FilterSet::new();
    if select.is_empty() {
        debug!("empty xpath select");
        return Ok(filters);
    }

    let mut path = String::new();
    path.try_reserve_exact(select.len())?;
    path.push_str(select);
    filters.push(path)?;
    Ok(filters)
}

fn subtree_filters<R>(payload: Option<&FilterPayload>, resolver: &R) -> Result<FilterSet>
where
    R: ModuleResolver + ?Sized,
{
    let parsed;
    let roots: &[FilterNode] = match payload {
        None => &[],
        Some(FilterPayload::Tree(roots)) => roots,
        Some(FilterPayload::Text(text)) => {
            parsed = parse_filter(text)?;
            &parsed
        }
        Some(FilterPayload::Bytes(bytes)) => {
            let text = std::str::from_utf8(bytes).map_err(XmlError::from)?;
            parsed = parse_filter(text)?;
            &parsed
        }
    };

    if roots.is_empty() {
        debug!("empty subtree filter");
        return Ok(FilterSet::new());
    }

    Compiler::compile(resolver, roots)
}

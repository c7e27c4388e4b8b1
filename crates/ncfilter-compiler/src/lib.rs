//! NETCONF filter compiler: subtree filters to XPath.
//!
//! The datastore only evaluates XPath, so every `<filter>` of a request is
//! reduced to a `FilterSet` whose union selects the same data:
//! - `dispatch` - picks xpath passthrough or subtree compilation for a filter element
//! - `compile` - the recursive subtree-to-XPath translation
//! - `fragment` - append-only buffer for one in-progress path
//! - `filter_set` - the ordered output

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod dispatch;
pub mod filter_set;
pub mod fragment;

#[cfg(test)]
mod dispatch_tests;
#[cfg(test)]
pub mod test_utils;

pub use compile::Compiler;
pub use dispatch::{FilterCarrier, FilterPayload, FilterType, create_filters, request_filters};
pub use filter_set::FilterSet;
pub use fragment::XPathFragment;

use ncfilter_core::xml::XmlError;

/// Errors that can occur while turning a filter into XPath.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("xpath filter without the \"select\" attribute")]
    MissingSelectAttribute,

    #[error("subtree filter content cannot be parsed: {0}")]
    UnparsableFilterContent(#[from] XmlError),

    /// Growing a filter buffer failed; nothing built so far is returned.
    #[error("out of memory while building filters")]
    AllocationFailure,

    /// XPath 1.0 string literals cannot contain both quote characters.
    #[error("value {0:?} contains both quote characters")]
    UnquotableValue(String),
}

impl From<std::collections::TryReserveError> for FilterError {
    fn from(_: std::collections::TryReserveError) -> Self {
        FilterError::AllocationFailure
    }
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;

//! Append-only buffer for one in-progress XPath.
//!
//! Every append reserves its full size up front, so an allocation failure
//! leaves the fragment unchanged and surfaces as `FilterError::AllocationFailure`.

use crate::{FilterError, Result};

/// One candidate path under construction.
///
/// A fragment is either finished into a filter string or moved into exactly
/// one continuation; it is never read after that.
#[derive(Debug, Default)]
pub struct XPathFragment {
    buf: String,
}

impl XPathFragment {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Independent copy for a sibling branch.
    pub fn try_clone(&self) -> Result<Self> {
        let mut buf = String::new();
        buf.try_reserve_exact(self.buf.len())?;
        buf.push_str(&self.buf);
        Ok(Self { buf })
    }

    /// `/module:name`, or `/name` when the module is inherited.
    pub fn push_node_step(&mut self, module: Option<&str>, name: &str) -> Result<()> {
        match module {
            Some(module) => self.append(&["/", module, ":", name]),
            None => self.append(&["/", name]),
        }
    }

    /// `[@module:name='value']`
    pub fn push_attribute_predicate(&mut self, module: &str, name: &str, value: &str) -> Result<()> {
        let quote = quote_for(value)?;
        self.append(&["[@", module, ":", name, "=", quote, value, quote, "]"])
    }

    /// `[text()='value']`
    pub fn push_text_predicate(&mut self, value: &str) -> Result<()> {
        let quote = quote_for(value)?;
        self.append(&["[text()=", quote, value, quote, "]"])
    }

    /// Opens `[module:name` of a content-match predicate.
    ///
    /// The leaf's own attribute predicates may follow before
    /// `close_content_predicate`.
    pub fn open_content_predicate(&mut self, module: Option<&str>, name: &str) -> Result<()> {
        match module {
            Some(module) => self.append(&["[", module, ":", name]),
            None => self.append(&["[", name]),
        }
    }

    /// Closes a content-match predicate with `='value']`.
    pub fn close_content_predicate(&mut self, value: &str) -> Result<()> {
        let quote = quote_for(value)?;
        self.append(&["=", quote, value, quote, "]"])
    }

    /// Finalize into a filter string.
    pub fn finish(self) -> String {
        self.buf
    }

    fn append(&mut self, parts: &[&str]) -> Result<()> {
        let additional = parts.iter().map(|part| part.len()).sum();
        self.buf.try_reserve(additional)?;
        for part in parts {
            self.buf.push_str(part);
        }
        Ok(())
    }
}

/// Quote character for an XPath 1.0 string literal holding `value`.
///
/// Single quotes unless the value contains one. A value containing both
/// quote characters has no literal form and is rejected.
pub fn quote_for(value: &str) -> Result<&'static str> {
    match (value.contains('\''), value.contains('"')) {
        (false, _) => Ok("'"),
        (true, false) => Ok("\""),
        (true, true) => Err(FilterError::UnquotableValue(value.to_owned())),
    }
}

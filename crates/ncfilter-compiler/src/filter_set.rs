//! Ordered output of filter compilation.

use crate::Result;

/// Filter matching the whole datastore.
pub const SELECT_ALL: &str = "/*";

/// XPath expressions whose union selects the filtered data.
///
/// Order is discovery order (top-level element, then module candidate, then
/// branch). It only makes output deterministic; evaluation does not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: Vec<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set used when a request carries no filter element at all.
    pub fn select_all() -> Self {
        Self {
            filters: vec![SELECT_ALL.to_owned()],
        }
    }

    pub fn push(&mut self, filter: String) -> Result<()> {
        self.filters.try_reserve(1)?;
        self.filters.push(filter);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.filters.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.filters
    }

    pub fn into_vec(self) -> Vec<String> {
        self.filters
    }

    /// All filters joined into the single expression a notification
    /// subscription takes. `None` when there is nothing to join.
    pub fn subscription_xpath(&self) -> Option<String> {
        if self.filters.is_empty() {
            return None;
        }
        Some(self.filters.join(" and "))
    }
}

impl IntoIterator for FilterSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.into_iter()
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}

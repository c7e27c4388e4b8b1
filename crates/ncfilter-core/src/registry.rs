//! In-memory schema registry.
//!
//! Loaded from a JSON document listing modules in order:
//!
//! ```json
//! { "modules": [
//!     { "name": "ietf-interfaces",
//!       "namespace": "urn:ietf:params:xml:ns:yang:ietf-interfaces",
//!       "top_level": ["interfaces", "interfaces-state"] }
//! ] }
//! ```

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{ModuleCandidate, ModuleResolver};

/// Error while building a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("registry JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("module '{0}' is defined more than once")]
    DuplicateModule(String),

    #[error("namespace '{namespace}' is claimed by both '{first}' and '{second}'")]
    DuplicateNamespace {
        namespace: String,
        first: String,
        second: String,
    },
}

/// Raw registry document.
#[derive(Debug, Deserialize)]
struct RawRegistry {
    modules: Vec<RawModule>,
}

#[derive(Debug, Deserialize)]
struct RawModule {
    name: String,
    namespace: String,
    #[serde(default)]
    top_level: Vec<String>,
}

/// What the registry knows about one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub namespace: String,
    pub top_level: Vec<String>,
}

/// Schema modules in registration order.
///
/// Registration order is the candidate order reported by `resolve_by_name`.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    modules: IndexMap<String, ModuleInfo>,
    by_namespace: HashMap<String, String>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry from its JSON document.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawRegistry = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for module in raw.modules {
            registry.add_module(module.name, module.namespace, module.top_level)?;
        }
        Ok(registry)
    }

    /// Register a module with its namespace and top-level node names.
    pub fn add_module<I, S>(
        &mut self,
        name: impl Into<String>,
        namespace: impl Into<String>,
        top_level: I,
    ) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let namespace = namespace.into();

        if self.modules.contains_key(&name) {
            return Err(RegistryError::DuplicateModule(name));
        }
        if let Some(first) = self.by_namespace.get(&namespace) {
            return Err(RegistryError::DuplicateNamespace {
                namespace,
                first: first.clone(),
                second: name,
            });
        }

        self.by_namespace.insert(namespace.clone(), name.clone());
        self.modules.insert(
            name,
            ModuleInfo {
                namespace,
                top_level: top_level.into_iter().map(Into::into).collect(),
            },
        );
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&ModuleInfo> {
        self.modules.get(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleInfo)> {
        self.modules.iter().map(|(name, info)| (name.as_str(), info))
    }
}

impl ModuleResolver for SchemaRegistry {
    fn resolve_by_namespace(&self, namespace: &str) -> Option<&str> {
        self.by_namespace.get(namespace).map(String::as_str)
    }

    fn resolve_by_name(&self, local_name: &str) -> Vec<ModuleCandidate> {
        self.modules
            .iter()
            .filter(|(_, info)| info.top_level.iter().any(|node| node == local_name))
            .map(|(name, info)| ModuleCandidate::new(name.as_str(), info.namespace.as_str()))
            .collect()
    }
}

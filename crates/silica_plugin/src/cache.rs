//! In-memory cache of synthetic stylesheet modules.

use std::collections::HashMap;

/// Mapping from synthetic module identifiers to generated stylesheet text.
///
/// Populated by the transform hook whenever a file yields extracted CSS, and
/// consulted by the host bundler's resolve and load hooks so the synthetic
/// `.css` imports never hit the filesystem. Entries live for one build
/// session; keys are content-derived, so re-registering the same key with
/// the same content is a benign overwrite. There is no eviction, and a
/// missing key is "not found" rather than an error.
#[derive(Debug, Default)]
pub struct VirtualModules {
    /// Synthetic path → stylesheet text.
    modules: HashMap<String, String>,
}

impl VirtualModules {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a synthetic module, overwriting any previous entry.
    pub fn register(&mut self, key: impl Into<String>, content: impl Into<String>) {
        self.modules.insert(key.into(), content.into());
    }

    /// Returns the stylesheet text for a synthetic module, if registered.
    pub fn lookup(&self, id: &str) -> Option<String> {
        self.modules.get(id).cloned()
    }

    /// Returns `true` if the identifier names a registered synthetic module.
    pub fn contains(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    /// Resolves a module identifier: `Some(id)` iff it is registered.
    ///
    /// Backs the host's resolve hook, keeping its resolver from attempting
    /// filesystem resolution for synthetic paths.
    pub fn resolve(&self, id: &str) -> Option<String> {
        self.contains(id).then(|| id.to_string())
    }

    /// Returns the number of registered synthetic modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if no synthetic modules are registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

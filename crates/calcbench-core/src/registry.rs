//! Backend factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::backend::{AcceleratedBackend, Backend, CalcError, ScriptedBackend};

/// Factory trait for creating backends.
pub trait BackendFactory: Send + Sync {
    /// Get or create a backend by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Backend>, CalcError>;

    /// List all available backend names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Backend>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn canonical(name: &str) -> Option<&'static str> {
        match name {
            "accelerated" | "wasm" => Some("accelerated"),
            "scripted" | "js" => Some("scripted"),
            _ => None,
        }
    }

    fn create_backend(name: &str) -> Arc<dyn Backend> {
        match name {
            "accelerated" => Arc::new(AcceleratedBackend::default()),
            _ => Arc::new(ScriptedBackend::new()),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl BackendFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Backend>, CalcError> {
        let key = Self::canonical(&name.to_ascii_lowercase())
            .ok_or_else(|| CalcError::Config(format!("unknown backend: {name}")))?;

        // Check cache first
        if let Some(backend) = self.cache.read().get(key) {
            return Ok(Arc::clone(backend));
        }

        // Create and cache
        let mut cache = self.cache.write();
        let backend = cache.entry(key.to_string()).or_insert_with(|| {
            debug!(backend = key, "created backend");
            Self::create_backend(key)
        });
        Ok(Arc::clone(backend))
    }

    fn available(&self) -> Vec<&str> {
        vec!["accelerated", "scripted"]
    }
}

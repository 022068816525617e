use super::{CsvHandler, FormatHandler, JsonHandler, RegistryError, XmlHandler};
use crate::paths::{extension_of, normalize_extension};
use std::collections::HashMap;
use std::path::Path;

/// Dispatch table from file extension to format handler
///
/// Handlers are kept in registration order; the extension map points into that
/// list. An extension can only be claimed once, so the first handler that
/// registers it is the one that is always selected.
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn FormatHandler>>,
    /// ".ext" -> index into `handlers`
    map: HashMap<String, usize>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            map: HashMap::new(),
        }
    }

    /// Registry with the JSON, XML and CSV handlers, in that order
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for handler in [
            Box::new(JsonHandler) as Box<dyn FormatHandler>,
            Box::new(XmlHandler),
            Box::new(CsvHandler),
        ] {
            // Built-in extensions are disjoint
            if let Err(e) = registry.register_boxed(handler) {
                tracing::error!("{}", e);
            }
        }
        registry
    }

    /// Register a handler for all of its extensions
    ///
    /// Fails without modifying the registry if any extension is already taken.
    ///
    /// # Example
    /// ```ignore
    /// registry.register(JsonHandler)?;
    /// ```
    pub fn register(&mut self, handler: impl FormatHandler + 'static) -> Result<(), RegistryError> {
        self.register_boxed(Box::new(handler))
    }

    /// Register an already boxed handler; same rules as `register`
    pub fn register_boxed(&mut self, handler: Box<dyn FormatHandler>) -> Result<(), RegistryError> {
        let extensions: Vec<String> = handler
            .extensions()
            .iter()
            .map(|e| normalize_extension(e))
            .collect();

        for ext in &extensions {
            if let Some(&idx) = self.map.get(ext) {
                return Err(RegistryError::DuplicateExtension {
                    extension: ext.clone(),
                    existing: self.handlers[idx].name().to_string(),
                    rejected: handler.name().to_string(),
                });
            }
        }

        let idx = self.handlers.len();
        for ext in extensions {
            tracing::debug!("Registering {} handler for {}", handler.name(), ext);
            self.map.insert(ext, idx);
        }
        self.handlers.push(handler);

        Ok(())
    }

    /// Select the handler for a path by its normalized extension
    ///
    /// Returns `None` when no handler claims the extension.
    pub fn select(&self, path: &Path) -> Option<&dyn FormatHandler> {
        let ext = extension_of(path)?;
        self.map.get(&ext).map(|&idx| &*self.handlers[idx])
    }

    /// Get the number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// List all registered extensions, sorted
    pub fn registered_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.map.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

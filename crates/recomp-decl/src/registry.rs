//! The declaration registry.

use crate::decl::{Algorithm, DeclError};
use std::collections::HashMap;

/// All registered declarations, grouped by family type.
///
/// Built once during initialization and read-only afterwards; evaluations
/// borrow it by shared reference, so independent configurations can be
/// evaluated concurrently against the same registry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    types: HashMap<String, Vec<Algorithm>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an algorithm declaration under a family type. Names must
    /// be unique within a type.
    pub fn register(&mut self, ty: &str, algorithm: Algorithm) -> Result<(), DeclError> {
        let algorithms = self.types.entry(ty.to_string()).or_default();
        if algorithms.iter().any(|a| a.name() == algorithm.name()) {
            return Err(DeclError::DuplicateName {
                ty: ty.to_string(),
                name: algorithm.name().to_string(),
            });
        }
        algorithms.push(algorithm);
        Ok(())
    }

    /// Parse a textual declaration and register it.
    pub fn register_parsed(
        &mut self,
        ty: &str,
        text: &str,
        doc: impl Into<String>,
    ) -> Result<(), DeclError> {
        self.register(ty, Algorithm::parse(text, doc)?)
    }

    /// The declarations registered under a type, in registration order.
    pub fn lookup(&self, ty: &str) -> Option<&[Algorithm]> {
        self.types.get(ty).map(|v| v.as_slice())
    }

    /// Iterate over all registered types and their declarations.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Algorithm])> {
        self.types.iter().map(|(ty, v)| (ty.as_str(), v.as_slice()))
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Catalog of runtime types loadable by canonical name.
//!
//! The default name resolver reaches the catalog through the per-call
//! resolution context, the same way a class loader is reached through a
//! deserialization context.

use crate::types::{PrimitiveKind, RuntimeType};
use std::collections::HashMap;

/// Canonical name -> runtime type.
#[derive(Debug, Default, Clone)]
pub struct TypeCatalog {
    types: HashMap<String, RuntimeType>,
}

impl TypeCatalog {
    /// Create an empty catalog (primitives are still resolvable).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type, replacing any previous type with the same canonical name.
    pub fn insert(&mut self, ty: RuntimeType) {
        self.types.insert(ty.canonical_name().to_string(), ty);
    }

    /// Builder-style [`TypeCatalog::insert`].
    #[must_use]
    pub fn with(mut self, ty: RuntimeType) -> Self {
        self.insert(ty);
        self
    }

    /// Look up a type by canonical name. Primitive names always resolve.
    pub fn get(&self, name: &str) -> Option<RuntimeType> {
        if let Some(ty) = self.types.get(name) {
            return Some(ty.clone());
        }
        PrimitiveKind::from_canonical_name(name).map(RuntimeType::primitive)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of explicitly inserted types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<RuntimeType> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = RuntimeType>>(iter: I) -> Self {
        let mut catalog = TypeCatalog::new();
        for ty in iter {
            catalog.insert(ty);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_inserted_and_primitive() {
        let catalog: TypeCatalog = [RuntimeType::record("com.example.Dog").build()]
            .into_iter()
            .collect();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("com.example.Dog"));
        assert_eq!(
            catalog.get("long"),
            Some(RuntimeType::primitive(PrimitiveKind::I64))
        );
        assert!(catalog.get("com.example.Cat").is_none());
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut catalog = TypeCatalog::new();
        catalog.insert(RuntimeType::abstract_type("a.B").build());
        catalog.insert(RuntimeType::record("a.B").build());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("a.B").unwrap().is_concrete());
    }
}

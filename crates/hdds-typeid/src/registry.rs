// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Explicit logical-name <-> type registry.
//!
//! Both directions live behind one lock and are only touched by
//! [`SubtypeRegistry::register`], so a reader never observes one direction
//! updated without the other.
//!
//! Overwrite rules:
//! - names are unique: the last registration of a name wins;
//! - types are unique: the last registration of a type sets the name it is
//!   written with. Earlier names of that type stay readable as aliases;
//! - when a name moves to a different type, the previous type loses its
//!   written name (if it was that name) and falls back to its canonical id.
//!   This holds even if an older alias of that type is still registered:
//!   after `(T1, "x")`, `(T1, "y")`, `(T2, "y")`, T1 is written with its
//!   canonical id while `"x"` still reads back as T1.
//!
//! So `lookup_by_type(t) == Some(n)` always implies `lookup_by_name(n) == Some(t)`.

use crate::types::{NamedType, RuntimeType};
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct Maps {
    by_name: HashMap<String, RuntimeType>,
    by_type: HashMap<RuntimeType, String>,
}

/// Registry of explicit subtype names. Entries are never removed.
#[derive(Debug, Default)]
pub struct SubtypeRegistry {
    inner: RwLock<Maps>,
}

impl SubtypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `ty` in both directions. Always succeeds.
    pub fn register(&self, ty: RuntimeType, name: &str) {
        debug_assert!(!name.is_empty(), "subtype name must not be empty");

        let mut maps = self.inner.write();

        if let Some(previous) = maps.by_name.insert(name.to_string(), ty.clone()) {
            if previous != ty {
                if maps.by_type.get(&previous).map(String::as_str) == Some(name) {
                    maps.by_type.remove(&previous);
                }
                log::debug!(
                    "[TYPEID] name='{}' moved from {} to {}",
                    name,
                    previous,
                    ty
                );
            }
        }

        if let Some(old_name) = maps.by_type.insert(ty.clone(), name.to_string()) {
            if old_name != name {
                log::debug!(
                    "[TYPEID] type={} now written as '{}' (alias '{}' kept)",
                    ty,
                    name,
                    old_name
                );
            }
        }

        log::debug!("[TYPEID] registered subtype name='{}' type={}", name, ty);
    }

    /// Register every entry in order (same result as calling
    /// [`SubtypeRegistry::register`] for each).
    pub fn register_all<I>(&self, subtypes: I)
    where
        I: IntoIterator<Item = NamedType>,
    {
        for named in subtypes {
            self.register(named.ty, &named.name);
        }
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<RuntimeType> {
        self.inner.read().by_name.get(name).cloned()
    }

    pub fn lookup_by_type(&self, ty: &RuntimeType) -> Option<String> {
        self.inner.read().by_type.get(ty).cloned()
    }

    /// Registered names, sorted for determinism.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.read().by_name.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.inner.read().by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().by_name.is_empty()
    }
}

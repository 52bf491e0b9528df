// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type id resolver for schema-embedded type ids.
//!
//! Schemas carry the canonical name of the type a value was written from.
//! Developers may remap those ids to a different runtime type by registering
//! short logical names; [`TypeIdResolver`] checks that registry first and
//! otherwise hands the id to the default canonical-name scheme.
//!
//! Ids that map to nothing come back as `Ok(None)` so the deserializer can
//! raise its own, more precise error. Validator rejections and unexpected
//! delegate failures are returned as errors.

use crate::class_name::DefaultNameResolver;
use crate::error::ResolveError;
use crate::registry::SubtypeRegistry;
use crate::types::{NamedType, RuntimeType, TypedValue};

/// How type ids are formed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdMechanism {
    /// Fully-qualified canonical names, with registered logical aliases.
    Class,
}

/// Explicit subtype registry in front of a [`DefaultNameResolver`].
#[derive(Debug)]
pub struct TypeIdResolver<R> {
    delegate: R,
    registry: SubtypeRegistry,
}

impl<R: DefaultNameResolver> TypeIdResolver<R> {
    /// Resolver with an empty registry. The base type is the delegate's.
    pub fn new(delegate: R) -> Self {
        Self {
            delegate,
            registry: SubtypeRegistry::new(),
        }
    }

    /// Resolver pre-loaded with `subtypes`, applied in order.
    pub fn with_subtypes<I>(delegate: R, subtypes: I) -> Self
    where
        I: IntoIterator<Item = NamedType>,
    {
        let resolver = Self::new(delegate);
        resolver.registry.register_all(subtypes);
        resolver
    }

    pub fn base_type(&self) -> &RuntimeType {
        self.delegate.base_type()
    }

    pub fn registry(&self) -> &SubtypeRegistry {
        &self.registry
    }

    pub fn delegate(&self) -> &R {
        &self.delegate
    }

    pub fn mechanism(&self) -> IdMechanism {
        IdMechanism::Class
    }

    /// Bind a logical name to `ty` for both reading and writing.
    pub fn register_subtype(&self, ty: RuntimeType, name: &str) {
        self.registry.register(ty, name);
    }

    /// Map a wire id to a runtime type.
    ///
    /// Returns `Ok(None)` when the id maps to no type, including ids the
    /// delegate reports as malformed or invalid. A primitive base type is
    /// returned as-is whatever the id.
    pub fn type_from_id(
        &self,
        ctx: &R::Context,
        id: &str,
    ) -> Result<Option<RuntimeType>, ResolveError> {
        let base = self.delegate.base_type();
        if base.is_primitive() {
            return Ok(Some(base.clone()));
        }

        let canonical = match self.registry.lookup_by_name(id) {
            Some(subtype) => {
                let canonical = self.delegate.compute_id(ctx, &subtype);
                log::trace!("[TYPEID] alias '{}' -> '{}'", id, canonical);
                canonical
            }
            None => id.to_string(),
        };

        match self.delegate.resolve(ctx, &canonical) {
            Ok(resolved) => Ok(resolved),
            Err(err) if err.is_unmapped() => {
                log::debug!("[TYPEID] id='{}' unresolved for base={}: {}", id, base, err);
                Ok(None)
            }
            Err(err) => {
                log::warn!("[TYPEID] id='{}' failed for base={}: {}", id, base, err);
                Err(err)
            }
        }
    }

    /// Like [`TypeIdResolver::type_from_id`], but absence becomes
    /// [`ResolveError::UnknownTypeId`] with the known ids listed.
    pub fn require_type_from_id(
        &self,
        ctx: &R::Context,
        id: &str,
    ) -> Result<RuntimeType, ResolveError> {
        self.type_from_id(ctx, id)?.ok_or_else(|| ResolveError::UnknownTypeId {
            id: id.to_string(),
            base: self.base_type().to_string(),
            known: self.known_type_ids_description(),
        })
    }

    /// Wire id for `ty`: its registered name, else its canonical id.
    pub fn id_from_type(&self, ctx: &R::Context, ty: &RuntimeType) -> String {
        self.registry
            .lookup_by_type(ty)
            .unwrap_or_else(|| self.delegate.compute_id(ctx, ty))
    }

    /// Wire id for a concrete value.
    pub fn id_from_value(&self, ctx: &R::Context, value: &dyn TypedValue) -> String {
        self.id_from_type(ctx, &value.runtime_type())
    }

    /// Wire id for a value of declared type `ty`; the value's own runtime
    /// type wins when a value is present.
    pub fn id_from_value_and_type(
        &self,
        ctx: &R::Context,
        value: Option<&dyn TypedValue>,
        ty: &RuntimeType,
    ) -> String {
        match value {
            Some(value) => self.id_from_value(ctx, value),
            None => self.id_from_type(ctx, ty),
        }
    }

    /// Wire id of the base type.
    pub fn id_from_base_type(&self, ctx: &R::Context) -> String {
        self.id_from_type(ctx, self.delegate.base_type())
    }

    /// Human-readable description of accepted ids, for error messages.
    pub fn known_type_ids_description(&self) -> String {
        let names = self.registry.names();
        if names.is_empty() {
            "class name used as type id".to_string()
        } else {
            format!(
                "class name used as type id, or one of [{}]",
                names.join(", ")
            )
        }
    }
}

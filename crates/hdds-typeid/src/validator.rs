// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Polymorphic type validation.
//!
//! A validator decides whether a type id read off the wire may be turned into
//! a runtime type. It is consulted twice by the class-name resolver: once on
//! the raw name before lookup, and (if that was inconclusive) once on the
//! resolved type.

use crate::types::RuntimeType;
use std::collections::HashSet;

/// Outcome of a validation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Allowed,
    Denied,
    /// Not decided at this step.
    Indeterminate,
}

/// Gatekeeper for polymorphic subtype resolution.
pub trait PolymorphicTypeValidator: Send + Sync {
    /// Check the declared base type itself.
    fn validate_base_type(&self, _base: &RuntimeType) -> Validity {
        Validity::Indeterminate
    }

    /// Check a subtype by canonical name, before it is looked up.
    fn validate_subclass_name(&self, _base: &RuntimeType, _name: &str) -> Validity {
        Validity::Indeterminate
    }

    /// Check a resolved subtype. Anything but `Allowed` refuses it.
    fn validate_subtype(&self, _base: &RuntimeType, _subtype: &RuntimeType) -> Validity {
        Validity::Indeterminate
    }
}

/// Allows every subtype. Only for fully trusted input.
#[derive(Debug, Default, Clone, Copy)]
pub struct LaissezFaireValidator;

impl PolymorphicTypeValidator for LaissezFaireValidator {
    fn validate_base_type(&self, _base: &RuntimeType) -> Validity {
        Validity::Allowed
    }

    fn validate_subclass_name(&self, _base: &RuntimeType, _name: &str) -> Validity {
        Validity::Allowed
    }

    fn validate_subtype(&self, _base: &RuntimeType, _subtype: &RuntimeType) -> Validity {
        Validity::Allowed
    }
}

/// Rule-based validator: allow by name prefix, exact name or base type,
/// deny by exact name or exact base type. Deny rules win over allow rules.
#[derive(Debug, Default, Clone)]
pub struct BasicPolymorphicTypeValidator {
    allowed_prefixes: Vec<String>,
    allowed_names: HashSet<String>,
    allowed_bases: HashSet<String>,
    denied_names: HashSet<String>,
    denied_bases: HashSet<String>,
}

impl BasicPolymorphicTypeValidator {
    pub fn builder() -> BasicValidatorBuilder {
        BasicValidatorBuilder::default()
    }

    fn name_allowed(&self, name: &str) -> bool {
        self.allowed_names.contains(name)
            || self
                .allowed_prefixes
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
    }
}

impl PolymorphicTypeValidator for BasicPolymorphicTypeValidator {
    fn validate_base_type(&self, base: &RuntimeType) -> Validity {
        if self.denied_bases.contains(base.canonical_name()) {
            Validity::Denied
        } else if self.allowed_bases.contains(base.canonical_name()) {
            Validity::Allowed
        } else {
            Validity::Indeterminate
        }
    }

    fn validate_subclass_name(&self, base: &RuntimeType, name: &str) -> Validity {
        if self.denied_names.contains(name) {
            return Validity::Denied;
        }
        if self.allowed_bases.contains(base.canonical_name()) || self.name_allowed(name) {
            return Validity::Allowed;
        }
        Validity::Indeterminate
    }

    fn validate_subtype(&self, base: &RuntimeType, subtype: &RuntimeType) -> Validity {
        let name = subtype.canonical_name();
        if self.denied_names.contains(name) {
            return Validity::Denied;
        }
        if self.allowed_bases.contains(base.canonical_name())
            || self.name_allowed(name)
            || subtype
                .ancestors()
                .any(|ancestor| self.allowed_bases.contains(ancestor))
        {
            return Validity::Allowed;
        }
        Validity::Denied
    }
}

/// Builder for [`BasicPolymorphicTypeValidator`].
#[derive(Debug, Default)]
pub struct BasicValidatorBuilder {
    inner: BasicPolymorphicTypeValidator,
}

impl BasicValidatorBuilder {
    /// Allow any subtype whose canonical name starts with `prefix`.
    #[must_use]
    pub fn allow_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.inner.allowed_prefixes.push(prefix.into());
        self
    }

    /// Allow one subtype by exact canonical name.
    #[must_use]
    pub fn allow_name(mut self, name: impl Into<String>) -> Self {
        self.inner.allowed_names.insert(name.into());
        self
    }

    /// Allow every subtype of `base` (by canonical name).
    #[must_use]
    pub fn allow_base(mut self, base: impl Into<String>) -> Self {
        self.inner.allowed_bases.insert(base.into());
        self
    }

    /// Deny one subtype by exact canonical name, regardless of allow rules.
    #[must_use]
    pub fn deny_name(mut self, name: impl Into<String>) -> Self {
        self.inner.denied_names.insert(name.into());
        self
    }

    /// Deny every subtype of exactly `base`, regardless of allow rules.
    #[must_use]
    pub fn deny_base(mut self, base: impl Into<String>) -> Self {
        self.inner.denied_bases.insert(base.into());
        self
    }

    pub fn build(self) -> BasicPolymorphicTypeValidator {
        self.inner
    }
}

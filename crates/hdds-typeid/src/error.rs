// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type id resolution errors.

use thiserror::Error;

/// Errors surfaced while mapping a wire type id to a runtime type.
///
/// Only [`ResolveError::MalformedId`] and [`ResolveError::InvalidTypeId`]
/// mean "this id does not map to a type". The resolver contains those two and
/// reports absence instead; every other variant reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The id is not syntactically valid for the naming scheme.
    #[error("malformed type id '{id}': {reason}")]
    MalformedId { id: String, reason: String },

    /// The id is well formed but names no usable subtype of the base.
    #[error("invalid type id '{id}': {reason}")]
    InvalidTypeId { id: String, reason: String },

    /// The polymorphic type validator refused the id or the resolved type.
    #[error("type id '{id}' rejected by validator: {reason}")]
    Rejected { id: String, reason: String },

    /// No concrete type for the id (caller-facing form of absence).
    #[error("could not resolve type id '{id}' as a subtype of {base}: known type ids = {known}")]
    UnknownTypeId {
        id: String,
        base: String,
        known: String,
    },

    /// Any other failure raised by the default name resolver.
    #[error("type id resolver failure: {0}")]
    Delegate(String),
}

impl ResolveError {
    pub fn malformed(id: &str, reason: impl Into<String>) -> Self {
        ResolveError::MalformedId {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid(id: &str, reason: impl Into<String>) -> Self {
        ResolveError::InvalidTypeId {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    pub fn rejected(id: &str, reason: impl Into<String>) -> Self {
        ResolveError::Rejected {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// True for failures that only mean "no type for this id".
    pub fn is_unmapped(&self) -> bool {
        matches!(
            self,
            ResolveError::MalformedId { .. } | ResolveError::InvalidTypeId { .. }
        )
    }
}

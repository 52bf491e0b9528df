// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Resolver configuration.
//!
//! Supports both programmatic and file-based (TOML) configuration of the
//! base type, the polymorphic type validator and the initial batch of
//! subtype registrations.
//!
//! ```toml
//! base = "com.example.Animal"
//!
//! [validator]
//! allow_prefixes = ["com.example."]
//! deny_names = ["com.example.Evil"]
//!
//! [[subtypes]]
//! name = "dog"
//! type = "com.example.Dog"
//! ```
//!
//! Without a `[validator]` section every subtype of the base is accepted.
//! With one, configured subtypes are always allowed in addition to the
//! listed rules.

use crate::catalog::TypeCatalog;
use crate::class_name::ClassNameResolver;
use crate::resolver::TypeIdResolver;
use crate::types::NamedType;
use crate::validator::{
    BasicPolymorphicTypeValidator, LaissezFaireValidator, PolymorphicTypeValidator,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown type: {0}")]
    UnknownType(String),
}

/// Type id resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Canonical name of the polymorphic base type.
    pub base: String,

    /// Validator rules; absent means laissez-faire.
    #[serde(default)]
    pub validator: Option<ValidatorConfig>,

    /// Logical subtype names, applied in order.
    #[serde(default)]
    pub subtypes: Vec<SubtypeConfig>,
}

/// Rules for [`BasicPolymorphicTypeValidator`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub laissez_faire: bool,

    #[serde(default)]
    pub allow_prefixes: Vec<String>,

    #[serde(default)]
    pub allow_names: Vec<String>,

    #[serde(default)]
    pub allow_bases: Vec<String>,

    #[serde(default)]
    pub deny_names: Vec<String>,

    #[serde(default)]
    pub deny_bases: Vec<String>,
}

/// One `(name, type)` registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtypeConfig {
    /// Logical name written on the wire.
    pub name: String,

    /// Canonical name of the concrete type.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ResolverConfig {
    /// Configuration for `base` with no subtypes and no validator rules.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            validator: None,
            subtypes: Vec::new(),
        }
    }

    /// Add a subtype registration.
    #[must_use]
    pub fn subtype(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.subtypes.push(SubtypeConfig {
            name: name.into(),
            type_name: type_name.into(),
        });
        self
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base.is_empty() {
            return Err(ConfigError::Invalid("Base type name is empty".into()));
        }

        for (i, subtype) in self.subtypes.iter().enumerate() {
            if subtype.name.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "Subtype {} ({}) has an empty name",
                    i, subtype.type_name
                )));
            }
            if subtype.type_name.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "Subtype {} ('{}') has an empty type",
                    i, subtype.name
                )));
            }
        }

        Ok(())
    }

    /// Validator described by this configuration.
    pub fn build_validator(&self) -> Arc<dyn PolymorphicTypeValidator> {
        let rules = match &self.validator {
            None => return Arc::new(LaissezFaireValidator),
            Some(rules) if rules.laissez_faire => return Arc::new(LaissezFaireValidator),
            Some(rules) => rules,
        };

        let mut builder = BasicPolymorphicTypeValidator::builder();
        for prefix in &rules.allow_prefixes {
            builder = builder.allow_prefix(prefix.as_str());
        }
        for name in &rules.allow_names {
            builder = builder.allow_name(name.as_str());
        }
        for base in &rules.allow_bases {
            builder = builder.allow_base(base.as_str());
        }
        for subtype in &self.subtypes {
            builder = builder.allow_name(subtype.type_name.as_str());
        }
        for name in &rules.deny_names {
            builder = builder.deny_name(name.as_str());
        }
        for base in &rules.deny_bases {
            builder = builder.deny_base(base.as_str());
        }
        Arc::new(builder.build())
    }

    /// Build a resolver, looking up every named type in `catalog`.
    pub fn build(
        &self,
        catalog: &TypeCatalog,
    ) -> Result<TypeIdResolver<ClassNameResolver>, ConfigError> {
        self.validate()?;

        let base = catalog
            .get(&self.base)
            .ok_or_else(|| ConfigError::UnknownType(self.base.clone()))?;

        let subtypes = self
            .subtypes
            .iter()
            .map(|subtype| {
                catalog
                    .get(&subtype.type_name)
                    .map(|ty| NamedType::new(ty, subtype.name.as_str()))
                    .ok_or_else(|| ConfigError::UnknownType(subtype.type_name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "[TYPEID] building resolver base={} subtypes={}",
            base,
            subtypes.len()
        );

        let delegate = ClassNameResolver::new(base, self.build_validator());
        Ok(TypeIdResolver::with_subtypes(delegate, subtypes))
    }
}

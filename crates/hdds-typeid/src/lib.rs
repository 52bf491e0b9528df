// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Polymorphic type id resolution for HDDS schemas.
//!
//! Binary schemas that carry polymorphic values embed a type id naming the
//! concrete type a value was written from. By default that id is the type's
//! fully-qualified canonical name; developers may also register short
//! logical names so embedded ids can be remapped to a different runtime type.
//!
//! # Features
//!
//! - **Explicit subtype registry**: logical name <-> type, updated atomically
//! - **Canonical-name fallback**: ids without an alias go to a
//!   [`DefaultNameResolver`] ([`ClassNameResolver`] out of the box)
//! - **Failure containment**: unmapped or malformed ids resolve to `None`;
//!   validator rejections still surface as errors
//! - **Configuration**: TOML description of base type, validator and subtypes
//!
//! # Architecture
//!
//! ```text
//! Polymorphic deserializer
//!        |  (ctx, id)
//!        v
//!   TypeIdResolver ---- SubtypeRegistry (alias -> type)
//!        |  canonical id
//!        v
//!   ClassNameResolver -- PolymorphicTypeValidator
//!        |
//!        v
//!   TypeCatalog (via ResolutionContext)
//! ```
//!
//! # Example
//!
//! ```
//! use hdds_typeid::{
//!     ClassNameResolver, LaissezFaireValidator, NamedType, ResolutionContext, RuntimeType,
//!     TypeCatalog, TypeIdResolver,
//! };
//! use std::sync::Arc;
//!
//! let animal = RuntimeType::abstract_type("com.example.Animal").build();
//! let dog = RuntimeType::record("com.example.Dog").extends(&animal).build();
//! let ctx = ResolutionContext::from(TypeCatalog::new().with(animal.clone()).with(dog.clone()));
//!
//! let resolver = TypeIdResolver::with_subtypes(
//!     ClassNameResolver::new(animal, Arc::new(LaissezFaireValidator)),
//!     [NamedType::new(dog.clone(), "dog")],
//! );
//!
//! assert_eq!(resolver.type_from_id(&ctx, "dog").unwrap(), Some(dog.clone()));
//! assert_eq!(resolver.id_from_type(&ctx, &dog), "dog");
//! assert_eq!(resolver.type_from_id(&ctx, "com.example.Unicorn").unwrap(), None);
//! ```

pub mod catalog;
pub mod class_name;
pub mod config;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod types;
pub mod validator;

pub use catalog::TypeCatalog;
pub use class_name::{ClassNameResolver, DefaultNameResolver, ResolutionContext};
pub use config::{ConfigError, ResolverConfig, SubtypeConfig, ValidatorConfig};
pub use error::ResolveError;
pub use registry::SubtypeRegistry;
pub use resolver::{IdMechanism, TypeIdResolver};
pub use types::{
    NamedType, PrimitiveKind, RuntimeType, RuntimeTypeBuilder, TypeKind, TypedValue,
};
pub use validator::{
    BasicPolymorphicTypeValidator, BasicValidatorBuilder, LaissezFaireValidator,
    PolymorphicTypeValidator, Validity,
};

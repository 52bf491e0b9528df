// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Default type id scheme: fully-qualified canonical names.
//!
//! [`DefaultNameResolver`] is the seam the [`TypeIdResolver`] delegates to
//! for ids it has no explicit alias for, and for computing the canonical id
//! of a type. [`ClassNameResolver`] is the canonical-name implementation: it
//! checks id syntax, consults the polymorphic type validator, loads the type
//! from the context's [`TypeCatalog`] and verifies it is a subtype of the
//! base.
//!
//! Accepted id syntax: one or more segments of `[A-Za-z0-9_$]` separated by
//! `.` or `::` (e.g. `com.example.Dog`, `sensor_msgs::PointCloud2`).
//!
//! [`TypeIdResolver`]: crate::TypeIdResolver

use crate::catalog::TypeCatalog;
use crate::error::ResolveError;
use crate::types::RuntimeType;
use crate::validator::{PolymorphicTypeValidator, Validity};
use std::fmt;
use std::sync::Arc;

/// Default identifier <-> type mapping used behind the explicit registry.
pub trait DefaultNameResolver: Send + Sync {
    /// Opaque per-call context, passed through untouched by the registry.
    type Context: ?Sized;

    /// Declared polymorphic base type for this resolution site.
    fn base_type(&self) -> &RuntimeType;

    /// Map a canonical id to a type.
    ///
    /// `MalformedId` / `InvalidTypeId` errors mean "no type for this id";
    /// any other error is a hard failure.
    fn resolve(&self, ctx: &Self::Context, id: &str) -> Result<Option<RuntimeType>, ResolveError>;

    /// Canonical id of `ty` in this scheme.
    fn compute_id(&self, ctx: &Self::Context, ty: &RuntimeType) -> String;
}

/// Per-call context for [`ClassNameResolver`]: where types are loaded from.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    catalog: Arc<TypeCatalog>,
}

impl ResolutionContext {
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }
}

impl From<TypeCatalog> for ResolutionContext {
    fn from(catalog: TypeCatalog) -> Self {
        Self::new(Arc::new(catalog))
    }
}

/// Canonical-name resolver guarded by a [`PolymorphicTypeValidator`].
pub struct ClassNameResolver {
    base: RuntimeType,
    validator: Arc<dyn PolymorphicTypeValidator>,
    /// Validator verdict on the base type. `Allowed` skips per-subtype
    /// checks, `Denied` refuses every subtype.
    base_validity: Validity,
}

impl ClassNameResolver {
    pub fn new(base: RuntimeType, validator: Arc<dyn PolymorphicTypeValidator>) -> Self {
        let base_validity = validator.validate_base_type(&base);
        match base_validity {
            Validity::Allowed => log::debug!(
                "[TYPEID] base='{}' allowed by validator, subtype checks skipped",
                base
            ),
            Validity::Denied => log::warn!(
                "[TYPEID] base='{}' denied by validator, all subtypes rejected",
                base
            ),
            Validity::Indeterminate => {}
        }
        Self {
            base,
            validator,
            base_validity,
        }
    }

    fn check_name(&self, id: &str) -> Result<Validity, ResolveError> {
        match self.base_validity {
            Validity::Allowed => return Ok(Validity::Allowed),
            Validity::Denied => {
                return Err(ResolveError::rejected(
                    id,
                    format!("base type {} denied by validator", self.base),
                ))
            }
            Validity::Indeterminate => {}
        }
        match self.validator.validate_subclass_name(&self.base, id) {
            Validity::Denied => Err(ResolveError::rejected(
                id,
                format!("subtype name not allowed for base {}", self.base),
            )),
            other => Ok(other),
        }
    }

    fn check_subtype(&self, id: &str, ty: &RuntimeType) -> Result<(), ResolveError> {
        match self.validator.validate_subtype(&self.base, ty) {
            Validity::Allowed => Ok(()),
            _ => Err(ResolveError::rejected(
                id,
                format!("subtype {} not allowed for base {}", ty, self.base),
            )),
        }
    }
}

impl fmt::Debug for ClassNameResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassNameResolver")
            .field("base", &self.base)
            .field("base_validity", &self.base_validity)
            .finish_non_exhaustive()
    }
}

impl DefaultNameResolver for ClassNameResolver {
    type Context = ResolutionContext;

    fn base_type(&self) -> &RuntimeType {
        &self.base
    }

    fn resolve(
        &self,
        ctx: &ResolutionContext,
        id: &str,
    ) -> Result<Option<RuntimeType>, ResolveError> {
        check_id_syntax(id).map_err(|reason| ResolveError::malformed(id, reason))?;

        let name_check = self.check_name(id)?;

        let ty = ctx
            .catalog()
            .get(id)
            .ok_or_else(|| ResolveError::invalid(id, "no such type"))?;

        if !ty.is_assignable_to(&self.base) {
            return Err(ResolveError::invalid(
                id,
                format!("not a subtype of {}", self.base),
            ));
        }

        if name_check != Validity::Allowed {
            self.check_subtype(id, &ty)?;
        }

        Ok(Some(ty))
    }

    fn compute_id(&self, _ctx: &ResolutionContext, ty: &RuntimeType) -> String {
        ty.canonical_name().to_string()
    }
}

/// Reject ids that cannot be canonical names.
fn check_id_syntax(id: &str) -> Result<(), &'static str> {
    if id.is_empty() {
        return Err("empty type id");
    }
    if id.contains(['<', '>', '[', ']']) {
        return Err("parameterized type ids are not supported");
    }
    for segment in id.split("::").flat_map(|part| part.split('.')) {
        if segment.is_empty() {
            return Err("empty name segment");
        }
        if !segment
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            return Err("illegal character in type id");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::TypeIdResolver;
    use crate::types::PrimitiveKind;
    use crate::validator::{BasicPolymorphicTypeValidator, LaissezFaireValidator};

    fn fixture() -> (RuntimeType, ResolutionContext) {
        let animal = RuntimeType::abstract_type("com.example.Animal").build();
        let dog = RuntimeType::record("com.example.Dog").extends(&animal).build();
        let rock = RuntimeType::record("com.example.Rock").build();
        let ctx: ResolutionContext = TypeCatalog::new()
            .with(animal.clone())
            .with(dog)
            .with(rock)
            .into();
        (animal, ctx)
    }

    #[test]
    fn syntax_rules() {
        assert!(check_id_syntax("com.example.Dog").is_ok());
        assert!(check_id_syntax("sensor_msgs::PointCloud2").is_ok());
        assert!(check_id_syntax("Outer$Inner").is_ok());
        assert!(check_id_syntax("int").is_ok());
        assert!(check_id_syntax("").is_err());
        assert!(check_id_syntax("a..b").is_err());
        assert!(check_id_syntax(".a").is_err());
        assert!(check_id_syntax("a.b.").is_err());
        assert!(check_id_syntax("java.util.List<String>").is_err());
        assert!(check_id_syntax("has space").is_err());
        assert!(check_id_syntax("a:b").is_err());
    }

    #[test]
    fn resolves_known_subtype() {
        let (animal, ctx) = fixture();
        let resolver = ClassNameResolver::new(animal, Arc::new(LaissezFaireValidator));
        let ty = resolver.resolve(&ctx, "com.example.Dog").unwrap().unwrap();
        assert_eq!(ty.canonical_name(), "com.example.Dog");
        assert_eq!(resolver.compute_id(&ctx, &ty), "com.example.Dog");
    }

    #[test]
    fn unknown_and_unrelated_are_invalid() {
        let (animal, ctx) = fixture();
        let resolver = ClassNameResolver::new(animal, Arc::new(LaissezFaireValidator));

        let err = resolver.resolve(&ctx, "not.a.real.Class").unwrap_err();
        assert!(matches!(err, ResolveError::InvalidTypeId { .. }));

        let err = resolver.resolve(&ctx, "com.example.Rock").unwrap_err();
        assert!(matches!(err, ResolveError::InvalidTypeId { .. }));

        let err = resolver.resolve(&ctx, "int").unwrap_err();
        assert!(err.is_unmapped());
    }

    #[test]
    fn malformed_id_is_reported_as_such() {
        let (animal, ctx) = fixture();
        let resolver = ClassNameResolver::new(animal, Arc::new(LaissezFaireValidator));
        let err = resolver.resolve(&ctx, "").unwrap_err();
        assert!(matches!(err, ResolveError::MalformedId { .. }));
    }

    #[test]
    fn denied_name_is_rejected() {
        let (animal, ctx) = fixture();
        let validator = BasicPolymorphicTypeValidator::builder()
            .allow_prefix("com.example.")
            .deny_name("com.example.Dog")
            .build();
        let resolver = ClassNameResolver::new(animal, Arc::new(validator));
        let err = resolver.resolve(&ctx, "com.example.Dog").unwrap_err();
        assert!(matches!(err, ResolveError::Rejected { .. }));
    }

    #[test]
    fn unvouched_subtype_is_rejected() {
        let (animal, ctx) = fixture();
        let validator = BasicPolymorphicTypeValidator::builder()
            .allow_prefix("org.other.")
            .build();
        let resolver = ClassNameResolver::new(animal, Arc::new(validator));
        let err = resolver.resolve(&ctx, "com.example.Dog").unwrap_err();
        assert!(matches!(err, ResolveError::Rejected { .. }));
    }

    #[test]
    fn denied_base_rejects_every_subtype() {
        let (animal, ctx) = fixture();
        let validator = BasicPolymorphicTypeValidator::builder()
            .allow_prefix("com.example.")
            .deny_base("com.example.Animal")
            .build();
        let resolver = ClassNameResolver::new(animal, Arc::new(validator));

        let err = resolver.resolve(&ctx, "com.example.Dog").unwrap_err();
        assert!(matches!(err, ResolveError::Rejected { .. }));

        // Syntax is still checked first.
        let err = resolver.resolve(&ctx, "a..b").unwrap_err();
        assert!(matches!(err, ResolveError::MalformedId { .. }));
    }

    #[test]
    fn custom_validator_denying_base_wins_over_name_rules() {
        struct DenyObjectBase;

        impl PolymorphicTypeValidator for DenyObjectBase {
            fn validate_base_type(&self, base: &RuntimeType) -> Validity {
                if base.canonical_name() == "java.lang.Object" {
                    Validity::Denied
                } else {
                    Validity::Indeterminate
                }
            }

            fn validate_subclass_name(&self, _base: &RuntimeType, name: &str) -> Validity {
                if name.starts_with("com.example.") {
                    Validity::Allowed
                } else {
                    Validity::Indeterminate
                }
            }
        }

        let object = RuntimeType::any("java.lang.Object");
        let (_, ctx) = fixture();
        let resolver =
            TypeIdResolver::new(ClassNameResolver::new(object, Arc::new(DenyObjectBase)));

        let err = resolver.type_from_id(&ctx, "com.example.Dog").unwrap_err();
        assert!(matches!(err, ResolveError::Rejected { .. }));
    }

    #[test]
    fn allowed_base_skips_subtype_checks() {
        let (animal, ctx) = fixture();
        let validator = BasicPolymorphicTypeValidator::builder()
            .allow_base("com.example.Animal")
            .build();
        let resolver = ClassNameResolver::new(animal, Arc::new(validator));
        assert!(resolver.resolve(&ctx, "com.example.Dog").unwrap().is_some());
    }

    #[test]
    fn primitive_names_resolve_against_primitive_base() {
        let base = RuntimeType::primitive(PrimitiveKind::I32);
        let resolver = ClassNameResolver::new(base.clone(), Arc::new(LaissezFaireValidator));
        let ctx = ResolutionContext::from(TypeCatalog::new());
        assert_eq!(resolver.resolve(&ctx, "int").unwrap(), Some(base));
    }
}

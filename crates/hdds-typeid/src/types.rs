// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type descriptors resolved from wire type ids.
//!
//! A [`RuntimeType`] stands in for the concrete class a polymorphic value
//! decodes into. It carries its canonical name (the default wire identity),
//! its [`TypeKind`], and the transitive list of supertypes it can be assigned
//! to. Identity is the canonical name: two descriptors with the same name are
//! the same type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Primitive (unboxed) kinds. These never have polymorphic subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Char,
}

impl PrimitiveKind {
    /// Every primitive kind, in declaration order.
    pub const ALL: [PrimitiveKind; 12] = [
        PrimitiveKind::Bool,
        PrimitiveKind::I8,
        PrimitiveKind::I16,
        PrimitiveKind::I32,
        PrimitiveKind::I64,
        PrimitiveKind::U8,
        PrimitiveKind::U16,
        PrimitiveKind::U32,
        PrimitiveKind::U64,
        PrimitiveKind::F32,
        PrimitiveKind::F64,
        PrimitiveKind::Char,
    ];

    /// Canonical name used as the wire identity of this primitive.
    pub const fn canonical_name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "boolean",
            PrimitiveKind::I8 => "byte",
            PrimitiveKind::I16 => "short",
            PrimitiveKind::I32 => "int",
            PrimitiveKind::I64 => "long",
            PrimitiveKind::U8 => "ubyte",
            PrimitiveKind::U16 => "ushort",
            PrimitiveKind::U32 => "uint",
            PrimitiveKind::U64 => "ulong",
            PrimitiveKind::F32 => "float",
            PrimitiveKind::F64 => "double",
            PrimitiveKind::Char => "char",
        }
    }

    /// Reverse of [`PrimitiveKind::canonical_name`].
    pub fn from_canonical_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.canonical_name() == name)
    }
}

/// Classification of a runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Unboxed scalar; resolution against a primitive base is trivial.
    Primitive(PrimitiveKind),
    /// Concrete, instantiable struct-like type.
    Record,
    /// Enumeration.
    Enum,
    /// Interface or abstract base; declared as a polymorphic supertype.
    Abstract,
    /// Root type that every non-primitive type is assignable to.
    Any,
}

#[derive(Debug)]
struct TypeInfo {
    name: Arc<str>,
    kind: TypeKind,
    /// Transitive ancestors, nearest first.
    ancestors: Vec<Arc<str>>,
}

/// Concrete runtime type descriptor.
///
/// Cheap to clone. Equality and hashing use the canonical name only.
#[derive(Clone)]
pub struct RuntimeType {
    inner: Arc<TypeInfo>,
}

impl RuntimeType {
    /// Descriptor for a primitive kind, named by its canonical name.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::from_parts(kind.canonical_name().into(), TypeKind::Primitive(kind), Vec::new())
    }

    /// Root type (`Object`-like) that accepts any non-primitive subtype.
    pub fn any(name: &str) -> Self {
        Self::from_parts(name.into(), TypeKind::Any, Vec::new())
    }

    /// Start building a concrete record type.
    pub fn record(name: &str) -> RuntimeTypeBuilder {
        RuntimeTypeBuilder::new(name, TypeKind::Record)
    }

    /// Start building an abstract/interface type.
    pub fn abstract_type(name: &str) -> RuntimeTypeBuilder {
        RuntimeTypeBuilder::new(name, TypeKind::Abstract)
    }

    /// Start building an enumeration type.
    pub fn enumeration(name: &str) -> RuntimeTypeBuilder {
        RuntimeTypeBuilder::new(name, TypeKind::Enum)
    }

    fn from_parts(name: Arc<str>, kind: TypeKind, ancestors: Vec<Arc<str>>) -> Self {
        Self {
            inner: Arc::new(TypeInfo {
                name,
                kind,
                ancestors,
            }),
        }
    }

    /// Fully-qualified canonical name (default wire identity).
    pub fn canonical_name(&self) -> &str {
        &self.inner.name
    }

    pub fn kind(&self) -> TypeKind {
        self.inner.kind
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.inner.kind, TypeKind::Primitive(_))
    }

    /// Whether values can be instantiated directly from this type.
    pub fn is_concrete(&self) -> bool {
        matches!(
            self.inner.kind,
            TypeKind::Record | TypeKind::Enum | TypeKind::Primitive(_)
        )
    }

    /// Transitive supertypes, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        self.inner.ancestors.iter().map(|name| &**name)
    }

    /// True if a value of `self` may be used where `base` is declared.
    pub fn is_assignable_to(&self, base: &RuntimeType) -> bool {
        if self == base {
            return true;
        }
        if base.kind() == TypeKind::Any {
            return !self.is_primitive();
        }
        self.ancestors().any(|name| name == base.canonical_name())
    }
}

impl PartialEq for RuntimeType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.name == other.inner.name
    }
}

impl Eq for RuntimeType {}

impl Hash for RuntimeType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.name.hash(state);
    }
}

impl fmt::Debug for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeType")
            .field("name", &self.inner.name)
            .field("kind", &self.inner.kind)
            .finish()
    }
}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

/// Fluent builder for non-primitive [`RuntimeType`]s.
///
/// ```
/// use hdds_typeid::RuntimeType;
///
/// let animal = RuntimeType::abstract_type("com.example.Animal").build();
/// let dog = RuntimeType::record("com.example.Dog").extends(&animal).build();
/// assert!(dog.is_assignable_to(&animal));
/// ```
#[derive(Debug)]
pub struct RuntimeTypeBuilder {
    name: Arc<str>,
    kind: TypeKind,
    ancestors: Vec<Arc<str>>,
}

impl RuntimeTypeBuilder {
    fn new(name: &str, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ancestors: Vec::new(),
        }
    }

    /// Declare `parent` as a supertype. Its own ancestors are inherited.
    #[must_use]
    pub fn extends(mut self, parent: &RuntimeType) -> Self {
        let inherited = std::iter::once(&parent.inner.name).chain(parent.inner.ancestors.iter());
        for name in inherited {
            if !self.ancestors.contains(name) {
                self.ancestors.push(Arc::clone(name));
            }
        }
        self
    }

    pub fn build(self) -> RuntimeType {
        RuntimeType::from_parts(self.name, self.kind, self.ancestors)
    }
}

/// Subtype registration entry: a logical name bound to a concrete type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub ty: RuntimeType,
    pub name: String,
}

impl NamedType {
    pub fn new(ty: RuntimeType, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

/// A value that knows its own runtime type (serialization direction).
pub trait TypedValue {
    fn runtime_type(&self) -> RuntimeType;
}

impl TypedValue for RuntimeType {
    fn runtime_type(&self) -> RuntimeType {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_names_round_trip() {
        for kind in PrimitiveKind::ALL {
            assert_eq!(
                PrimitiveKind::from_canonical_name(kind.canonical_name()),
                Some(kind)
            );
        }
        assert_eq!(PrimitiveKind::from_canonical_name("Integer"), None);
    }

    #[test]
    fn equality_is_by_canonical_name() {
        let a = RuntimeType::record("com.example.Dog").build();
        let b = RuntimeType::abstract_type("com.example.Dog").build();
        assert_eq!(a, b);
        assert_ne!(a, RuntimeType::record("com.example.Cat").build());
    }

    #[test]
    fn ancestors_are_transitive() {
        let animal = RuntimeType::abstract_type("com.example.Animal").build();
        let mammal = RuntimeType::abstract_type("com.example.Mammal")
            .extends(&animal)
            .build();
        let dog = RuntimeType::record("com.example.Dog").extends(&mammal).build();

        assert!(dog.is_assignable_to(&animal));
        assert!(dog.is_assignable_to(&mammal));
        assert!(!animal.is_assignable_to(&dog));
        assert_eq!(
            dog.ancestors().collect::<Vec<_>>(),
            vec!["com.example.Mammal", "com.example.Animal"]
        );
    }

    #[test]
    fn any_base_accepts_objects_only() {
        let object = RuntimeType::any("java.lang.Object");
        let dog = RuntimeType::record("com.example.Dog").build();
        assert!(dog.is_assignable_to(&object));
        assert!(!RuntimeType::primitive(PrimitiveKind::I32).is_assignable_to(&object));
    }

    #[test]
    fn enumeration_is_concrete_subtype() {
        let base = RuntimeType::abstract_type("com.example.Coded").build();
        let color = RuntimeType::enumeration("com.example.Color")
            .extends(&base)
            .build();
        assert_eq!(color.kind(), TypeKind::Enum);
        assert!(color.is_concrete());
        assert!(!color.is_primitive());
        assert!(color.is_assignable_to(&base));
    }

    #[test]
    fn primitive_flags() {
        let int = RuntimeType::primitive(PrimitiveKind::I32);
        assert!(int.is_primitive());
        assert!(int.is_concrete());
        assert_eq!(int.canonical_name(), "int");
        assert!(!RuntimeType::abstract_type("a.B").build().is_concrete());
    }
}

//! Schema types

use crate::types::OrderedMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Built-in scalar types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    String,
    Int,
    Float,
    Boolean,
    ID,
}

impl Scalar {
    /// SDL spelling of the scalar
    pub fn as_str(self) -> &'static str {
        match self {
            Scalar::String => "String",
            Scalar::Int => "Int",
            Scalar::Float => "Float",
            Scalar::Boolean => "Boolean",
            Scalar::ID => "ID",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a type as written in SDL: `T`, `[T]`, `T!`, `[T!]!`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A scalar or a registered object type, by name
    Named(String),
    /// List of the inner type
    List(Box<TypeRef>),
    /// Non-null wrapper (`!`)
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Reference a built-in scalar
    pub fn scalar(scalar: Scalar) -> Self {
        TypeRef::Named(scalar.as_str().to_string())
    }

    /// Reference a named object type
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wrap in a list
    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// Wrap in non-null; already non-null types are returned unchanged
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            TypeRef::NonNull(_) => self,
            other => TypeRef::NonNull(Box::new(other)),
        }
    }

    /// Mark the type as required.
    ///
    /// A list carries its own nullability encoding: requiring it makes both
    /// the list and its elements non-null (`[T]` → `[T!]!`). Types that are
    /// already non-null are never suffixed twice.
    #[must_use]
    pub fn required(self) -> Self {
        match self {
            TypeRef::NonNull(_) => self,
            TypeRef::List(inner) => TypeRef::list(inner.non_null()).non_null(),
            named @ TypeRef::Named(_) => named.non_null(),
        }
    }

    /// Check for a trailing `!`
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Check for a list shape, nullable or not
    pub fn is_list(&self) -> bool {
        match self {
            TypeRef::List(_) => true,
            TypeRef::NonNull(inner) => inner.is_list(),
            TypeRef::Named(_) => false,
        }
    }

    /// Innermost named type (`[Post!]!` → `Post`)
    pub fn base_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl From<Scalar> for TypeRef {
    fn from(scalar: Scalar) -> Self {
        TypeRef::scalar(scalar)
    }
}

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resolved type of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    /// Type reference, with `!` already applied when required
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Whether the field was present in every observation
    pub required: bool,
}

impl FieldSchema {
    /// A required field; the type is made non-null
    pub fn required(ty: TypeRef) -> Self {
        Self {
            ty: ty.required(),
            required: true,
        }
    }

    /// A member of a nested object type: only the outer type gets `!`,
    /// so `[String]` becomes `[String]!`
    pub fn nested_member(ty: TypeRef) -> Self {
        Self {
            ty: ty.non_null(),
            required: true,
        }
    }

    /// An optional field; the type is kept as observed
    pub fn optional(ty: TypeRef) -> Self {
        Self {
            ty,
            required: false,
        }
    }
}

/// Field name to resolved field, in first-seen order
pub type FieldMap = OrderedMap<FieldSchema>;

/// Analysis result for one top-level collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionSchema {
    /// Source collection name
    pub collection: String,
    /// Derived object type name
    pub type_name: String,
    /// Resolved fields
    pub fields: FieldMap,
    /// Number of documents the analysis saw
    pub sampled: usize,
}

impl CollectionSchema {
    /// Schema of a collection that sampled no documents
    pub fn empty(collection: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            type_name: type_name.into(),
            fields: FieldMap::new(),
            sampled: 0,
        }
    }

    /// Check if no fields were found
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field
    pub fn get_field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }
}

/// Argument of a root query field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// One field of the root query type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryField {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl QueryField {
    /// `posts: [Post!]!`
    pub fn list_accessor(name: impl Into<String>, type_name: &str) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            ty: TypeRef::list(TypeRef::named(type_name).non_null()).non_null(),
        }
    }

    /// `post(id: ID!): Post`
    pub fn by_id_accessor(name: impl Into<String>, type_name: &str) -> Self {
        Self {
            name: name.into(),
            arguments: vec![Argument {
                name: crate::types::SCHEMA_ID_FIELD.to_string(),
                ty: TypeRef::scalar(Scalar::ID).non_null(),
            }],
            ty: TypeRef::named(type_name),
        }
    }
}

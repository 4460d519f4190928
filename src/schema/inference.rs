//! Value type inference
//!
//! Maps one runtime value to a scalar, list or object type reference.
//! Object values (and lists whose first element is an object) register a
//! nested type as a side effect. Inference never fails: values with no
//! better answer resolve to `String`.

use super::context::InferenceContext;
use super::types::{Scalar, TypeRef};
use crate::naming::nested_type_name;
use crate::source::Value;
use regex::Regex;
use std::sync::LazyLock;

/// 24 hex characters: the textual form of a document identifier
static OBJECT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{24}$").expect("Invalid object id regex"));

impl InferenceContext {
    /// Infer the type of `value` found under `field_name` of `owner_type`
    pub fn infer(&mut self, value: &Value, field_name: &str, owner_type: &str) -> TypeRef {
        match value {
            Value::Null => TypeRef::scalar(Scalar::String),
            Value::String(s) if is_object_id(s) => TypeRef::scalar(Scalar::ID),
            Value::String(_) => TypeRef::scalar(Scalar::String),
            Value::Int(_) => TypeRef::scalar(Scalar::Int),
            Value::Float(f) if is_integral(*f) => TypeRef::scalar(Scalar::Int),
            Value::Float(_) => TypeRef::scalar(Scalar::Float),
            Value::Bool(_) => TypeRef::scalar(Scalar::Boolean),
            Value::Date(_) => TypeRef::scalar(Scalar::String),
            Value::List(items) => self.infer_list(items, field_name, owner_type),
            Value::Object(document) => {
                let type_name = nested_type_name(owner_type, field_name);
                self.register_if_absent(&type_name, document);
                TypeRef::named(type_name)
            }
            Value::Other(_) => {
                tracing::trace!(field_name, kind = value.kind(), "Unrecognized value, using String");
                TypeRef::scalar(Scalar::String)
            }
        }
    }

    /// The list shape is decided by the first element alone
    fn infer_list(&mut self, items: &[Value], field_name: &str, owner_type: &str) -> TypeRef {
        let Some(first) = items.first() else {
            return TypeRef::list(TypeRef::scalar(Scalar::String));
        };
        match first.as_object() {
            Some(document) => {
                let type_name = nested_type_name(owner_type, field_name);
                self.register_if_absent(&type_name, document);
                TypeRef::list(TypeRef::named(type_name).non_null())
            }
            None => TypeRef::list(self.infer(first, field_name, owner_type)),
        }
    }
}

/// Check for the 24-hex-character identifier form
pub fn is_object_id(s: &str) -> bool {
    OBJECT_ID.is_match(s)
}

fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0
}

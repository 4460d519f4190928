//! Document value model
//!
//! Values are restricted to the kinds a document store hands back: null,
//! strings, numbers, booleans, dates, lists and nested mappings. Anything
//! else is carried as [`Value::Other`] and infers to the fallback scalar.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// A sampled document: field name to value, in stored key order
pub type Document = IndexMap<String, Value>;

/// A single runtime value inside a document
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Date(DateTime<Utc>),
    List(Vec<Value>),
    Object(Document),
    /// Store-specific value with no schema counterpart (binary, regex, ...)
    Other(String),
}

impl Value {
    /// Short name of the runtime kind, used in log output
    pub fn kind(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::List(_) => "list",
            Value::Object(_) => "object",
            Value::Other(kind) => kind,
        }
    }

    /// Borrow the nested document if this is an object
    pub fn as_object(&self) -> Option<&Document> {
        match self {
            Value::Object(document) => Some(document),
            _ => None,
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => match from_extended_json(&map) {
                Some(value) => value,
                None => Value::Object(
                    map.into_iter()
                        .map(|(key, value)| (key, Value::from(value)))
                        .collect(),
                ),
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

/// Convert a JSON value into a document, if it is an object
pub fn into_document(value: JsonValue) -> Option<Document> {
    match Value::from(value) {
        Value::Object(document) => Some(document),
        _ => None,
    }
}

/// Unwrap MongoDB Extended JSON type wrappers (`{"$oid": ..}`, `{"$date": ..}`, ...)
fn from_extended_json(map: &serde_json::Map<String, JsonValue>) -> Option<Value> {
    if map.len() != 1 {
        return None;
    }
    let (key, inner) = map.iter().next()?;

    match key.as_str() {
        "$oid" => inner.as_str().map(|hex| Value::String(hex.to_string())),
        "$date" => parse_extended_date(inner).map(Value::Date),
        "$numberInt" | "$numberLong" => inner.as_str()?.parse::<i64>().ok().map(Value::Int),
        "$numberDouble" | "$numberDecimal" => {
            inner.as_str()?.parse::<f64>().ok().map(Value::Float)
        }
        "$binary" | "$uuid" | "$regularExpression" | "$timestamp" | "$symbol" | "$code"
        | "$dbPointer" | "$minKey" | "$maxKey" => {
            Some(Value::Other(key.trim_start_matches('$').to_string()))
        }
        _ => None,
    }
}

/// Older mongoexport output writes the offset without a colon (`-0500`)
const LEGACY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// `$date` is either an ISO-8601 string, epoch millis, or `{"$numberLong": "<millis>"}`
fn parse_extended_date(inner: &JsonValue) -> Option<DateTime<Utc>> {
    match inner {
        JsonValue::String(s) => DateTime::parse_from_rfc3339(s)
            .or_else(|_| DateTime::parse_from_str(s, LEGACY_DATE_FORMAT))
            .ok()
            .map(|date| date.with_timezone(&Utc)),
        JsonValue::Number(n) => DateTime::from_timestamp_millis(n.as_i64()?),
        JsonValue::Object(map) => {
            let millis = map.get("$numberLong")?.as_str()?.parse::<i64>().ok()?;
            DateTime::from_timestamp_millis(millis)
        }
        _ => None,
    }
}

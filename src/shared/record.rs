/**
 * Record Data Structure
 *
 * A record is one opaque JSON value inside a collection. The relay only ever
 * looks at one field of it: the `id`, used to locate the record during a
 * single-record upsert. Everything else is stored and rebroadcast verbatim.
 *
 * # Matching
 *
 * Two records are the same record when their raw `id` values are strictly
 * equal: same JSON type and same value, numbers by value. A missing `id`
 * matches another missing `id`, and `null` matches `null`, but the two never
 * match each other. Object and array ids never match anything.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

/// One item of a collection
///
/// Serialized transparently, so a `Record` is exactly the JSON the client sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(serde_json::Value);

impl Record {
    /// Wrap a JSON value
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Identity of this record, if it is an object with a string or numeric `id`
    pub fn id(&self) -> Option<RecordId> {
        match self.0.get("id")? {
            serde_json::Value::String(s) => Some(RecordId::Text(s.clone())),
            serde_json::Value::Number(n) => Some(RecordId::Number(n.clone())),
            _ => None,
        }
    }

    /// Whether `other` occupies the same slot in a collection
    ///
    /// A JSON `null` record has no fields at all and matches nothing.
    pub fn same_id(&self, other: &Record) -> bool {
        if self.0.is_null() || other.0.is_null() {
            return false;
        }
        match (self.0.get("id"), other.0.get("id")) {
            (None, None) => true,
            (Some(a), Some(b)) => strictly_equal(a, b),
            _ => false,
        }
    }

    /// Borrow the underlying JSON
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consume the record, returning the underlying JSON
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

fn strictly_equal(a: &serde_json::Value, b: &serde_json::Value) -> bool {
    use serde_json::Value;

    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => {
            RecordId::Number(x.clone()) == RecordId::Number(y.clone())
        }
        _ => false,
    }
}

impl From<serde_json::Value> for Record {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Record identity
///
/// A text id never equals a numeric one, so `"7"` and `7` are different
/// records. Numbers compare by value, so `1` and `1.0` are the same record.
#[derive(Debug, Clone)]
pub enum RecordId {
    /// String id (the common case, e.g. `"1712345678901"`)
    Text(String),
    /// Numeric id
    Number(serde_json::Number),
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RecordId::Text(a), RecordId::Text(b)) => a == b,
            (RecordId::Number(a), RecordId::Number(b)) => {
                if a == b {
                    return true;
                }
                match (a.as_f64(), b.as_f64()) {
                    (Some(x), Some(y)) => x == y,
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(s) => write!(f, "\"{}\"", s),
            RecordId::Number(n) => write!(f, "{}", n),
        }
    }
}

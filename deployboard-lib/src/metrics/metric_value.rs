use compact_str::{CompactString, ToCompactString};
use rusqlite::types::ValueRef;
use serde_json::Value;

/// The value of a single metric, typed at the point where it is loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    /// Wide enough for every integer a JSON number or `SQLite` column can hold.
    Integer(i128),
    Float(f64),
    Text(CompactString),
    Missing,
}

impl MetricValue {
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Type a JSON value.
    ///
    /// Integers keep every digit, unsigned ones above `i64::MAX` included. Booleans, arrays,
    /// and objects are not metrics in their own right, so they are carried as their compact
    /// JSON text.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from))
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Missing),
            Value::String(s) => Self::Text(s.as_str().into()),
            // Booleans stay `true`/`false` rather than turning into 1/0
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => Self::Text(value.to_compact_string()),
        }
    }

    /// Type a `SQLite` column value.
    #[must_use]
    pub fn from_sql(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Self::Missing,
            ValueRef::Integer(i) => Self::Integer(i.into()),
            ValueRef::Real(f) => Self::Float(f),
            ValueRef::Text(bytes) => Self::Text(CompactString::from_utf8_lossy(bytes)),
            ValueRef::Blob(bytes) => Self::Text(compact_str::format_compact!("<{} bytes>", bytes.len())),
        }
    }
}

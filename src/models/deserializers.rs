use chrono::{DateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn timestamp_from_value<E: Error>(value: Value) -> Result<DateTime<Utc>, E> {
    match value {
        Value::Number(n) => {
            // Unix timestamp in milliseconds
            let ms = n.as_i64().ok_or_else(|| E::custom("invalid timestamp"))?;
            DateTime::from_timestamp_millis(ms).ok_or_else(|| E::custom("timestamp out of range"))
        }
        Value::String(s) => s
            .parse::<DateTime<Utc>>()
            .map_err(|e| E::custom(format!("invalid RFC3339 timestamp: {}", e))),
        _ => Err(E::custom("timestamp must be a number or string")),
    }
}

/// Custom deserializer for timestamps that accepts both integers (ms) and RFC3339 strings
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    timestamp_from_value(Value::deserialize(deserializer)?)
}

/// Same as [`deserialize_timestamp`], but `null` maps to `None`
pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => timestamp_from_value(value).map(Some),
    }
}

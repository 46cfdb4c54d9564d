//! Request-body normalisation shared by the form-style endpoints.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Drops top-level keys whose value is `null` or a string that is empty
/// after trimming. Everything else (including `false`, `0` and arrays) is
/// kept untouched. Non-object payloads pass through unchanged.
pub fn strip_blank_fields(payload: Value) -> Value {
    match payload {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, value)| !is_blank(value))
                .collect(),
        ),
        other => other,
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// A list that clients may send either as a JSON array or as a string
/// holding a JSON-encoded array (multipart-era clients do the latter).
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedList<T>(pub Vec<T>);

impl<T> EmbeddedList<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<'de, T> Deserialize<'de> for EmbeddedList<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;

        let items = match raw {
            Value::Array(_) => serde_json::from_value::<Vec<T>>(raw).map_err(D::Error::custom)?,
            Value::String(encoded) => serde_json::from_str::<Vec<T>>(&encoded)
                .map_err(|e| D::Error::custom(format!("invalid encoded list: {e}")))?,
            _ => {
                return Err(D::Error::custom(
                    "expected a list or a JSON-encoded list",
                ))
            }
        };

        Ok(EmbeddedList(items))
    }
}

//! Conversion between `serde_json::Value` and [`Value`].
//!
//! This is the bridge for callers that build value trees from external
//! records. JSON objects become maps with text keys in their original order.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::{CborError, Integer, Value};

/// Convert `serde_json::Value` to [`Value`].
///
/// Integral numbers become `Integer`, every other number becomes `Float`.
pub fn json_to_value(v: &JsonValue) -> Value {
    match v {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => number_to_value(n),
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(items) => Value::Array(items.iter().map(json_to_value).collect()),
        JsonValue::Object(obj) => Value::Map(
            obj.iter()
                .map(|(k, v)| (Value::Text(k.clone()), json_to_value(v)))
                .collect(),
        ),
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(u) = n.as_u64() {
        Value::Integer(Integer::from(u))
    } else if let Some(i) = n.as_i64() {
        Value::Integer(Integer::from(i))
    } else {
        // serde_json numbers are always one of u64/i64/f64.
        Value::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Convert a [`Value`] to `serde_json::Value`.
///
/// Byte strings, non-text or repeated map keys, non-finite floats and
/// integers outside `i64::MIN..=u64::MAX` have no JSON form and are rejected.
pub fn value_to_json(v: &Value) -> Result<JsonValue, CborError> {
    let json = match v {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Integer(i) => {
            if let Ok(u) = u64::try_from(*i) {
                JsonValue::from(u)
            } else if let Ok(n) = i64::try_from(*i) {
                JsonValue::from(n)
            } else {
                return Err(CborError::NotJsonCompatible("integer below i64::MIN"));
            }
        }
        Value::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .ok_or(CborError::NotJsonCompatible("non-finite float"))?,
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::Bytes(_) => return Err(CborError::NotJsonCompatible("byte string")),
        Value::Array(items) => JsonValue::Array(
            items
                .iter()
                .map(value_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Map(pairs) => {
            let mut obj = JsonMap::with_capacity(pairs.len());
            for (k, v) in pairs {
                let key = k
                    .as_str()
                    .ok_or(CborError::NotJsonCompatible("non-text map key"))?;
                if obj.insert(key.to_owned(), value_to_json(v)?).is_some() {
                    return Err(CborError::NotJsonCompatible("duplicate map key"));
                }
            }
            JsonValue::Object(obj)
        }
    };
    Ok(json)
}

impl From<&JsonValue> for Value {
    fn from(v: &JsonValue) -> Self {
        json_to_value(v)
    }
}

impl TryFrom<&Value> for JsonValue {
    type Error = CborError;

    fn try_from(v: &Value) -> Result<Self, Self::Error> {
        value_to_json(v)
    }
}

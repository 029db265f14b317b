//! Request body fields as the client sent them.
//!
//! A field is *absent* when the key is missing and *present* otherwise, even
//! when its value is `null` or an empty string. Present values are handed to
//! the store with the same coercions Postgres applies to text parameters.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::ServiceError;

/// `deserialize_with` target keeping `null` apart from a missing key.
/// Pair with `#[serde(default)]` so a missing key reads as `None`.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Value for a text column. `null` becomes SQL NULL; numbers and booleans
/// keep their JSON spelling.
pub fn text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Value for a double precision column. Numeric strings are accepted; any
/// other non-null value fails like the store's input parser does.
pub fn amount(value: Value) -> Result<Option<f64>, ServiceError> {
    let parsed = match &value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(amt) => Ok(Some(amt)),
        None => {
            let raw = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            Err(ServiceError::Store(format!("invalid input syntax for type double precision: \"{raw}\"")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "present")]
        name: Option<Value>,
    }

    #[test]
    fn null_is_present_and_missing_is_absent() {
        let body: Body = serde_json::from_value(json!({"name": null})).expect("body");
        assert_eq!(body.name, Some(Value::Null));
        let body: Body = serde_json::from_value(json!({})).expect("body");
        assert_eq!(body.name, None);
    }

    #[test]
    fn text_coerces_scalars() {
        assert_eq!(text(json!("Apple")), Some("Apple".into()));
        assert_eq!(text(json!(123)), Some("123".into()));
        assert_eq!(text(json!(true)), Some("true".into()));
        assert_eq!(text(Value::Null), None);
    }

    #[test]
    fn amount_accepts_numbers_and_numeric_strings() {
        assert_eq!(amount(json!(100)), Ok(Some(100.0)));
        assert_eq!(amount(json!("100")), Ok(Some(100.0)));
        assert_eq!(amount(json!(" 2.5 ")), Ok(Some(2.5)));
        assert_eq!(amount(Value::Null), Ok(None));
    }

    #[test]
    fn amount_rejects_other_values_as_store_failures() {
        assert_eq!(
            amount(json!("lots")),
            Err(ServiceError::Store("invalid input syntax for type double precision: \"lots\"".into()))
        );
        assert!(amount(json!([1])).is_err_and(|e| !e.is_classified()));
    }
}

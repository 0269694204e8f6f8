//! Loose JSON coercion rules used by model hydration.
//!
//! The Aisearch API is tolerant about scalar types: prices arrive as strings,
//! flags arrive as `0`/`1` or non-empty strings, and identifiers are sometimes
//! quoted. Rather than scattering ad-hoc casts through the hydration code,
//! every coercion lives here with its edge cases written down:
//!
//! - [`float`]: numbers pass through; strings are parsed, unparsable strings
//!   become `f64::NAN`; booleans become `0.0`/`1.0`; anything else is `NAN`.
//! - [`int`] / [`uint`]: numbers are truncated; strings are parsed, unparsable
//!   strings become `0`; booleans become `0`/`1`; anything else is `0`.
//!   [`uint`] additionally clamps negatives to `0`.
//! - [`boolean`]: JSON truthiness — `false`, `0`, `""`, and `null` are
//!   `false`, everything else is `true`.
//! - [`string`]: strings are cloned; numbers and booleans are rendered;
//!   `null` becomes the empty string.
//!
//! Missing *required* fields are a different matter: hydration is fail-fast,
//! so [`require`] reports the first absent or `null` field as a
//! [`HydrationError`] instead of coercing it.

use serde_json::Value;
use thiserror::Error;

/// Error raised when a response payload is missing or mistypes a field the
/// models require.
///
/// Hydration is fail-fast: the first offending field aborts the whole
/// conversion, and no partially-hydrated model is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HydrationError {
    /// A required field was absent or `null`.
    #[error("response is missing required field '{field}'")]
    MissingField {
        /// The JSON field name that was expected.
        field: &'static str,
    },

    /// A field was present but had an unusable shape (e.g. a scalar where an
    /// array was expected).
    #[error("response field '{field}' is not {expected}")]
    InvalidField {
        /// The JSON field name that was malformed.
        field: &'static str,
        /// What the field was expected to be, e.g. "an array".
        expected: &'static str,
    },
}

/// Coerces a JSON value to `f64` with `parseFloat`-like tolerance.
pub(crate) fn float(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => f64::NAN,
    }
}

/// Coerces a JSON value to `i64`; unparsable input becomes `0`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// Coerces a JSON value to `u64`; unparsable or negative input becomes `0`.
#[allow(clippy::cast_sign_loss)]
pub(crate) fn uint(value: &Value) -> u64 {
    let n = int(value);
    if n < 0 {
        0
    } else {
        n as u64
    }
}

/// Coerces a JSON value to `bool` using JSON truthiness.
pub(crate) fn boolean(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerces a JSON value to an owned `String`; `null` becomes `""`.
pub(crate) fn string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Looks up a required field, treating absence and `null` identically.
pub(crate) fn require<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a Value, HydrationError> {
    match value.get(field) {
        Some(v) if !v.is_null() => Ok(v),
        _ => Err(HydrationError::MissingField { field }),
    }
}

/// Looks up an optional field; absent and `null` both yield `None`.
pub(crate) fn optional<'a>(value: &'a Value, field: &str) -> Option<&'a Value> {
    value.get(field).filter(|v| !v.is_null())
}

/// Looks up a required array field and returns its elements.
pub(crate) fn require_array<'a>(
    value: &'a Value,
    field: &'static str,
) -> Result<&'a [Value], HydrationError> {
    require(value, field)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or(HydrationError::InvalidField {
            field,
            expected: "an array",
        })
}

/// Looks up an optional array field; absent, `null`, or non-array input
/// yields an empty slice.
pub(crate) fn optional_array<'a>(value: &'a Value, field: &str) -> &'a [Value] {
    optional(value, field)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Clones an opaque payload field (`custom` blobs and raw attribute lists
/// are passed through untyped).
pub(crate) fn opaque(value: &Value, field: &str) -> Value {
    optional(value, field).cloned().unwrap_or(Value::Null)
}

/// Collects an optional array field into strings.
pub(crate) fn string_list(value: &Value, field: &str) -> Vec<String> {
    optional_array(value, field).iter().map(string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_float_parses_numbers_and_numeric_strings() {
        assert!((float(&json!(19.99)) - 19.99).abs() < f64::EPSILON);
        assert!((float(&json!("19.99")) - 19.99).abs() < f64::EPSILON);
        assert!((float(&json!(" 5 ")) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_float_unparsable_string_is_nan() {
        assert!(float(&json!("not a price")).is_nan());
        assert!(float(&json!({})).is_nan());
        assert!(float(&Value::Null).is_nan());
    }

    #[test]
    fn test_int_tolerates_strings_and_floats() {
        assert_eq!(int(&json!(42)), 42);
        assert_eq!(int(&json!("42")), 42);
        assert_eq!(int(&json!("3.9")), 3);
        assert_eq!(int(&json!(3.9)), 3);
        assert_eq!(int(&json!("garbage")), 0);
    }

    #[test]
    fn test_uint_clamps_negative_input() {
        assert_eq!(uint(&json!(-5)), 0);
        assert_eq!(uint(&json!("17")), 17);
    }

    #[test]
    fn test_boolean_follows_json_truthiness() {
        assert!(!boolean(&Value::Null));
        assert!(!boolean(&json!(false)));
        assert!(!boolean(&json!(0)));
        assert!(!boolean(&json!("")));
        assert!(boolean(&json!(true)));
        assert!(boolean(&json!(1)));
        assert!(boolean(&json!("yes")));
        assert!(boolean(&json!([])));
    }

    #[test]
    fn test_string_renders_scalars() {
        assert_eq!(string(&json!("abc")), "abc");
        assert_eq!(string(&json!(12)), "12");
        assert_eq!(string(&json!(true)), "true");
        assert_eq!(string(&Value::Null), "");
    }

    #[test]
    fn test_require_rejects_absent_and_null() {
        let value = json!({"present": 1, "nulled": null});
        assert!(require(&value, "present").is_ok());
        assert_eq!(
            require(&value, "nulled"),
            Err(HydrationError::MissingField { field: "nulled" })
        );
        assert_eq!(
            require(&value, "gone"),
            Err(HydrationError::MissingField { field: "gone" })
        );
    }

    #[test]
    fn test_require_array_rejects_scalars() {
        let value = json!({"list": [1, 2], "scalar": 3});
        assert_eq!(require_array(&value, "list").unwrap().len(), 2);
        assert_eq!(
            require_array(&value, "scalar"),
            Err(HydrationError::InvalidField {
                field: "scalar",
                expected: "an array"
            })
        );
    }

    #[test]
    fn test_optional_array_defaults_to_empty() {
        let value = json!({"bad": "nope"});
        assert!(optional_array(&value, "missing").is_empty());
        assert!(optional_array(&value, "bad").is_empty());
    }
}

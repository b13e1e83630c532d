//! Required-field presence checks
//!
//! A field is present when it is a string with at least one character.
//! Missing keys, `null` and `""` are absent. No format checks are made:
//! `"not-an-email"` is a present `email`.
//!
//! Request fields accept any JSON value through [`scalar`]: numbers and
//! `true` become their text, `false` and `0` are absent like `null`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A submission lacked one or more required fields
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("missing required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    /// Absent fields, in declaration order, using their JSON names
    pub missing: Vec<&'static str>,
}

/// Check that every named field is present and unwrap them
///
/// ```rust
/// use formrelay::forms::require;
///
/// let [name, email] = require([
///     ("name", Some("Ada".to_string())),
///     ("email", Some("ada@example.com".to_string())),
/// ])
/// .unwrap();
/// assert_eq!(name, "Ada");
///
/// let err = require([("name", Some(String::new())), ("email", None)]).unwrap_err();
/// assert_eq!(err.missing, vec!["name", "email"]);
/// ```
///
/// # Errors
///
/// Returns `ValidationError` listing every absent field
pub fn require<const N: usize>(
    fields: [(&'static str, Option<String>); N],
) -> Result<[String; N], ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| !is_present(value.as_deref()))
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError { missing });
    }

    Ok(fields.map(|(_, value)| value.unwrap_or_default()))
}

/// Keep an optional field only when it is present
#[must_use]
pub fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| is_present(Some(v)))
}

/// Deserialize a form field from any JSON value
///
/// For use with `#[serde(default, deserialize_with = "...")]`. Arrays and
/// objects are kept as their JSON text.
///
/// ```rust
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Body {
///     #[serde(default, deserialize_with = "formrelay::forms::scalar")]
///     phone: Option<String>,
/// }
///
/// let body: Body = serde_json::from_str(r#"{"phone": 5551234}"#).unwrap();
/// assert_eq!(body.phone.as_deref(), Some("5551234"));
///
/// let body: Body = serde_json::from_str(r#"{"phone": false}"#).unwrap();
/// assert_eq!(body.phone, None);
/// ```
///
/// # Errors
///
/// Returns the deserializer's error when the input is not valid JSON
pub fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null | Value::Bool(false)) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f.abs() < f64::MIN_POSITIVE) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        let [a, b] = require([("a", Some("1".to_string())), ("b", Some(" ".to_string()))]).unwrap();
        assert_eq!(a, "1");
        assert_eq!(b, " ");
    }

    #[test]
    fn test_reports_every_missing_field_in_order() {
        let err = require([
            ("name", None),
            ("email", Some("a@b.com".to_string())),
            ("message", Some(String::new())),
            ("inquiryType", None),
        ])
        .unwrap_err();

        assert_eq!(err.missing, vec!["name", "message", "inquiryType"]);
        assert_eq!(
            err.to_string(),
            "missing required fields: name, message, inquiryType"
        );
    }

    #[derive(Debug, Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "scalar")]
        value: Option<String>,
    }

    fn field(json: &str) -> Option<String> {
        serde_json::from_str::<Field>(json).unwrap().value
    }

    #[test]
    fn test_scalar_accepts_any_json_value() {
        assert_eq!(field(r#"{"value":"Ada"}"#).as_deref(), Some("Ada"));
        assert_eq!(field(r#"{"value":5551234}"#).as_deref(), Some("5551234"));
        assert_eq!(field(r#"{"value":2.5}"#).as_deref(), Some("2.5"));
        assert_eq!(field(r#"{"value":true}"#).as_deref(), Some("true"));
        assert_eq!(field(r#"{"value":["a","b"]}"#).as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn test_scalar_falsy_values_are_absent() {
        assert_eq!(field("{}"), None);
        assert_eq!(field(r#"{"value":null}"#), None);
        assert_eq!(field(r#"{"value":false}"#), None);
        assert_eq!(field(r#"{"value":0}"#), None);
        assert_eq!(field(r#"{"value":""}"#).as_deref(), Some(""));
    }

    #[test]
    fn test_optional_drops_empty() {
        assert_eq!(optional(Some(String::new())), None);
        assert_eq!(optional(None), None);
        assert_eq!(optional(Some("Acme".to_string())), Some("Acme".to_string()));
    }
}

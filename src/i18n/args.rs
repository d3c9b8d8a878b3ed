//! Helpers for building Fluent arguments

use crate::core::{Error, Result};
use fluent_bundle::{FluentArgs, FluentValue};
use serde_json::Value;

/// A single placeholder value
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    /// Numbers also drive plural selection
    Number(f64),
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Number(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Number(value as f64)
    }
}

impl From<ArgValue> for FluentValue<'static> {
    fn from(value: ArgValue) -> Self {
        match value {
            ArgValue::Str(s) => FluentValue::from(s),
            ArgValue::Number(n) => FluentValue::from(n),
        }
    }
}

/// Build arguments from name/value pairs
pub fn from_pairs(pairs: &[(&str, ArgValue)]) -> FluentArgs<'static> {
    let mut args = FluentArgs::new();
    for (name, value) in pairs {
        args.set(name.to_string(), FluentValue::from(value.clone()));
    }
    args
}

/// Build arguments from a JSON object.
///
/// Strings and numbers map directly, booleans become strings and nulls are
/// skipped. Arrays and nested objects are rejected.
pub fn from_json(value: &Value) -> Result<FluentArgs<'static>> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::Translator("Arguments must be a JSON object".to_string()))?;

    let mut args = FluentArgs::new();
    for (name, value) in object {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => ArgValue::Str(s.clone()),
            Value::Bool(b) => ArgValue::Str(b.to_string()),
            Value::Number(n) => match n.as_f64() {
                Some(n) => ArgValue::Number(n),
                None => {
                    return Err(Error::Translator(format!("Argument {} is not a finite number", name)))
                }
            },
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::Translator(format!(
                    "Argument {} must be a string, number or boolean",
                    name
                )))
            }
        };
        args.set(name.clone(), FluentValue::from(value));
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_pairs() {
        let args = from_pairs(&[("name", "Ada".into()), ("count", 3i64.into())]);
        assert_eq!(args.get("name"), Some(&FluentValue::from("Ada")));
        assert_eq!(args.get("count"), Some(&FluentValue::from(3.0f64)));
        assert_eq!(args.get("missing"), None);
    }

    #[test]
    fn test_from_json() {
        let args = from_json(&json!({"name": "Ada", "count": 2, "admin": true, "skip": null})).unwrap();
        assert_eq!(args.get("name"), Some(&FluentValue::from("Ada")));
        assert_eq!(args.get("count"), Some(&FluentValue::from(2.0f64)));
        assert_eq!(args.get("admin"), Some(&FluentValue::from("true")));
        assert_eq!(args.get("skip"), None);
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert!(from_json(&json!(["Ada"])).is_err());
        assert!(from_json(&json!({"nested": {"a": 1}})).is_err());
    }
}

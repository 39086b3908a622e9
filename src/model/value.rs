use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal markup carried by the `dangerouslySetInnerHTML` attribute.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawHtml {
  #[serde(rename = "__html")]
  pub html: String,
}

impl RawHtml {
  pub fn new(html: impl Into<String>) -> Self {
    RawHtml { html: html.into() }
  }
}

/// An attribute value or the payload of a text leaf.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
  Html(RawHtml),
  String(String),
  Number(f64),
  Boolean(bool),
  Null,
  #[serde(skip_deserializing)]
  Undefined,
}

impl Value {
  /// Booleans, `null` and `undefined` never produce text when they appear as children.
  pub fn is_blank(&self) -> bool {
    matches!(self, Value::Boolean(_) | Value::Null | Value::Undefined)
  }

  pub fn is_nullish(&self) -> bool {
    matches!(self, Value::Null | Value::Undefined)
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Value {
    Value::String(value.into())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Value {
    Value::String(value)
  }
}

impl From<&String> for Value {
  fn from(value: &String) -> Value {
    Value::String(value.clone())
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Value {
    Value::Boolean(value)
  }
}

impl From<i32> for Value {
  fn from(value: i32) -> Value {
    Value::Number(value.into())
  }
}

impl From<u32> for Value {
  fn from(value: u32) -> Value {
    Value::Number(value.into())
  }
}

impl From<i64> for Value {
  fn from(value: i64) -> Value {
    Value::Number(value as f64)
  }
}

impl From<u64> for Value {
  fn from(value: u64) -> Value {
    Value::Number(value as f64)
  }
}

impl From<usize> for Value {
  fn from(value: usize) -> Value {
    Value::Number(value as f64)
  }
}

impl From<f32> for Value {
  fn from(value: f32) -> Value {
    Value::Number(value.into())
  }
}

impl From<f64> for Value {
  fn from(value: f64) -> Value {
    Value::Number(value)
  }
}

impl From<RawHtml> for Value {
  fn from(value: RawHtml) -> Value {
    Value::Html(value)
  }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Value::String(value) => f.write_str(value),
      Value::Number(value) => f.write_str(&format_number(*value)),
      Value::Boolean(value) => write!(f, "{}", value),
      Value::Null => f.write_str("null"),
      Value::Undefined => f.write_str("undefined"),
      Value::Html(_) => f.write_str("[object Object]"),
    }
  }
}

/// Formats a number the way script engines stringify them.
pub fn format_number(value: f64) -> String {
  if value.is_nan() {
    return "NaN".into();
  }

  if value.is_infinite() {
    return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
  }

  if value == 0.0 {
    return "0".into();
  }

  let magnitude = value.abs();
  if magnitude >= 1e21 || magnitude < 1e-6 {
    let formatted = format!("{:e}", value);
    return match formatted.split_once('e') {
      Some((mantissa, exponent)) if !exponent.starts_with('-') => {
        format!("{}e+{}", mantissa, exponent)
      }
      _ => formatted,
    };
  }

  format!("{}", value)
}

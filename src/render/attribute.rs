use super::escape::escape_value;
use crate::config::EscapeMode;
use crate::model::Value;

/// Attribute whose value replaces an element's children with literal markup.
pub const RAW_HTML_ATTRIBUTE: &str = "dangerouslySetInnerHTML";

const ARIA_PREFIX: &str = "aria-";

// https://html.spec.whatwg.org/multipage/syntax.html#syntax-attributes
pub fn is_safe_attribute_name(name: &str) -> bool {
  !name
    .chars()
    .any(|ch| matches!(ch, ' ' | '"' | '\'' | '<' | '>' | '=' | '\u{0}'..='\u{1f}'))
}

pub fn can_render_attribute(name: &str, value: &Value) -> bool {
  match value {
    value if value.is_nullish() => false,
    Value::Boolean(false) if !name.starts_with(ARIA_PREFIX) => false,
    _ => is_safe_attribute_name(name),
  }
}

/// Serializes one attribute with its leading space.
pub fn render_attribute(name: &str, value: &Value, mode: EscapeMode) -> String {
  let collapsible = matches!(value, Value::Boolean(true))
    || matches!(value, Value::String(text) if text.is_empty());

  if collapsible && !name.starts_with(ARIA_PREFIX) {
    format!(" {}", name)
  } else {
    format!(" {}=\"{}\"", name, escape_value(value, mode))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  const MODE: EscapeMode = EscapeMode::FirstOccurrence;

  #[test]
  fn falsy_values_are_skipped() {
    assert!(!can_render_attribute("a", &Value::Null));
    assert!(!can_render_attribute("a", &Value::Undefined));
    assert!(!can_render_attribute("a", &Value::Boolean(false)));
    assert!(can_render_attribute("a", &Value::from(0)));
    assert!(can_render_attribute("a", &Value::from("")));
  }

  #[test]
  fn aria_false_is_kept_but_aria_null_is_not() {
    assert!(can_render_attribute("aria-checked", &Value::Boolean(false)));
    assert!(!can_render_attribute("aria-foo", &Value::Null));
    assert!(!can_render_attribute("aria-bar", &Value::Undefined));
  }

  #[test]
  fn unsafe_names_are_skipped() {
    for name in ["a b", "a\"", "'a", "<a", "a>", "a=b", "\u{0}", "a\u{1f}", "\tfoo"] {
      assert!(!can_render_attribute(name, &Value::from("1")), "{:?}", name);
    }
    assert!(can_render_attribute("a;b", &Value::from("1")));
    assert!(can_render_attribute("a\u{7f}", &Value::from("1")));
  }

  #[test]
  fn collapsible_values_render_bare() {
    assert_eq!(render_attribute("disabled", &Value::from(true), MODE), " disabled");
    assert_eq!(render_attribute("b", &Value::from(""), MODE), " b");
  }

  #[test]
  fn aria_always_has_a_value() {
    assert_eq!(render_attribute("aria-hidden", &Value::from(true), MODE), r#" aria-hidden="true""#);
    assert_eq!(render_attribute("aria-checked", &Value::from(false), MODE), r#" aria-checked="false""#);
    assert_eq!(render_attribute("aria-label", &Value::from(""), MODE), r#" aria-label="""#);
  }

  #[test]
  fn values_are_escaped() {
    assert_eq!(render_attribute("a", &Value::from(r#""<>&"#), MODE), r#" a="&quot;&lt;&gt;&amp;""#);
    assert_eq!(render_attribute("n", &Value::from(1.5), MODE), r#" n="1.5""#);
  }
}

use crate::config::EscapeMode;
use crate::model::Value;
use std::borrow::Cow;

static ENTITIES: &[(char, &str)] = &[('&', "&amp;"), ('<', "&lt;"), ('>', "&gt;"), ('"', "&quot;")];

pub fn escape(input: &str, mode: EscapeMode) -> Cow<'_, str> {
  if !input.contains(['&', '<', '>', '"']) {
    return Cow::Borrowed(input);
  }

  match mode {
    EscapeMode::FirstOccurrence => {
      let mut output = input.to_string();
      for (ch, entity) in ENTITIES {
        if let Some(pos) = output.find(*ch) {
          output.replace_range(pos..pos + ch.len_utf8(), entity);
        }
      }
      Cow::Owned(output)
    }

    EscapeMode::All => {
      let mut output = String::with_capacity(input.len() + 8);
      for ch in input.chars() {
        match ENTITIES.iter().find(|(special, _)| *special == ch) {
          Some((_, entity)) => output.push_str(entity),
          None => output.push(ch),
        }
      }
      Cow::Owned(output)
    }
  }
}

/// Coerces `value` to its string form, then escapes it.
pub fn escape_value(value: &Value, mode: EscapeMode) -> String {
  match value {
    Value::String(text) => escape(text, mode).into_owned(),
    other => escape(&other.to_string(), mode).into_owned(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn plain_text_is_borrowed() {
    assert!(matches!(escape("hello", EscapeMode::FirstOccurrence), Cow::Borrowed("hello")));
  }

  #[test]
  fn first_occurrence_of_each_character() {
    assert_eq!(escape(r#""<>&"#, EscapeMode::FirstOccurrence), "&quot;&lt;&gt;&amp;");
    assert_eq!(escape("a && b", EscapeMode::FirstOccurrence), "a &amp;& b");
    assert_eq!(escape("<<>>", EscapeMode::FirstOccurrence), "&lt;<&gt;>");
    assert_eq!(escape(r#"say "hi" "#, EscapeMode::FirstOccurrence), r#"say &quot;hi" "#);
  }

  #[test]
  fn entities_added_earlier_are_not_rescanned() {
    assert_eq!(escape("<&", EscapeMode::FirstOccurrence), "&lt;&amp;");
  }

  #[test]
  fn all_occurrences() {
    assert_eq!(escape("a && b < c", EscapeMode::All), "a &amp;&amp; b &lt; c");
    assert_eq!(escape(r#""<>&"<>&"#, EscapeMode::All), "&quot;&lt;&gt;&amp;&quot;&lt;&gt;&amp;");
  }

  #[test]
  fn non_strings_are_coerced_first() {
    assert_eq!(escape_value(&Value::from(0), EscapeMode::FirstOccurrence), "0");
    assert_eq!(escape_value(&Value::from(false), EscapeMode::All), "false");
  }
}

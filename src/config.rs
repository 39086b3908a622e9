use serde::{Deserialize, Serialize};

/// Nesting allowed by [`Config::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// How `&`, `<`, `>` and `"` are escaped in text and attribute values.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EscapeMode {
  /// Escape only the first occurrence of each character, checked in the
  /// order `&`, `<`, `>`, `"`. Later occurrences pass through unchanged.
  #[default]
  FirstOccurrence,
  /// Escape every occurrence.
  All,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
  pub escape: EscapeMode,
  /// Maximum element, fragment and component nesting. `None` disables the check.
  pub max_depth: Option<usize>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      escape: EscapeMode::default(),
      max_depth: Some(DEFAULT_MAX_DEPTH),
    }
  }
}

impl Config {
  pub fn with_escape(mut self, escape: EscapeMode) -> Self {
    self.escape = escape;
    self
  }

  pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
    self.max_depth = max_depth;
    self
  }

  pub fn render_to_string(&self, node: &crate::model::Node) -> crate::Result<String> {
    crate::render::render_to_string_with(node, self)
  }
}

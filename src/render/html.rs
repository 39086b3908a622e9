use super::attribute::{
  can_render_attribute, is_safe_attribute_name, render_attribute, RAW_HTML_ATTRIBUTE,
};
use super::escape::escape_value;
use crate::config::Config;
use crate::model::{flatten, Component, Element, Node, Props, Tag, Value};
use crate::{Error, Result};
use std::io::Write;
use tracing::{debug, trace, warn};

static VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
  "track", "wbr",
];

pub fn is_void_element(name: &str) -> bool {
  VOID_ELEMENTS.contains(&name)
}

/// Renders `node` with the default [`Config`] and writes the markup to `writer`.
pub fn render<W: Write>(node: &Node, writer: &mut W) -> Result<()> {
  render_with(node, &Config::default(), writer)
}

/// Renders `node` and writes the markup to `writer`.
///
/// The markup is assembled in memory first, so nothing is written when
/// rendering fails.
pub fn render_with<W: Write>(node: &Node, config: &Config, writer: &mut W) -> Result<()> {
  let output = render_to_string_with(node, config)?;
  writer.write_all(output.as_bytes())?;
  Ok(())
}

pub fn render_to_string(node: &Node) -> Result<String> {
  render_to_string_with(node, &Config::default())
}

pub fn render_to_string_with(node: &Node, config: &Config) -> Result<String> {
  let mut output = String::new();
  Renderer { config }.node(node, 0, &mut output)?;
  Ok(output)
}

struct Renderer<'a> {
  config: &'a Config,
}

impl<'a> Renderer<'a> {
  fn node(&self, node: &Node, depth: usize, output: &mut String) -> Result<()> {
    match node {
      Node::Text(value) => self.text(value, output),
      Node::List(children) => self.children(children, depth, output)?,
      Node::Element(element) => {
        self.enter(depth)?;
        match &element.tag {
          Tag::Fragment => self.children(&element.children, depth + 1, output)?,
          Tag::Component(component) => self.component(component, element, depth + 1, output)?,
          Tag::Name(name) => self.element(name, element, depth + 1, output)?,
        }
      }
    }

    Ok(())
  }

  fn enter(&self, depth: usize) -> Result<()> {
    match self.config.max_depth {
      Some(limit) if depth >= limit => {
        warn!(limit, "render depth limit exceeded");
        Err(Error::DepthExceeded { limit })
      }
      _ => Ok(()),
    }
  }

  fn text(&self, value: &Value, output: &mut String) {
    if !value.is_blank() {
      output.push_str(&escape_value(value, self.config.escape));
    }
  }

  fn children(&self, children: &[Node], depth: usize, output: &mut String) -> Result<()> {
    for child in flatten(children) {
      self.node(child, depth, output)?;
    }

    Ok(())
  }

  fn component(
    &self,
    component: &Component,
    element: &Element,
    depth: usize,
    output: &mut String,
  ) -> Result<()> {
    trace!(component = component.name(), depth, "invoking component");

    let props = Props::new(&element.attributes, &element.children);
    let rendered = component.call(props).map_err(|source| Error::Component {
      name: component.name().to_string(),
      source,
    })?;

    self.node(&rendered, depth, output)
  }

  fn element(&self, name: &str, element: &Element, depth: usize, output: &mut String) -> Result<()> {
    output.push('<');
    output.push_str(name);

    for (key, value) in &element.attributes {
      if key == RAW_HTML_ATTRIBUTE {
        continue;
      }

      if !can_render_attribute(key, value) {
        if !is_safe_attribute_name(key) {
          debug!(attribute = %key.escape_debug(), element = name, "dropping attribute with unsafe name");
        }
        continue;
      }

      output.push_str(&render_attribute(key, value, self.config.escape));
    }

    output.push('>');
    let inner_start = output.len();

    match element.attribute(RAW_HTML_ATTRIBUTE) {
      Some(Value::Html(raw)) if !raw.html.is_empty() => output.push_str(&raw.html),
      _ => self.children(&element.children, depth, output)?,
    }

    if is_void_element(name) && output.len() == inner_start {
      return Ok(());
    }

    output.push_str("</");
    output.push_str(name);
    output.push('>');

    Ok(())
  }
}

//! Builds node trees from JSON.
//!
//! An element is `{"tag": "div", "attributes": {...}, "children": [...]}`;
//! a missing or `null` tag is a fragment. Arrays are nested child lists and
//! scalars are text leaves.

use crate::model::{Attributes, Component, Element, Node, Tag, Value};
use crate::Result;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNode {
  // Before `Element`: structs also accept sequences.
  List(Vec<RawNode>),
  Element(RawElement),
  Text(Value),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawElement {
  #[serde(default)]
  tag: Option<String>,
  #[serde(default)]
  attributes: Option<Attributes>,
  #[serde(default)]
  children: Vec<RawNode>,
}

/// Components that element tags may refer to by name.
#[derive(Clone, Debug, Default)]
pub struct Registry {
  components: HashMap<String, Component>,
}

impl Registry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `component` under its name, returning any component it replaces.
  pub fn register(&mut self, component: Component) -> Option<Component> {
    self.components.insert(component.name().to_string(), component)
  }

  pub fn get(&self, name: &str) -> Option<&Component> {
    self.components.get(name)
  }

  pub fn decode(&self, input: &str) -> Result<Node> {
    let raw: RawNode = serde_json::from_str(input)?;
    Ok(self.convert(raw))
  }

  pub fn decode_value(&self, input: serde_json::Value) -> Result<Node> {
    let raw = RawNode::deserialize(input)?;
    Ok(self.convert(raw))
  }

  fn convert(&self, raw: RawNode) -> Node {
    match raw {
      RawNode::Text(value) => Node::Text(value),
      RawNode::List(items) => Node::List(items.into_iter().map(|item| self.convert(item)).collect()),
      RawNode::Element(element) => Node::Element(Element {
        tag: self.resolve_tag(element.tag),
        attributes: element.attributes.unwrap_or_default(),
        children: element.children.into_iter().map(|child| self.convert(child)).collect(),
      }),
    }
  }

  fn resolve_tag(&self, tag: Option<String>) -> Tag {
    match tag {
      None => Tag::Fragment,
      Some(name) => match self.components.get(&name) {
        Some(component) => {
          debug!(component = name.as_str(), "resolved registered component");
          Tag::Component(component.clone())
        }
        None => Tag::Name(name),
      },
    }
  }
}

/// Decodes a JSON node tree in which every tag is a literal element name.
pub fn from_json(input: &str) -> Result<Node> {
  Registry::default().decode(input)
}

use super::component::Component;
use super::value::{RawHtml, Value};
use super::Attributes;

/// Marker tag: render the children in place, with no wrapping element.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Fragment;

#[derive(Clone, PartialEq, Debug)]
pub enum Tag {
  Name(String),
  Fragment,
  Component(Component),
}

impl From<&str> for Tag {
  fn from(value: &str) -> Tag {
    Tag::Name(value.into())
  }
}

impl From<String> for Tag {
  fn from(value: String) -> Tag {
    Tag::Name(value)
  }
}

impl From<Fragment> for Tag {
  fn from(_: Fragment) -> Tag {
    Tag::Fragment
  }
}

impl From<Component> for Tag {
  fn from(value: Component) -> Tag {
    Tag::Component(value)
  }
}

impl From<&Component> for Tag {
  fn from(value: &Component) -> Tag {
    Tag::Component(value.clone())
  }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Element {
  pub tag: Tag,
  pub attributes: Attributes,
  pub children: Vec<Node>,
}

impl Element {
  pub fn attribute(&self, key: &str) -> Option<&Value> {
    self.attributes.get(key)
  }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Node {
  Text(Value),
  Element(Element),
  /// A nested child sequence, spliced into its parent by [`flatten`].
  List(Vec<Node>),
}

/// Builds an element node. `None` attributes become an empty map.
pub fn h(tag: impl Into<Tag>, attributes: impl Into<Option<Attributes>>, children: Vec<Node>) -> Node {
  Node::Element(Element {
    tag: tag.into(),
    attributes: attributes.into().unwrap_or_default(),
    children,
  })
}

pub fn fragment(children: Vec<Node>) -> Node {
  h(Fragment, None, children)
}

pub fn text(value: impl Into<Value>) -> Node {
  Node::Text(value.into())
}

/// The value for a `dangerouslySetInnerHTML` attribute.
pub fn inner_html(html: impl Into<String>) -> Value {
  Value::Html(RawHtml::new(html))
}

/// Splices nested [`Node::List`]s into one ordered sequence.
pub fn flatten(children: &[Node]) -> Vec<&Node> {
  let mut output = Vec::with_capacity(children.len());
  let mut stack = vec![children.iter()];

  while let Some(iter) = stack.last_mut() {
    match iter.next() {
      Some(Node::List(nested)) => stack.push(nested.iter()),
      Some(node) => output.push(node),
      None => {
        stack.pop();
      }
    }
  }

  output
}

impl From<Element> for Node {
  fn from(value: Element) -> Node {
    Node::Element(value)
  }
}

impl From<Value> for Node {
  fn from(value: Value) -> Node {
    Node::Text(value)
  }
}

impl From<Vec<Node>> for Node {
  fn from(value: Vec<Node>) -> Node {
    Node::List(value)
  }
}

impl<T: Into<Node>> From<Option<T>> for Node {
  fn from(value: Option<T>) -> Node {
    value.map_or(Node::Text(Value::Null), Into::into)
  }
}

macro_rules! text_node_from {
  ($($ty:ty),+) => {
    $(impl From<$ty> for Node {
      fn from(value: $ty) -> Node {
        Node::Text(value.into())
      }
    })+
  };
}

text_node_from!(&str, String, &String, bool, i32, u32, i64, u64, usize, f32, f64);

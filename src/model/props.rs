use super::node::Node;
use super::value::Value;
use super::Attributes;

/// The argument a component is invoked with: the element's attributes with
/// `children` set to the element's declared children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
  attributes: Attributes,
  children: Vec<Node>,
}

impl Props {
  /// Copies `attributes`, then sets `children`. A `children` attribute is
  /// overwritten by the declared children.
  pub fn new(attributes: &Attributes, children: &[Node]) -> Self {
    let mut attributes = attributes.clone();
    attributes.shift_remove("children");

    Props {
      attributes,
      children: children.to_vec(),
    }
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.attributes.get(key)
  }

  pub fn attributes(&self) -> &Attributes {
    &self.attributes
  }

  pub fn children(&self) -> &[Node] {
    &self.children
  }

  pub fn into_parts(self) -> (Attributes, Vec<Node>) {
    (self.attributes, self.children)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn children_key_is_overwritten() {
    let attributes = attrs! { "foo" => "test", "children" => "shadowed" };
    let props = Props::new(&attributes, &["content".into()]);

    assert_eq!(props.attributes(), &attrs! { "foo" => "test" });
    assert_eq!(props.children(), &[Node::from("content")]);
  }

  #[test]
  fn source_attributes_are_untouched() {
    let attributes = attrs! { "children" => 1, "a" => "b" };
    let _props = Props::new(&attributes, &[]);

    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes.get_index(0).map(|(k, _)| k.as_str()), Some("children"));
  }
}

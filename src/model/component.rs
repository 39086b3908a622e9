use super::node::Node;
use super::props::Props;
use std::fmt;
use std::sync::Arc;

/// Error raised by a fallible component. It reaches the caller untouched as the
/// source of [`crate::Error::Component`].
pub type ComponentError = Box<dyn std::error::Error + Send + Sync>;

pub type ComponentFn = dyn Fn(Props) -> Result<Node, ComponentError> + Send + Sync;

/// A stateless function from props to a single node.
///
/// Cloning is cheap and keeps identity: two clones compare equal, two
/// components built from identical closures do not.
#[derive(Clone)]
pub struct Component {
  name: Arc<str>,
  func: Arc<ComponentFn>,
}

impl Component {
  pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
  where
    F: Fn(Props) -> Node + Send + Sync + 'static,
  {
    Self::try_new(name, move |props| Ok(func(props)))
  }

  pub fn try_new<F>(name: impl Into<Arc<str>>, func: F) -> Self
  where
    F: Fn(Props) -> Result<Node, ComponentError> + Send + Sync + 'static,
  {
    Component {
      name: name.into(),
      func: Arc::new(func),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn call(&self, props: Props) -> Result<Node, ComponentError> {
    (self.func)(props)
  }
}

impl PartialEq for Component {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.func, &other.func)
  }
}

impl fmt::Debug for Component {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_tuple("Component").field(&self.name).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identity_equality() {
    let a = Component::new("A", |_| Node::from("a"));
    let b = Component::new("A", |_| Node::from("a"));

    assert_eq!(a, a.clone());
    assert_ne!(a, b);
  }

  #[test]
  fn debug_shows_name() {
    let card = Component::new("Card", |_| Node::from(""));
    assert_eq!(format!("{:?}", card), r#"Component("Card")"#);
  }
}

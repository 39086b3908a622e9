use indexmap::IndexMap;

pub mod component;
pub mod node;
pub mod props;
pub mod value;

pub use component::{Component, ComponentError};
pub use node::{flatten, fragment, h, inner_html, text, Element, Fragment, Node, Tag};
pub use props::Props;
pub use value::{RawHtml, Value};

/// Attribute map; iteration follows insertion order.
pub type Attributes = IndexMap<String, Value>;

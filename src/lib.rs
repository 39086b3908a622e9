//! Renders trees of virtual nodes to HTML strings without a DOM.
//!
//! ```
//! use vnode_html::{attrs, h, nodes, render_to_string};
//!
//! let node = h("div", attrs! { "class" => "foo" }, nodes!["bar"]);
//! assert_eq!(render_to_string(&node).unwrap(), r#"<div class="foo">bar</div>"#);
//! ```

#[macro_use]
pub mod macros;
pub mod config;
pub mod decode;
pub mod error;
pub mod model;
pub mod render;

pub use config::{Config, EscapeMode};
pub use decode::{from_json, Registry};
pub use error::{Error, Result};
pub use model::{
  flatten, fragment, h, inner_html, text, Attributes, Component, ComponentError, Element, Fragment,
  Node, Props, RawHtml, Tag, Value,
};
pub use render::{render, render_to_string, render_to_string_with, render_with};

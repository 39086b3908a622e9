pub mod attribute;
pub mod escape;
pub mod html;

pub use html::{render, render_to_string, render_to_string_with, render_with};

use vnode_html::{from_json, render_to_string_with, Config};
use wasm_bindgen::prelude::*;

fn to_js_error(err: vnode_html::Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen]
pub fn render(input: &str) -> Result<String, JsValue> {
    render_with_config(input, &Config::default())
}

#[wasm_bindgen(js_name = renderWithOptions)]
pub fn render_with_options(input: &str, options: JsValue) -> Result<String, JsValue> {
    let config: Config = if options.is_undefined() || options.is_null() {
        Config::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };

    render_with_config(input, &config)
}

fn render_with_config(input: &str, config: &Config) -> Result<String, JsValue> {
    let node = from_json(input).map_err(to_js_error)?;
    render_to_string_with(&node, config).map_err(to_js_error)
}

//! WebAssembly bindings
//!
//! Browser-friendly wrappers around the generators, so an editor front end
//! can feed a project JSON across the boundary and read back the derived
//! texts.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::Project;
#[cfg(target_arch = "wasm32")]
use crate::generators::{ascii_uml, c, java, mermaid};

/// Initialize WASM module
///
/// Sets up panic hooks and logging for better error messages in the browser.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

#[cfg(target_arch = "wasm32")]
fn parse_project(project_json: &str) -> Result<Project, JsValue> {
    serde_json::from_str(project_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid project JSON: {}", e)))
}

/// Generate Mermaid classDiagram markup from a project JSON
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn generate_mermaid(project_json: &str) -> Result<String, JsValue> {
    let project = parse_project(project_json)?;
    Ok(mermaid::generate(&project))
}

/// Generate the plain-text boxed diagram from a project JSON
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn generate_ascii_uml(project_json: &str) -> Result<String, JsValue> {
    let project = parse_project(project_json)?;
    Ok(ascii_uml::generate(&project))
}

/// Generate the Java skeleton text from a project JSON
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn generate_java(project_json: &str) -> Result<String, JsValue> {
    let project = parse_project(project_json)?;
    Ok(java::generate(&project))
}

/// Generate the C header text from a project JSON
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn generate_c_header(project_json: &str) -> Result<String, JsValue> {
    let project = parse_project(project_json)?;
    Ok(c::generate_header(&project))
}

/// Generate the C implementation text from a project JSON
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn generate_c_source(project_json: &str) -> Result<String, JsValue> {
    let project = parse_project(project_json)?;
    Ok(c::generate_source(&project, c::DEFAULT_HEADER_NAME))
}

/// A fresh anchor id for one external render invocation
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_anchor() -> String {
    mermaid::next_render_anchor()
}

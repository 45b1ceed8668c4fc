//! Browser bindings for the slider UI.
//!
//! The UI keeps its parameter state as JSON in the core's camelCase shape and
//! calls [`generate`] on every change; the returned markup is injected into
//! the preview as-is. Export wraps the same string in a Blob.

use anyhow::{Context, Result};
use ridgeline_core::{GeneratorParams, PARAM_RANGES, SVG_MEDIA_TYPE};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

// ── Plain-Rust implementations (natively testable) ───────────────────────────

fn parse(params_json: &str) -> Result<GeneratorParams> {
    GeneratorParams::from_json(params_json).context("invalid params")
}

fn generate_impl(params_json: &str) -> Result<String> {
    let params = parse(params_json)?;
    ridgeline_core::generate(&params).context("generation failed")
}

fn clamp_impl(params_json: &str) -> Result<String> {
    let clamped = parse(params_json)?.clamp_to_ranges();
    Ok(serde_json::to_string(&clamped)?)
}

fn default_params_impl() -> String {
    // Serializing a plain struct of numbers cannot fail.
    serde_json::to_string(&GeneratorParams::default()).unwrap_or_default()
}

fn to_js(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}

// ── Exports ───────────────────────────────────────────────────────────────────

/// Generate the SVG document for a params JSON string.
#[wasm_bindgen]
pub fn generate(params_json: &str) -> Result<String, JsValue> {
    generate_impl(params_json).map_err(to_js)
}

/// The UI's initial parameter state as JSON.
#[wasm_bindgen(js_name = defaultParams)]
pub fn default_params() -> String {
    default_params_impl()
}

/// Slider table: `[{ field, min, max, step }, ...]` in panel order.
#[wasm_bindgen(js_name = paramRanges)]
pub fn param_ranges() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PARAM_RANGES[..]).map_err(Into::into)
}

/// Pull a params JSON string into the slider ranges, linking the peak bounds.
#[wasm_bindgen(js_name = clampParams)]
pub fn clamp_params(params_json: &str) -> Result<String, JsValue> {
    clamp_impl(params_json).map_err(to_js)
}

/// Fresh seed for the "new seed" button, in `[0, 1_000_000)`.
#[wasm_bindgen(js_name = newSeed)]
pub fn new_seed() -> u32 {
    ridgeline_core::random_seed() as u32
}

/// Download name for a document generated from `seed`.
#[wasm_bindgen(js_name = exportFilename)]
pub fn export_filename(seed: u32) -> String {
    ridgeline_core::export_filename(seed as u64)
}

/// Wrap generated markup in a Blob tagged `image/svg+xml`, ready for an
/// object URL.
#[wasm_bindgen(js_name = exportBlob)]
pub fn export_blob(svg: &str) -> Result<web_sys::Blob, JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(svg));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(SVG_MEDIA_TYPE);
    web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
}

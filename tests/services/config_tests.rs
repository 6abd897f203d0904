//! Config Loading Tests
//!
//! `PickerConfig::load` against a `#file-picker-config` block in the page.

use file_picker_preview::config::{PickerConfig, ReadFailurePolicy, CONFIG_ELEMENT_ID};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlScriptElement;

fn remove_config_block() {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(existing) = document.get_element_by_id(CONFIG_ELEMENT_ID) {
        existing.remove();
    }
}

/// Replace any config block in the document with one holding `json`.
fn install_config_block(json: &str) {
    remove_config_block();
    let document = web_sys::window().unwrap().document().unwrap();
    let script = document
        .create_element("script")
        .unwrap()
        .dyn_into::<HtmlScriptElement>()
        .unwrap();
    script.set_type("application/json");
    script.set_id(CONFIG_ELEMENT_ID);
    script.set_text(json).unwrap();
    document.body().unwrap().append_child(&script).unwrap();
}

#[wasm_bindgen_test]
fn test_load_applies_overrides() {
    install_config_block(
        r#"{ "max_files": 3, "continue_enabled": false, "read_failure": "leave_blank" }"#,
    );

    let config = PickerConfig::load();
    remove_config_block();

    assert_eq!(config.max_files, 3);
    assert!(!config.continue_enabled);
    assert_eq!(config.read_failure, ReadFailurePolicy::LeaveBlank);
    assert_eq!(config.image_extensions, vec!["jpg", "png"]);
}

#[wasm_bindgen_test]
fn test_load_malformed_block_uses_defaults() {
    install_config_block("{ max_files: ");

    let config = PickerConfig::load();
    remove_config_block();

    assert_eq!(config, PickerConfig::default());
}

#[wasm_bindgen_test]
fn test_load_invalid_values_use_defaults() {
    install_config_block(r#"{ "max_files": 0 }"#);

    let config = PickerConfig::load();
    remove_config_block();

    assert_eq!(config, PickerConfig::default());
}

#[wasm_bindgen_test]
fn test_load_without_block_uses_defaults() {
    remove_config_block();

    assert_eq!(PickerConfig::load(), PickerConfig::default());
}

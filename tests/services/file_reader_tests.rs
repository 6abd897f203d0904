//! File Reader Tests
//!
//! Reading selected files into data URLs.

use file_picker_preview::bindings::{read_as_data_url, selected_files};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use crate::support::make_file;

#[wasm_bindgen_test]
async fn test_read_uses_reported_mime() {
    let file = make_file("diagram.png", &[1, 2, 3], "image/png");
    let url = read_as_data_url(&file, "png").await.unwrap();
    assert_eq!(url, "data:image/png;base64,AQID");
}

#[wasm_bindgen_test]
async fn test_read_derives_mime_from_extension() {
    let file = make_file("photo.jpg", &[1, 2, 3], "");
    let url = read_as_data_url(&file, "jpg").await.unwrap();
    assert_eq!(url, "data:image/jpeg;base64,AQID");
}

#[wasm_bindgen_test]
async fn test_read_empty_file() {
    let file = make_file("empty.png", &[], "image/png");
    let url = read_as_data_url(&file, "png").await.unwrap();
    assert_eq!(url, "data:image/png;base64,");
}

#[wasm_bindgen_test]
fn test_selected_files_empty_input() {
    let document = web_sys::window().unwrap().document().unwrap();
    let input = document
        .create_element("input")
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_type("file");

    assert!(selected_files(&input).is_empty());
}

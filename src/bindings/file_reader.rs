use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::data_url;
use crate::error::ReadError;

/// Files currently chosen in a file input, in selection order.
pub fn selected_files(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Read a file's content and encode it as a data URL.
///
/// `extension` picks the MIME type when the browser reports none.
pub async fn read_as_data_url(file: &File, extension: &str) -> Result<String, ReadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ReadError::from_js(&e))?;

    let buffer = buffer.dyn_into::<ArrayBuffer>().map_err(|_| ReadError::NotBinary)?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    let reported = file.type_();
    let mime = data_url::resolve_mime(&reported, extension);
    Ok(data_url::encode(mime, &bytes))
}

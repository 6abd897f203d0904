use thiserror::Error;
use wasm_bindgen::JsCast;

/// Rejection of a whole selection before any preview is created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Shown to the user verbatim, so the message stays bilingual.
    #[error("max files / макс. файлов {max}")]
    TooManyFiles { max: usize, selected: usize },
}

/// Failure while turning one selected file into a data URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("browser rejected the read: {0}")]
    Js(String),
    #[error("read result was not binary data")]
    NotBinary,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse picker config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid picker config: {0}")]
    Invalid(String),
}

impl ReadError {
    pub fn from_js(value: &wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        ReadError::Js(message)
    }
}

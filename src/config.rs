use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the optional `<script type="application/json">` block carrying overrides.
pub const CONFIG_ELEMENT_ID: &str = "file-picker-config";

pub const DEFAULT_MAX_FILES: usize = 10;

pub const DEFAULT_PLACEHOLDER_URL: &str =
    "https://74foto.ru/800/600/http/mpsatp.ru/wp-content/uploads/2021/01/Untitled-2-01-768x769.png";

/// What a preview shows when reading its file fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadFailurePolicy {
    /// Swap in the placeholder image.
    #[default]
    Placeholder,
    /// Keep the image source unset.
    LeaveBlank,
}

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Selections larger than this are rejected with an alert.
    pub max_files: usize,
    /// Extensions previewed from file content; everything else gets the placeholder.
    pub image_extensions: Vec<String>,
    /// `photo.JPG` only matches `jpg` when this is false.
    pub case_sensitive_extensions: bool,
    pub placeholder_url: String,
    /// Render the "continue" button that navigates back.
    pub continue_enabled: bool,
    pub read_failure: ReadFailurePolicy,
    /// Forwarded to the `accept` attribute of the file input.
    pub accept: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            image_extensions: vec!["jpg".to_string(), "png".to_string()],
            case_sensitive_extensions: true,
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
            continue_enabled: true,
            read_failure: ReadFailurePolicy::default(),
            accept: None,
        }
    }
}

impl PickerConfig {
    /// Parse and validate a JSON override block. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_files == 0 {
            return Err(ConfigError::Invalid("max_files must be at least 1".into()));
        }
        if self.placeholder_url.trim().is_empty() {
            return Err(ConfigError::Invalid("placeholder_url must not be empty".into()));
        }
        Ok(())
    }

    /// Load overrides from the host page.
    /// Returns `Default` if the block is missing or unusable.
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded picker config from #{CONFIG_ELEMENT_ID}");
                    config
                }
                Err(e) => {
                    log::warn!("{e}; using defaults");
                    Self::default()
                }
            },
            None => {
                log::debug!("No #{CONFIG_ELEMENT_ID} element, using defaults");
                Self::default()
            }
        }
    }

    /// Whether `extension` belongs to the recognized image set.
    pub fn is_image_extension(&self, extension: &str) -> bool {
        self.image_extensions.iter().any(|known| {
            if self.case_sensitive_extensions {
                known == extension
            } else {
                known.eq_ignore_ascii_case(extension)
            }
        })
    }
}

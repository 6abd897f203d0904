//! Data URL encoding for inline previews.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const FALLBACK_MIME: &str = "application/octet-stream";

/// MIME type for a file extension, if it names a common image format.
pub fn mime_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Pick the MIME type for a data URL. The browser-reported type wins when present.
pub fn resolve_mime<'a>(reported: &'a str, extension: &str) -> &'a str {
    if !reported.trim().is_empty() {
        reported
    } else {
        mime_for_extension(extension).unwrap_or(FALLBACK_MIME)
    }
}

/// `data:<mime>;base64,<payload>`
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

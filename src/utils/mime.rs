//! MIME types for the static files the server hands out.

use std::path::Path;

pub mod types {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const CSS: &str = "text/css; charset=utf-8";
    pub const JAVASCRIPT: &str = "text/javascript; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const SOURCE_MAP: &str = "application/json";

    pub const OCTET_STREAM: &str = "application/octet-stream";
    pub const WASM: &str = "application/wasm";

    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";

    pub const MP4: &str = "video/mp4";
    pub const WEBM: &str = "video/webm";

    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
    pub const TTF: &str = "font/ttf";
}

/// Guess the Content-Type from a file's extension.
pub fn from_path(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|e| e.to_str()))
}

pub fn from_extension(ext: Option<&str>) -> &'static str {
    let Some(ext) = ext else {
        return types::OCTET_STREAM;
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" | "htm" => types::HTML,
        "txt" => types::PLAIN,
        "css" => types::CSS,
        "js" | "mjs" => types::JAVASCRIPT,
        "json" => types::JSON,
        "map" => types::SOURCE_MAP,
        "wasm" => types::WASM,
        "png" => types::PNG,
        "jpg" | "jpeg" => types::JPEG,
        "gif" => types::GIF,
        "webp" => types::WEBP,
        "avif" => types::AVIF,
        "svg" => types::SVG,
        "ico" => types::ICO,
        "mp4" => types::MP4,
        "webm" => types::WEBM,
        "woff" => types::WOFF,
        "woff2" => types::WOFF2,
        "ttf" => types::TTF,
        _ => types::OCTET_STREAM,
    }
}

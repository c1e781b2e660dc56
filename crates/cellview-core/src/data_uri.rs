use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::RgbaImage;
use percent_encoding::percent_decode_str;

use crate::error::{CellviewError, Result};

/// A parsed `data:` URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUri {
    /// Media type, `text/plain;charset=US-ASCII` when omitted.
    pub mime: String,
    pub data: Vec<u8>,
}

impl DataUri {
    /// Parse `data:[<mediatype>][;base64],<data>`.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| CellviewError::InvalidDataUri("missing \"data:\" scheme".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| CellviewError::InvalidDataUri("missing ',' separator".into()))?;

        let (mime, is_base64) = match header.strip_suffix(";base64") {
            Some(mime) => (mime, true),
            None => (header, false),
        };
        let mime = if mime.is_empty() {
            "text/plain;charset=US-ASCII".to_string()
        } else {
            mime.to_string()
        };

        let data = if is_base64 {
            let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
            STANDARD.decode(cleaned)?
        } else {
            // Malformed escapes pass through as literal text.
            percent_decode_str(payload).collect()
        };

        Ok(Self { mime, data })
    }

    pub fn encode_base64(mime: &str, data: &[u8]) -> String {
        format!("data:{};base64,{}", mime, STANDARD.encode(data))
    }

    /// Decode the payload as an image.
    pub fn decode_image(&self) -> Result<RgbaImage> {
        let img = image::load_from_memory(&self.data)?;
        Ok(img.to_rgba8())
    }
}

/// Decode the image carried by a data URI.
pub fn decode_data_uri_image(uri: &str) -> Result<RgbaImage> {
    DataUri::parse(uri)?.decode_image()
}

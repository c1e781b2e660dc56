use thiserror::Error;

#[derive(Error, Debug)]
pub enum CellviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid TOML: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("Cannot serialize TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("No simulation options available")]
    MissingOptions,

    #[error("No image loaded")]
    NoImage,
}

pub type Result<T> = std::result::Result<T, CellviewError>;

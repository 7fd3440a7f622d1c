//! Error types for qrstamp operations

use thiserror::Error;

/// Result type alias using qrstamp's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrstamp operations
#[derive(Error, Debug)]
pub enum Error {
    /// The encoder rejected the payload (e.g. it exceeds QR capacity)
    #[error("Failed to encode QR code: {0}")]
    QrEncode(qrcode::types::QrError),

    /// QR code decoding failed
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR code found in image
    #[error("No QR code found in image")]
    NoQrCodeFound,

    /// Image rendering, encoding or saving failed.
    ///
    /// Filesystem errors raised while saving surface here as
    /// [`image::ImageError::IoError`].
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::QrEncode(e)
    }
}

impl Error {
    /// The underlying I/O error, whether raised directly or through `image`.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Error::Io(e) => Some(e),
            Error::Image(image::ImageError::IoError(e)) => Some(e),
            _ => None,
        }
    }
}

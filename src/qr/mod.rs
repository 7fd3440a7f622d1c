//! QR code encoding and decoding
//!
//! Encoding sits behind the [`Encode`] trait so the writer can be driven by
//! any backend. Decoding is used to verify that a written code reads back.

mod decoder;
mod encoder;

pub use decoder::QrDecoder;
pub use encoder::QrEncoder;

use crate::error::Result;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

/// Turns a payload into a rendered QR image
pub trait Encode {
    /// Encode `payload` into a QR matrix and rasterise it
    fn encode(&self, payload: &QrPayload) -> Result<DynamicImage>;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, payload: &QrPayload) -> Result<DynamicImage> {
        (**self).encode(payload)
    }
}

/// Data carried by a QR code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    /// The raw data
    pub data: Vec<u8>,
    /// String representation if valid UTF-8
    pub text: Option<String>,
}

impl QrPayload {
    /// Create a new QR payload from raw bytes
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let text = String::from_utf8(data.clone()).ok();
        Self { data, text }
    }

    /// Create a new QR payload from a string
    pub fn from_string(s: String) -> Self {
        Self {
            data: s.as_bytes().to_vec(),
            text: Some(s),
        }
    }

    /// Get the payload as a string, if valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of bytes carried
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload carries no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<&str> for QrPayload {
    fn from(s: &str) -> Self {
        Self::from_string(s.to_string())
    }
}

impl From<String> for QrPayload {
    fn from(s: String) -> Self {
        Self::from_string(s)
    }
}

impl From<Vec<u8>> for QrPayload {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

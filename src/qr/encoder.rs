//! QR code encoder backed by the `qrcode` crate

use crate::config::RenderOptions;
use crate::error::Result;
use crate::qr::{Encode, QrPayload};
use image::{DynamicImage, Luma};
use qrcode::QrCode;

/// QR code encoder
#[derive(Debug, Clone)]
pub struct QrEncoder {
    ecc_level: qrcode::EcLevel,
    min_dimension: u32,
    quiet_zone: bool,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC, 400px, quiet zone)
    pub fn new() -> Self {
        Self::from_options(&RenderOptions::default())
    }

    /// Create an encoder from rendering options
    pub fn from_options(options: &RenderOptions) -> Self {
        Self {
            ecc_level: options.ecc_level.into(),
            min_dimension: options.min_dimension,
            quiet_zone: options.quiet_zone,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ecc_level(mut self, ecc_level: qrcode::EcLevel) -> Self {
        self.ecc_level = ecc_level;
        self
    }

    /// Error correction level used for new codes
    pub fn ecc_level(&self) -> qrcode::EcLevel {
        self.ecc_level
    }

    /// Encode a string into a QR code image
    pub fn encode_string(&self, data: &str) -> Result<DynamicImage> {
        self.encode(&QrPayload::from(data))
    }

    /// Encode bytes into a QR code image
    pub fn encode_bytes(&self, data: &[u8]) -> Result<DynamicImage> {
        self.encode(&QrPayload::from_bytes(data.to_vec()))
    }
}

impl Encode for QrEncoder {
    fn encode(&self, payload: &QrPayload) -> Result<DynamicImage> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), self.ecc_level)?;

        tracing::debug!(
            version = ?code.version(),
            ecc_level = ?code.error_correction_level(),
            modules = code.width(),
            bytes = payload.len(),
            "Encoded QR matrix"
        );

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(self.quiet_zone)
            .min_dimensions(self.min_dimension, self.min_dimension)
            .build();

        Ok(DynamicImage::ImageLuma8(image))
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

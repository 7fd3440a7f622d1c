//! Encode a payload and save it as an image file

use crate::config::RenderOptions;
use crate::error::Result;
use crate::output::{FileSink, ImageSink};
use crate::qr::{Encode, QrEncoder, QrPayload};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Pairs an encoder with an image sink
#[derive(Debug, Clone)]
pub struct QrWriter<E = QrEncoder, S = FileSink> {
    encoder: E,
    sink: S,
}

impl QrWriter {
    /// Writer using the `qrcode` encoder and filesystem sink with default options
    pub fn new() -> Self {
        Self::with_parts(QrEncoder::new(), FileSink)
    }

    /// Writer using the `qrcode` encoder configured from `options`
    pub fn from_options(options: &RenderOptions) -> Self {
        Self::with_parts(QrEncoder::from_options(options), FileSink)
    }
}

impl Default for QrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Encode, S: ImageSink> QrWriter<E, S> {
    /// Build a writer from any encoder and sink
    pub fn with_parts(encoder: E, sink: S) -> Self {
        Self { encoder, sink }
    }

    /// Encode `payload` and write the image to `path`, overwriting any existing file.
    pub fn write(&self, payload: &QrPayload, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let image = self.encoder.encode(payload)?;
        self.sink.save(&image, path)?;

        info!(
            path = %path.display(),
            bytes = payload.len(),
            width = image.width(),
            "QR code written"
        );
        Ok(())
    }

    /// Like [`write`](Self::write), then print a confirmation line to `out`.
    ///
    /// Nothing is printed when writing fails.
    pub fn write_and_report<W: Write>(
        &self,
        payload: &QrPayload,
        path: impl AsRef<Path>,
        out: &mut W,
    ) -> Result<()> {
        let path = path.as_ref();
        self.write(payload, path)?;
        writeln!(out, "{}", confirmation_message(path))?;
        Ok(())
    }
}

/// Line printed after a code has been saved
pub fn confirmation_message(path: &Path) -> String {
    format!("QR Code saved as {}", path.display())
}

/// Encode `data` with default settings, save it to `path` and report on stdout.
pub fn generate_qr(data: &str, path: impl AsRef<Path>) -> Result<()> {
    QrWriter::new().write_and_report(&QrPayload::from(data), path, &mut io::stdout().lock())
}

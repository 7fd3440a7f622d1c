//! Destinations for rendered QR images

use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// Persists a rendered image to a path
pub trait ImageSink {
    /// Write `image` to `path`, replacing any existing file
    fn save(&self, image: &DynamicImage, path: &Path) -> Result<()>;
}

impl<T: ImageSink + ?Sized> ImageSink for &T {
    fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        (**self).save(image, path)
    }
}

/// Writes images to the filesystem, format chosen by the path extension
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl ImageSink for FileSink {
    fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        image.save(path)?;
        tracing::debug!(path = %path.display(), "Image written");
        Ok(())
    }
}

/// Encode an image as PNG in memory.
pub fn png_bytes(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Render an image as a `data:image/png;base64,...` URL for embedding in web pages.
pub fn data_url(image: &DynamicImage) -> Result<String> {
    let png = png_bytes(image)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

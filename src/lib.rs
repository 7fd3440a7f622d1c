//! qrstamp - encode a payload into a QR code image and write it to disk
//!
//! The encoder and the image sink are pluggable through the [`Encode`] and
//! [`ImageSink`] traits; [`generate_qr`] wires up the defaults.
//!
//! # Example
//!
//! ```no_run
//! fn main() -> qrstamp::Result<()> {
//!     qrstamp::generate_qr("event_id=E1234&attendee_id=A5678", "attendee_qr.png")?;
//!
//!     let decoded = qrstamp::QrDecoder::new().decode_file("attendee_qr.png")?;
//!     assert_eq!(decoded.as_str(), Some("event_id=E1234&attendee_id=A5678"));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod qr;
pub mod writer;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{EccLevel, LogRotation, LoggingOptions, QrstampConfig, RenderOptions};
pub use output::{FileSink, ImageSink, data_url, png_bytes};
pub use qr::{Encode, QrDecoder, QrEncoder, QrPayload};
pub use writer::{QrWriter, confirmation_message, generate_qr};

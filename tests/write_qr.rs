use std::fs;

use qrstamp::qr::QrEncoder;
use qrstamp::{EccLevel, Error, QrDecoder, QrPayload, QrWriter, RenderOptions};
use tempfile::tempdir;

const ATTENDEE_INFO: &str = "event_id=E1234&attendee_id=A5678";

#[test]
fn attendee_code_decodes_to_payload() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("attendee_qr.png");
    let mut out = Vec::new();

    QrWriter::new()
        .write_and_report(&QrPayload::from(ATTENDEE_INFO), &path, &mut out)
        .expect("write attendee code");

    let message = String::from_utf8(out).expect("utf8 message");
    assert!(
        message.contains(&path.display().to_string()),
        "message does not name the path: {message}"
    );

    let decoded = QrDecoder::new().decode_file(&path).expect("decode png");
    assert_eq!(decoded.as_str(), Some(ATTENDEE_INFO));
}

#[test]
fn written_file_is_non_empty_png() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("code.png");

    QrWriter::new()
        .write(&QrPayload::from("hello"), &path)
        .expect("write code");

    let bytes = fs::read(&path).expect("read back");
    assert!(!bytes.is_empty());
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn rewriting_same_path_overwrites() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("repeat.png");
    let writer = QrWriter::new();
    let payload = QrPayload::from(ATTENDEE_INFO);

    writer.write(&payload, &path).expect("first write");
    let first = fs::read(&path).expect("read first");
    writer.write(&payload, &path).expect("second write");
    let second = fs::read(&path).expect("read second");

    assert_eq!(first.len(), second.len(), "file grew, expected overwrite");
    let decoded = QrDecoder::new().decode_file(&path).expect("decode png");
    assert_eq!(decoded.as_str(), Some(ATTENDEE_INFO));
}

#[test]
fn replacing_payload_replaces_content() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("swap.png");
    let writer = QrWriter::new();

    writer
        .write(&QrPayload::from("first payload"), &path)
        .expect("first write");
    writer
        .write(&QrPayload::from("second payload"), &path)
        .expect("second write");

    let decoded = QrDecoder::new().decode_file(&path).expect("decode png");
    assert_eq!(decoded.as_str(), Some("second payload"));
}

#[test]
fn missing_directory_fails_without_file_or_message() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("no-such-dir").join("attendee_qr.png");
    let mut out = Vec::new();

    let err = QrWriter::new()
        .write_and_report(&QrPayload::from(ATTENDEE_INFO), &path, &mut out)
        .expect_err("missing directory must fail");

    assert!(err.io_error().is_some(), "expected filesystem error, got {err}");
    assert!(!path.exists());
    assert!(out.is_empty());
}

#[test]
fn oversized_payload_is_rejected_by_encoder() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("too_big.png");
    let payload = QrPayload::from("A".repeat(5000));

    let err = QrWriter::new()
        .write(&payload, &path)
        .expect_err("payload beyond capacity");

    assert!(matches!(err, Error::QrEncode(_)));
    assert!(!path.exists());
}

#[test]
fn render_options_flow_through_writer() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("high_ecc.png");
    let options = RenderOptions {
        ecc_level: EccLevel::H,
        min_dimension: 300,
        quiet_zone: true,
    };

    QrWriter::from_options(&options)
        .write(&QrPayload::from(ATTENDEE_INFO), &path)
        .expect("write code");

    let image = image::open(&path).expect("open png");
    assert!(image.width() >= 300);
    let decoded = QrDecoder::new().decode(&image).expect("decode");
    assert_eq!(decoded.as_str(), Some(ATTENDEE_INFO));
}

#[test]
fn data_url_embeds_decodable_png() {
    let image = QrEncoder::new()
        .encode_string(ATTENDEE_INFO)
        .expect("encode");
    let url = qrstamp::data_url(&image).expect("data url");
    assert!(url.starts_with("data:image/png;base64,"));

    let png = qrstamp::png_bytes(&image).expect("png bytes");
    let reloaded = image::load_from_memory(&png).expect("reload png");
    let decoded = QrDecoder::new().decode(&reloaded).expect("decode");
    assert_eq!(decoded.as_str(), Some(ATTENDEE_INFO));
}

#[test]
fn generate_qr_writes_decodable_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("attendee_qr.png");

    qrstamp::generate_qr(ATTENDEE_INFO, &path).expect("generate code");

    let decoded = QrDecoder::new().decode_file(&path).expect("decode png");
    assert_eq!(decoded.as_str(), Some(ATTENDEE_INFO));
}

#[test]
fn generate_qr_into_missing_directory_fails() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("absent").join("attendee_qr.png");

    let err = qrstamp::generate_qr(ATTENDEE_INFO, &path).expect_err("missing directory");
    assert!(err.io_error().is_some(), "expected filesystem error, got {err}");
    assert!(!path.exists());
}

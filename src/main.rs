//! qrstamp entrypoint: writes the attendee check-in code

use clap::Parser;
use qrstamp::{QrPayload, QrWriter, QrstampConfig, logging};
use std::io;
use tracing::debug;

const ATTENDEE_INFO: &str = "event_id=E1234&attendee_id=A5678";
const OUTPUT_PATH: &str = "attendee_qr.png";

#[derive(Parser, Debug)]
#[command(
    name = "qrstamp",
    version,
    about = "Write the attendee check-in QR code to attendee_qr.png"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    let config = QrstampConfig::load(None)?;
    logging::init(&config.logging)?;
    debug!(render = ?config.render, "Loaded configuration");

    let writer = QrWriter::from_options(&config.render);
    writer.write_and_report(
        &QrPayload::from(ATTENDEE_INFO),
        OUTPUT_PATH,
        &mut io::stdout().lock(),
    )?;

    Ok(())
}

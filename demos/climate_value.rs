//! Summarizes the last year of weather at a station and values its climate.
//!
//! Set RUST_LOG=info (or debug) to see cache and download messages.

use chrono::FixedOffset;
use joggability::{ClimateFactor, Joggability, JoggabilityError, LatLon, SummaryWindow};

#[tokio::main]
async fn main() -> Result<(), JoggabilityError> {
    env_logger::init();

    let client = Joggability::new().await?;
    // De Bilt, the Netherlands. Days are cut at CET midnight all year.
    let station = "06260";
    let location = LatLon(52.10, 5.18);
    let utc_offset = FixedOffset::east_opt(3600).unwrap();

    let counts = client
        .summary()
        .station(station)
        .location(location)
        .window(SummaryWindow::trailing(365))
        .utc_offset(utc_offset)
        .call()
        .await?;

    let percent = counts.normalized().scale(100.0).round_digits(1).call()?;
    println!("Joggable days: {} of {} ({}%)", counts.num_yes, counts.total(), percent.num_yes);
    for (reason, share) in &percent.no_reasons {
        println!("  no, {reason}: {share}%");
    }
    for (reason, share) in &percent.unknown_reasons {
        println!("  unknown, {reason}: {share}%");
    }

    let value = client
        .climate_annual_value()
        .station(station)
        .location(location)
        .factor(ClimateFactor::new(20.0))
        .window(SummaryWindow::trailing(365))
        .utc_offset(utc_offset)
        .call()
        .await?;
    println!("Annual climate value: ${value:.0}");

    Ok(())
}

// src/main.rs

//! Entry point for `glyph-arm`: converts the configured text into joint
//! angles and writes them to a JSON file.

use anyhow::Context;
use glyph_arm::{config::Config, driver};
use log::{info, warn};

fn main() -> anyhow::Result<()> {
    // Default filter is "warn" if RUST_LOG is not set, so a normal run prints
    // only the confirmation line.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    info!("Starting glyph-arm...");

    let config = Config::load_or_default().context("Failed to load configuration")?;
    info!(
        "Arm: link1={} link2={}, offsets O1={} O2={} rad",
        config.arm.geometry.link1,
        config.arm.geometry.link2,
        config.arm.calibration.theta1_offset,
        config.arm.calibration.theta2_offset
    );

    let report = driver::generate_for_string(&config.input, &config);
    if !report.is_complete() {
        warn!(
            "{} character(s) could not be drawn and were left out: {:?}",
            report.failures.len(),
            report
                .failures
                .iter()
                .map(|f| f.character())
                .collect::<String>()
        );
    }

    report
        .document
        .write_to_path(&config.output.path, config.output.indent)
        .context("Failed to save angles")?;

    println!(
        "Angles for input '{}' have been saved to '{}'.",
        config.input,
        config.output.path.display()
    );

    info!("glyph-arm exited successfully.");
    Ok(())
}

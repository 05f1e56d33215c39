// src/driver.rs

//! Turns input text into an [`OutputDocument`].
//!
//! Each character is looked up in the waypoint table and every waypoint is
//! solved with the configured solver. A waypoint the arm cannot reach
//! abandons that character only; the rest of the text is still processed and
//! the failure is returned in the [`RunReport`].

use log::{debug, info, warn};
use thiserror::Error;

use crate::config::Config;
use crate::document::{AngleStep, OutputDocument};
use crate::kinematics::KinematicsError;
use crate::waypoints::program_for;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrokeError {
    #[error("character {character:?}: waypoint {index} ({label}) could not be solved")]
    Unreachable {
        character: char,
        index: usize,
        label: &'static str,
        #[source]
        source: KinematicsError,
    },
}

impl StrokeError {
    pub fn character(&self) -> char {
        match self {
            StrokeError::Unreachable { character, .. } => *character,
        }
    }
}

/// Outcome of converting a whole string.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub document: OutputDocument,
    /// Characters left out of the document, one entry per character.
    pub failures: Vec<StrokeError>,
}

impl RunReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Solves every waypoint of `c`. Unsupported characters give an empty list.
pub fn generate_for_character(c: char, config: &Config) -> Result<Vec<AngleStep>, StrokeError> {
    let arm = &config.arm;
    program_for(c)
        .iter()
        .enumerate()
        .map(|(index, waypoint)| {
            config
                .solver
                .solve(&arm.geometry, &arm.calibration, waypoint.offset())
                .map(|angles| AngleStep::new(angles, waypoint.pen_down, waypoint.label))
                .map_err(|source| StrokeError::Unreachable {
                    character: c,
                    index,
                    label: waypoint.label,
                    source,
                })
        })
        .collect()
}

/// Converts every character of `text`. Keys keep the input's casing and
/// first-occurrence order.
pub fn generate_for_string(text: &str, config: &Config) -> RunReport {
    info!(
        "Generating angles for {} characters with the {:?} solver",
        text.chars().count(),
        config.solver
    );
    if config.solver.has_constant_elbow() {
        info!(
            "{:?} solver ignores the target for theta2; every step gets the same elbow angle",
            config.solver
        );
    }

    let mut document = OutputDocument::new(config.output.layout);
    let mut failures: Vec<StrokeError> = Vec::new();

    for c in text.chars() {
        if document.contains(c) || failures.iter().any(|f| f.character() == c) {
            continue;
        }
        match generate_for_character(c, config) {
            Ok(steps) => {
                if steps.is_empty() {
                    debug!("{:?} has no stroke program, emitting an empty entry", c);
                } else {
                    debug!("{:?}: {} steps", c, steps.len());
                }
                document.insert(c, steps);
            }
            Err(e) => {
                warn!("Skipping character: {:#}", anyhow::Error::from(e.clone()));
                failures.push(e);
            }
        }
    }

    info!(
        "Generated {} entries, {} characters failed",
        document.len(),
        failures.len()
    );
    RunReport { document, failures }
}

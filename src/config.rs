// src/config.rs

//! Run configuration for `glyph-arm`.
//!
//! Everything that used to be a hard-coded constant lives here: the link
//! geometry, the calibration offsets, the text to convert, which solver to
//! use, and where and how to write the result. The whole structure can be
//! deserialized from a JSON file; any field left out keeps its default.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::document::DocumentLayout;
use crate::kinematics::{Calibration, LinkGeometry, SolverKind};
use crate::waypoints::DEFAULT_INPUT;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "GLYPH_ARM_CONFIG";

/// Default name of the output document, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "robot_arm_angles.json";

// --- Top-Level Configuration Structure ---

/// Complete configuration for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Arm geometry and calibration.
    pub arm: ArmConfig,
    /// Which inverse-kinematics form turns waypoints into angles.
    pub solver: SolverKind,
    /// Characters to convert, in order.
    pub input: String,
    /// Output document settings.
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            arm: ArmConfig::default(),
            solver: SolverKind::default(),
            input: DEFAULT_INPUT.to_string(),
            output: OutputConfig::default(),
        }
    }
}

// --- Arm Configuration ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArmConfig {
    /// Link vectors. The end of link 1 is the pen's home position.
    pub geometry: LinkGeometry,
    /// Joint offsets in radians.
    pub calibration: Calibration,
}

// --- Output Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the document is written.
    pub path: PathBuf,
    /// Record list with pen state, or named steps.
    pub layout: DocumentLayout,
    /// Spaces per indentation level.
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            layout: DocumentLayout::Strokes,
            indent: 4,
        }
    }
}

impl Config {
    /// Reads a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Loads the file named by `GLYPH_ARM_CONFIG`, or falls back to the
    /// built-in defaults when the variable is unset.
    pub fn load_or_default() -> anyhow::Result<Config> {
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Config::load(Path::new(&path)),
            _ => {
                debug!("{} not set, using default configuration", CONFIG_ENV_VAR);
                Ok(Config::default())
            }
        }
    }

    /// Rejects settings that would make every solve fail or the write
    /// impossible.
    pub fn validate(&self) -> anyhow::Result<()> {
        let geometry = &self.arm.geometry;
        if !geometry.link1.is_finite() || !geometry.link2.is_finite() {
            bail!("link geometry must be finite, got {:?}", geometry);
        }
        if geometry.link1.norm() == 0.0 || geometry.link2.norm() == 0.0 {
            bail!(
                "links must have non-zero length, got link1={} link2={}",
                geometry.link1,
                geometry.link2
            );
        }
        let calibration = &self.arm.calibration;
        if !calibration.theta1_offset.is_finite() || !calibration.theta2_offset.is_finite() {
            bail!("calibration offsets must be finite, got {:?}", calibration);
        }
        if self.output.path.as_os_str().is_empty() {
            bail!("output path must not be empty");
        }
        Ok(())
    }
}

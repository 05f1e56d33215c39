// src/document.rs

//! The angle document written at the end of a run.
//!
//! Keys are the characters exactly as they appeared in the input, in
//! first-occurrence order. Two layouts are supported:
//!
//! - [`DocumentLayout::Strokes`]: each character maps to a list of
//!   `{"theta1", "theta2", "pen"}` records.
//! - [`DocumentLayout::NamedSteps`]: each character maps to an object of
//!   step label → `{"theta1", "theta2"}`.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::kinematics::JointAngles;

/// Solved angles for one waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleStep {
    pub theta1: f64,
    pub theta2: f64,
    pub pen: bool,
    #[serde(skip)]
    pub label: &'static str,
}

impl AngleStep {
    pub fn new(angles: JointAngles, pen: bool, label: &'static str) -> Self {
        AngleStep {
            theta1: angles.theta1,
            theta2: angles.theta2,
            pen,
            label,
        }
    }

    pub fn angles(&self) -> JointAngles {
        JointAngles {
            theta1: self.theta1,
            theta2: self.theta2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentLayout {
    #[default]
    Strokes,
    NamedSteps,
}

/// Ordered character → steps mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputDocument {
    layout: DocumentLayout,
    entries: Vec<(char, Vec<AngleStep>)>,
}

impl OutputDocument {
    pub fn new(layout: DocumentLayout) -> Self {
        OutputDocument {
            layout,
            entries: Vec::new(),
        }
    }

    pub fn layout(&self) -> DocumentLayout {
        self.layout
    }

    /// Inserts or replaces the steps for `c`. A replaced key keeps its
    /// original position.
    pub fn insert(&mut self, c: char, steps: Vec<AngleStep>) {
        match self.entries.iter_mut().find(|(key, _)| *key == c) {
            Some((_, existing)) => *existing = steps,
            None => self.entries.push((c, steps)),
        }
    }

    pub fn get(&self, c: char) -> Option<&[AngleStep]> {
        self.entries
            .iter()
            .find(|(key, _)| *key == c)
            .map(|(_, steps)| steps.as_slice())
    }

    pub fn contains(&self, c: char) -> bool {
        self.get(c).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty-printed JSON with `indent` spaces per level, no trailing
    /// newline.
    pub fn to_json(&self, indent: usize) -> serde_json::Result<Vec<u8>> {
        let indent = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        Ok(out)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn write_to_path(&self, path: &Path, indent: usize) -> anyhow::Result<()> {
        let bytes = self
            .to_json(indent)
            .context("Failed to serialize angle document")?;
        fs::write(path, &bytes)
            .with_context(|| format!("Failed to write angle document to '{}'", path.display()))?;
        debug!(
            "Wrote {} characters ({} bytes) to {}",
            self.entries.len(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }
}

/// Label → angles view of one character's steps.
struct NamedSteps<'a>(&'a [AngleStep]);

impl Serialize for NamedSteps<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for step in self.0 {
            map.serialize_entry(step.label, &step.angles())?;
        }
        map.end()
    }
}

impl Serialize for OutputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (c, steps) in &self.entries {
            match self.layout {
                DocumentLayout::Strokes => map.serialize_entry(c, steps)?,
                DocumentLayout::NamedSteps => map.serialize_entry(c, &NamedSteps(steps))?,
            }
        }
        map.end()
    }
}

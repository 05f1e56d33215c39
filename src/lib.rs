//! glyph-arm library crate.
//!
//! Converts characters into joint-angle sequences for a two-link drawing
//! arm. Exposes the modules for the binary and the integration tests.

pub mod config;
pub mod document;
pub mod driver;
pub mod kinematics;
pub mod waypoints;

// src/kinematics.rs

//! Planar inverse kinematics for the two-link drawing arm.
//!
//! Every solver takes the arm's link geometry, the calibration offsets and a
//! target offset relative to the base link, and returns the joint angles in
//! degrees. Three variants exist (see [`SolverKind`]):
//!
//! - `Offset`: the closed form the angle files were originally produced
//!   with. Its law-of-cosines term is built from `r² = L1z² + L2z²`, so
//!   `cos(theta2)` is always zero and `theta2` is the constant
//!   `90° + degrees(O2)`. Kept so existing angle files can be regenerated.
//! - `Displacement`: orients `theta1` along the summed link vectors and adds
//!   the heading of link 2 to the elbow angle.
//! - `TwoLink`: a genuine two-link solution using the distance from the
//!   shoulder to the target.
//!
//! `acos` is only evaluated on [-1, 1]; anything else is an
//! [`KinematicsError::Unreachable`] error, never a NaN.

use std::fmt;
use std::ops::Add;

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How far `cos(theta2)` may drift past ±1 from rounding before the target
/// counts as unreachable. Values inside the band are clamped.
pub const COS_TOLERANCE: f64 = 1e-9;

/// A 2D vector: a link, a waypoint offset, or a target position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    pub fn norm_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Heading of the vector in radians, `atan2(y, x)`.
    pub fn heading(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The two rigid segments of the arm, each as a vector from its proximal
/// joint to its distal end. Fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkGeometry {
    pub link1: Vec2,
    pub link2: Vec2,
}

impl Default for LinkGeometry {
    fn default() -> Self {
        LinkGeometry {
            link1: Vec2::new(5.0, 5.0),
            link2: Vec2::new(3.0, 3.0),
        }
    }
}

/// Small joint offsets (radians) added to the solved angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// O1, added to theta1.
    pub theta1_offset: f64,
    /// O2, added to theta2.
    pub theta2_offset: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            theta1_offset: 0.1,
            theta2_offset: 0.05,
        }
    }
}

/// Solved joint angles in degrees, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    pub theta1: f64,
    pub theta2: f64,
}

impl JointAngles {
    fn from_radians(theta1: f64, theta2: f64) -> Self {
        JointAngles {
            theta1: theta1.to_degrees(),
            theta2: theta2.to_degrees(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    /// The law-of-cosines term fell outside the domain of `acos`.
    #[error("target is unreachable: cos(theta2) = {cos_theta2} is outside [-1, 1]")]
    Unreachable { cos_theta2: f64 },
    /// A link of zero length makes the law of cosines divide by zero.
    #[error("link {link} has zero length")]
    DegenerateLink { link: u8 },
}

/// Selects which closed form turns a target into joint angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// Absolute/offset form. Produces a constant theta2.
    #[default]
    Offset,
    /// Displacement form. Ignores the calibration offsets.
    Displacement,
    /// Genuine two-link IK.
    TwoLink,
}

impl SolverKind {
    /// Solves for the arm reaching `offset` relative to the end of link 1.
    pub fn solve(
        self,
        geometry: &LinkGeometry,
        calibration: &Calibration,
        offset: Vec2,
    ) -> Result<JointAngles, KinematicsError> {
        let angles = match self {
            SolverKind::Offset => {
                calculate_angles(geometry.link1 + offset, geometry.link2, calibration)
            }
            SolverKind::Displacement => {
                calculate_displacement_angles(geometry.link1 + offset, geometry.link2)
            }
            SolverKind::TwoLink => {
                calculate_two_link_angles(geometry, geometry.link1 + offset, calibration)
            }
        }?;
        trace!(
            "{:?} solver: offset {} -> theta1={} theta2={}",
            self,
            offset,
            angles.theta1,
            angles.theta2
        );
        Ok(angles)
    }

    /// True for solvers whose theta2 does not depend on the target.
    pub fn has_constant_elbow(self) -> bool {
        matches!(self, SolverKind::Offset)
    }
}

/// Absolute/offset form.
///
/// `theta1 = atan2(|L2|, |L1|) + O1`. The elbow term uses
/// `r = sqrt(|L1|² + |L2|²)`, which cancels the numerator of the law of
/// cosines, so `theta2` is always `90° + degrees(O2)`.
pub fn calculate_angles(
    l1: Vec2,
    l2: Vec2,
    calibration: &Calibration,
) -> Result<JointAngles, KinematicsError> {
    let l1z = l1.norm();
    let l2z = l2.norm();
    let theta1 = l2z.atan2(l1z) + calibration.theta1_offset;

    let r = (l1z * l1z + l2z * l2z).sqrt();
    let cos_theta2 = law_of_cosines(l1z, l2z, r)?;
    let theta2 = checked_acos(cos_theta2)? + calibration.theta2_offset;

    Ok(JointAngles::from_radians(theta1, theta2))
}

/// Displacement form.
///
/// `theta1` is the heading of `L1 + L2`; `theta2` is the angle from the law
/// of cosines over `r = |L1 + L2|` plus the heading of `L2`.
pub fn calculate_displacement_angles(
    l1: Vec2,
    l2: Vec2,
) -> Result<JointAngles, KinematicsError> {
    let reach = l1 + l2;
    let theta1 = reach.heading();

    let cos_theta2 = law_of_cosines(l1.norm(), l2.norm(), reach.norm())?;
    let theta2 = checked_acos(cos_theta2)? + l2.heading();

    Ok(JointAngles::from_radians(theta1, theta2))
}

/// Two-link IK: shoulder at the origin, segment lengths `|link1|` and
/// `|link2|`, end effector at `target`.
///
/// Returns the elbow-down solution. Fails with `Unreachable` when the target
/// is farther than `a + b` or closer than `|a - b|`.
pub fn calculate_two_link_angles(
    geometry: &LinkGeometry,
    target: Vec2,
    calibration: &Calibration,
) -> Result<JointAngles, KinematicsError> {
    let a = geometry.link1.norm();
    let b = geometry.link2.norm();
    if a == 0.0 {
        return Err(KinematicsError::DegenerateLink { link: 1 });
    }
    if b == 0.0 {
        return Err(KinematicsError::DegenerateLink { link: 2 });
    }

    let cos_theta2 = (target.norm_squared() - a * a - b * b) / (2.0 * a * b);
    let elbow = checked_acos(cos_theta2)?;
    let shoulder = target.heading() - (b * elbow.sin()).atan2(a + b * elbow.cos());

    Ok(JointAngles::from_radians(
        shoulder + calibration.theta1_offset,
        elbow + calibration.theta2_offset,
    ))
}

/// `(a² + b² − r²) / 2ab`, rejecting zero-length sides.
fn law_of_cosines(a: f64, b: f64, r: f64) -> Result<f64, KinematicsError> {
    if a == 0.0 {
        return Err(KinematicsError::DegenerateLink { link: 1 });
    }
    if b == 0.0 {
        return Err(KinematicsError::DegenerateLink { link: 2 });
    }
    Ok((a * a + b * b - r * r) / (2.0 * a * b))
}

/// `acos` restricted to its domain. Rounding overshoot within
/// [`COS_TOLERANCE`] is clamped.
pub fn checked_acos(cos_theta: f64) -> Result<f64, KinematicsError> {
    if !cos_theta.is_finite() || cos_theta.abs() > 1.0 + COS_TOLERANCE {
        return Err(KinematicsError::Unreachable {
            cos_theta2: cos_theta,
        });
    }
    Ok(cos_theta.clamp(-1.0, 1.0).acos())
}

#[cfg(test)]
mod tests;

// src/kinematics/tests.rs

use super::*;

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{}: expected {}, got {}",
        what,
        expected,
        actual
    );
}

fn default_setup() -> (LinkGeometry, Calibration) {
    (LinkGeometry::default(), Calibration::default())
}

// --- Offset form ---

#[test_log::test]
fn offset_form_theta2_is_constant() {
    let (geometry, calibration) = default_setup();
    let expected = 90.0 + 0.05_f64.to_degrees();
    for offset in [
        Vec2::ZERO,
        Vec2::new(1.0, 2.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(0.2, -2.2),
    ] {
        let angles = SolverKind::Offset
            .solve(&geometry, &calibration, offset)
            .expect("offset form should solve");
        assert_close(angles.theta2, expected, "theta2");
    }
}

#[test_log::test]
fn offset_form_theta1_matches_closed_form() {
    let calibration = Calibration::default();
    let l1 = Vec2::new(6.0, 5.0);
    let l2 = Vec2::new(3.0, 3.0);
    let angles = calculate_angles(l1, l2, &calibration).unwrap();
    let expected = (l2.norm().atan2(l1.norm()) + 0.1).to_degrees();
    assert_close(angles.theta1, expected, "theta1");
}

#[test_log::test]
fn offset_form_rejects_zero_length_link() {
    let calibration = Calibration::default();
    let err = calculate_angles(Vec2::ZERO, Vec2::new(3.0, 3.0), &calibration).unwrap_err();
    assert_eq!(err, KinematicsError::DegenerateLink { link: 1 });
}

// --- Displacement form ---

#[test_log::test]
fn displacement_form_orients_theta1_along_summed_links() {
    let angles = calculate_displacement_angles(Vec2::new(5.0, 5.0), Vec2::new(3.0, 3.0)).unwrap();
    assert_close(angles.theta1, 45.0, "theta1");
}

#[test_log::test]
fn displacement_form_collinear_links_fold_fully() {
    // Collinear links: r = |L1| + |L2|, so cos(theta2) = -1 and the elbow
    // term is 180° before adding the 45° heading of L2.
    // acos is steep near -1, so rounding in cos(theta2) costs a few µdeg.
    let angles = calculate_displacement_angles(Vec2::new(5.0, 5.0), Vec2::new(3.0, 3.0)).unwrap();
    assert!((angles.theta2 - 225.0).abs() < 1e-4, "theta2 = {}", angles.theta2);
}

#[test_log::test]
fn displacement_form_ignores_calibration() {
    let geometry = LinkGeometry::default();
    let zero = Calibration {
        theta1_offset: 0.0,
        theta2_offset: 0.0,
    };
    let a = SolverKind::Displacement
        .solve(&geometry, &zero, Vec2::new(1.0, -1.0))
        .unwrap();
    let b = SolverKind::Displacement
        .solve(&geometry, &Calibration::default(), Vec2::new(1.0, -1.0))
        .unwrap();
    assert_eq!(a, b);
}

// --- Two-link form ---

#[test_log::test]
fn two_link_reaches_the_target() {
    let geometry = LinkGeometry::default();
    let zero = Calibration {
        theta1_offset: 0.0,
        theta2_offset: 0.0,
    };
    let target = Vec2::new(6.0, 4.0);
    let angles = calculate_two_link_angles(&geometry, target, &zero).unwrap();

    // Forward kinematics must land back on the target.
    let a = geometry.link1.norm();
    let b = geometry.link2.norm();
    let t1 = angles.theta1.to_radians();
    let t2 = angles.theta2.to_radians();
    let x = a * t1.cos() + b * (t1 + t2).cos();
    let y = a * t1.sin() + b * (t1 + t2).sin();
    assert_close(x, target.x, "x");
    assert_close(y, target.y, "y");
}

#[test_log::test]
fn two_link_elbow_depends_on_target() {
    let (geometry, calibration) = default_setup();
    let near = SolverKind::TwoLink
        .solve(&geometry, &calibration, Vec2::new(-1.0, -1.0))
        .unwrap();
    let far = SolverKind::TwoLink
        .solve(&geometry, &calibration, Vec2::new(1.0, 2.0))
        .unwrap();
    assert!((near.theta2 - far.theta2).abs() > 1.0);
}

#[test_log::test]
fn two_link_rejects_target_out_of_reach() {
    let (geometry, calibration) = default_setup();
    let err = SolverKind::TwoLink
        .solve(&geometry, &calibration, Vec2::new(100.0, 0.0))
        .unwrap_err();
    assert!(matches!(err, KinematicsError::Unreachable { cos_theta2 } if cos_theta2 > 1.0));
}

#[test_log::test]
fn two_link_rejects_zero_length_link() {
    let geometry = LinkGeometry {
        link1: Vec2::new(5.0, 5.0),
        link2: Vec2::ZERO,
    };
    let err = calculate_two_link_angles(&geometry, Vec2::new(5.0, 5.0), &Calibration::default())
        .unwrap_err();
    assert_eq!(err, KinematicsError::DegenerateLink { link: 2 });
}

// --- Domain handling ---

#[test]
fn checked_acos_clamps_rounding_overshoot() {
    assert_eq!(checked_acos(1.0 + 1e-12).unwrap(), 0.0);
    assert_close(checked_acos(-1.0 - 1e-12).unwrap(), std::f64::consts::PI, "acos(-1)");
}

#[test]
fn checked_acos_rejects_out_of_domain_and_nan() {
    assert!(matches!(
        checked_acos(1.5),
        Err(KinematicsError::Unreachable { .. })
    ));
    assert!(matches!(
        checked_acos(f64::NAN),
        Err(KinematicsError::Unreachable { .. })
    ));
}

#[test_log::test]
fn every_solver_is_finite_on_in_domain_offsets() {
    let (geometry, calibration) = default_setup();
    for solver in [SolverKind::Offset, SolverKind::Displacement, SolverKind::TwoLink] {
        for dx in [-1.0, -0.5, 0.0, 0.5, 1.0, 2.0] {
            for dy in [-2.2, -1.0, 0.0, 1.0, 2.0] {
                let angles = solver
                    .solve(&geometry, &calibration, Vec2::new(dx, dy))
                    .unwrap_or_else(|e| panic!("{:?} failed at ({}, {}): {}", solver, dx, dy, e));
                assert!(angles.theta1.is_finite() && angles.theta2.is_finite());
            }
        }
    }
}

#[test]
fn solver_kind_uses_snake_case_names() {
    let kind: SolverKind = serde_json::from_str("\"two_link\"").unwrap();
    assert_eq!(kind, SolverKind::TwoLink);
    assert_eq!(serde_json::to_string(&SolverKind::Offset).unwrap(), "\"offset\"");
}

use glam::{Mat4, Vec3, Vec4};
use super::*;

const TOL: f32 = 1e-6;

// ============================================================================
// Aligned case
// ============================================================================

#[test]
fn test_aligned_camera_is_pure_translation() {
    // Eye on the +Z axis looking at the origin: already aligned with the
    // view frame, so the rotation block is the identity.
    let view = look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);

    let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0));
    for col in 0..4 {
        for row in 0..4 {
            assert!(
                (view.col(col)[row] - expected.col(col)[row]).abs() < TOL,
                "col {} row {}",
                col,
                row
            );
        }
    }
}

#[test]
fn test_eye_at_origin_has_no_translation() {
    let view = look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);

    assert!((view.col(3).x).abs() < TOL);
    assert!((view.col(3).y).abs() < TOL);
    assert!((view.col(3).z).abs() < TOL);
}

// ============================================================================
// General pose
// ============================================================================

#[test]
fn test_eye_maps_to_origin() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let view = look_at(eye, Vec3::ZERO, Vec3::Y);

    let transformed = view * Vec4::new(eye.x, eye.y, eye.z, 1.0);
    assert!(transformed.truncate().length() < 1e-5);
}

#[test]
fn test_target_maps_to_negative_z_axis() {
    let eye = Vec3::new(3.0, 4.0, 5.0);
    let center = Vec3::new(1.0, 0.0, -2.0);
    let view = look_at(eye, center, Vec3::Y);

    let transformed = view * Vec4::new(center.x, center.y, center.z, 1.0);
    let distance = (center - eye).length();
    assert!(transformed.x.abs() < 1e-5);
    assert!(transformed.y.abs() < 1e-5);
    assert!((transformed.z + distance).abs() < 1e-5);
}

#[test]
fn test_rotation_rows_are_mutually_perpendicular() {
    let view = look_at(Vec3::new(2.0, 1.0, 3.0), Vec3::ZERO, Vec3::Y);

    let rows = [
        Vec3::new(view.col(0).x, view.col(1).x, view.col(2).x),
        Vec3::new(view.col(0).y, view.col(1).y, view.col(2).y),
        Vec3::new(view.col(0).z, view.col(1).z, view.col(2).z),
    ];
    assert!(rows[0].dot(rows[1]).abs() < 1e-5);
    assert!(rows[0].dot(rows[2]).abs() < 1e-5);
    assert!(rows[1].dot(rows[2]).abs() < 1e-5);
}

#[test]
fn test_up_and_forward_rows_are_unit_length() {
    let view = look_at(Vec3::new(2.0, 1.0, 3.0), Vec3::ZERO, Vec3::Y);

    let up_row = Vec3::new(view.col(0).y, view.col(1).y, view.col(2).y);
    let forward_row = Vec3::new(view.col(0).z, view.col(1).z, view.col(2).z);
    assert!((up_row.length() - 1.0).abs() < 1e-5);
    assert!((forward_row.length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_world_up_has_no_side_component() {
    // With a Y-up hint, world +Y never leans left or right in view space
    let view = look_at(Vec3::new(5.0, 2.0, -3.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y);

    let transformed = view * Vec4::new(0.0, 1.0, 0.0, 0.0);
    assert!(transformed.x.abs() < 1e-5);
    assert!(transformed.y > 0.0);
}

// ============================================================================
// Degeneracy policy
// ============================================================================

#[test]
fn test_up_parallel_to_forward_yields_non_finite() {
    // Looking straight up with an up hint along the same axis
    let view = look_at(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
    assert!(!view.is_finite());
}

#[test]
fn test_idempotence() {
    let a = look_at(Vec3::new(2.0, 1.0, 3.0), Vec3::ZERO, Vec3::Y);
    let b = look_at(Vec3::new(2.0, 1.0, 3.0), Vec3::ZERO, Vec3::Y);
    assert_eq!(a, b);
}

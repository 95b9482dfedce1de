/// Look-at view matrix, following the `gluLookAt` algorithm.
///
/// Produces the matrix that transforms the scene into the observer's
/// frame — not a projection matrix. Pair it with one of the projection
/// builders for a complete view + projection set.

use glam::{Mat4, Vec3, Vec4};

/// View transform orienting an eye toward a target point.
///
/// * `eye_pos` — eye position in the scene.
/// * `center_pos` — position the eye looks at.
/// * `up` — approximate up direction; re-orthogonalized against the
///   forward axis internally.
///
/// The camera looks down its -Z axis: a point straight ahead of the eye
/// lands on the negative Z axis in view space. The result translates the
/// eye to the origin and then rotates into the (side, up, -forward)
/// frame.
///
/// If `up` is parallel to `center_pos - eye_pos` the side vector
/// degenerates to zero and NaN propagates through the result, consistent
/// with the crate-wide policy on degenerate geometry.
pub fn look_at(eye_pos: Vec3, center_pos: Vec3, up: Vec3) -> Mat4 {
    let f = (center_pos - eye_pos).normalize();
    let u_in = up.normalize();

    let s = f.cross(u_in);
    // true up, orthogonal to both the forward and side axes
    let u = s.normalize().cross(f);

    let rotation = Mat4::from_cols(
        Vec4::new(s.x, u.x, -f.x, 0.0),
        Vec4::new(s.y, u.y, -f.y, 0.0),
        Vec4::new(s.z, u.z, -f.z, 0.0),
        Vec4::W,
    );

    rotation * Mat4::from_translation(-eye_pos)
}

#[cfg(test)]
#[path = "look_at_tests.rs"]
mod tests;

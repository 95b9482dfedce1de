/// Generalized perspective projection (Kooima's method).
///
/// Derives an off-axis projection matrix and the matching view matrix
/// directly from the physical configuration of a display: three screen
/// corners and an eye position, all in scene coordinates (meters). The
/// eye need not be centered on the screen, nor perpendicular to it —
/// the result is keystone-corrected for any flat screen pose.
///
/// Reference: Robert Kooima, "Generalized Perspective Projection",
/// <http://csc.lsu.edu/~kooima/articles/genperspective/>.

use glam::{Mat4, Vec3, Vec4};
use super::frustum::Frustum;

/// Orthonormal basis of the screen plane.
///
/// `vr` points along the bottom edge, `vu` along the left edge, `vn` is
/// the screen normal facing the viewer side. The corners are assumed
/// coplanar with a right angle at bottom-left; that is the caller's
/// responsibility and is not validated.
fn screen_basis(bottom_left: Vec3, bottom_right: Vec3, top_left: Vec3) -> (Vec3, Vec3, Vec3) {
    let vr = (bottom_right - bottom_left).normalize();
    let vu = (top_left - bottom_left).normalize();
    let vn = vr.cross(vu).normalize();
    (vr, vu, vn)
}

/// Off-axis frustum bounds for an eye looking at a physical screen.
///
/// Projects the eye-to-corner vectors onto the screen basis and scales
/// them to the near plane. The returned frustum is asymmetric whenever
/// the eye is not centered on the screen's normal axis.
///
/// An eye lying on the screen plane makes the perpendicular distance
/// zero; the division then propagates Inf/NaN through the result.
pub fn off_axis_frustum(
    bottom_left: Vec3,
    bottom_right: Vec3,
    top_left: Vec3,
    eye_pos: Vec3,
    near_clip: f32,
    far_clip: f32,
) -> Frustum {
    let (vr, vu, vn) = screen_basis(bottom_left, bottom_right, top_left);

    // vectors from the eye to each screen corner
    let va = bottom_left - eye_pos;
    let vb = bottom_right - eye_pos;
    let vc = top_left - eye_pos;

    // perpendicular distance from the eye to the screen plane
    let dist = -va.dot(vn);
    let near_over_dist = near_clip / dist;

    let left = vr.dot(va) * near_over_dist;
    let right = vr.dot(vb) * near_over_dist;
    let bottom = vu.dot(va) * near_over_dist;
    let top = vu.dot(vc) * near_over_dist;

    log::trace!(
        "off-axis frustum for eye={} dist={}: l={} r={} b={} t={}",
        eye_pos,
        dist,
        left,
        right,
        bottom,
        top
    );

    Frustum::new(left, right, bottom, top, near_clip, far_clip)
}

/// Derive projection and view matrices from the physical configuration
/// of the display system.
///
/// * `bottom_left`, `bottom_right`, `top_left` — screen corner
///   coordinates in meters.
/// * `eye_pos` — eye coordinate in meters.
/// * `near_clip`, `far_clip` — clipping plane distances from the viewer.
///
/// Returns `(projection, view)`. The projection is the off-axis frustum
/// of [`off_axis_frustum`]; the view matrix translates the eye to the
/// origin and then rotates the scene into the screen-aligned frame
/// (rows vr, vu, vn).
pub fn general_perspective_projection(
    bottom_left: Vec3,
    bottom_right: Vec3,
    top_left: Vec3,
    eye_pos: Vec3,
    near_clip: f32,
    far_clip: f32,
) -> (Mat4, Mat4) {
    let frustum = off_axis_frustum(
        bottom_left,
        bottom_right,
        top_left,
        eye_pos,
        near_clip,
        far_clip,
    );
    let projection = frustum.perspective_matrix();

    let (vr, vu, vn) = screen_basis(bottom_left, bottom_right, top_left);

    // rotation into the screen-aligned frame: basis vectors as rows
    let rotation = Mat4::from_cols(
        Vec4::new(vr.x, vu.x, vn.x, 0.0),
        Vec4::new(vr.y, vu.y, vn.y, 0.0),
        Vec4::new(vr.z, vu.z, vn.z, 0.0),
        Vec4::W,
    );

    // translate first, then rotate
    let view = rotation * Mat4::from_translation(-eye_pos);

    (projection, view)
}

#[cfg(test)]
#[path = "offaxis_tests.rs"]
mod tests;

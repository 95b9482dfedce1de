/// Projection matrix builders — orthographic and perspective.
///
/// Both take the six frustum scalars (left, right, bottom, top, near,
/// far) and return a column-major `Mat4` following the fixed-function
/// clip-space convention: right-handed view space (camera looking down
/// -Z) mapping into the canonical clip cube.
///
/// Coincident planes (right == left, top == bottom, far == near) are not
/// guarded: the division yields Inf/NaN entries in the result.

use glam::{Mat4, Vec4};

/// Orthographic (parallel) projection matrix from frustum parameters.
///
/// * `left`, `right` — left/right clipping plane coordinates.
/// * `bottom`, `top` — bottom/top clipping plane coordinates.
/// * `near`, `far` — near/far clipping plane distances from the viewer.
pub fn orthographic_projection_matrix(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(2.0 / (right - left), 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / (top - bottom), 0.0, 0.0),
        Vec4::new(0.0, 0.0, -2.0 / (far - near), 0.0),
        Vec4::new(
            (right + left) / (right - left),
            (top + bottom) / (top - bottom),
            (far + near) / (far - near),
            1.0,
        ),
    )
}

/// Perspective projection matrix from frustum parameters.
///
/// The frustum may be asymmetric (off-axis): the shear terms land in the
/// third column, the perspective-divide term is -1 in the w row of that
/// column, exactly the `glFrustum` layout.
///
/// * `left`, `right` — left/right clipping plane coordinates at the near
///   plane.
/// * `bottom`, `top` — bottom/top clipping plane coordinates at the near
///   plane.
/// * `near`, `far` — near/far clipping plane distances from the viewer.
pub fn perspective_projection_matrix(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    Mat4::from_cols(
        Vec4::new((2.0 * near) / (right - left), 0.0, 0.0, 0.0),
        Vec4::new(0.0, (2.0 * near) / (top - bottom), 0.0, 0.0),
        Vec4::new(
            (right + left) / (right - left),
            (top + bottom) / (top - bottom),
            -(far + near) / (far - near),
            -1.0,
        ),
        Vec4::new(0.0, 0.0, -(2.0 * far * near) / (far - near), 0.0),
    )
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;

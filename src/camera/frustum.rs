/// Frustum — six clipping-plane scalars in view space.
///
/// Field order (left, right, bottom, top, near, far) is preserved across
/// `new`/`to_array` so the values can be splatted positionally into a
/// `glFrustum`-style call.
///
/// Invariants (for a well-formed volume): right > left, top > bottom,
/// far > near > 0. They are NOT validated — degenerate parameters flow
/// through the arithmetic as Inf/NaN and are visible via `is_finite`.

use glam::Mat4;
use super::projection::{orthographic_projection_matrix, perspective_projection_matrix};

/// Default near clipping plane distance in meters.
pub const DEFAULT_NEAR_CLIP: f32 = 0.01;

/// Default far clipping plane distance in meters.
pub const DEFAULT_FAR_CLIP: f32 = 100.0;

/// Six clipping-plane scalars defining a view-space clipping volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Left clipping plane coordinate at the near plane
    pub left: f32,
    /// Right clipping plane coordinate at the near plane
    pub right: f32,
    /// Bottom clipping plane coordinate at the near plane
    pub bottom: f32,
    /// Top clipping plane coordinate at the near plane
    pub top: f32,
    /// Near clipping plane distance from the viewer
    pub near: f32,
    /// Far clipping plane distance from the viewer
    pub far: f32,
}

impl Frustum {
    /// Create a frustum from the six scalars, in glFrustum argument order.
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// The six scalars as an ordered array (left, right, bottom, top,
    /// near, far), directly usable as positional frustum arguments.
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.left, self.right, self.bottom, self.top, self.near, self.far,
        ]
    }

    /// `true` if every scalar is finite.
    ///
    /// Degenerate input geometry (zero viewing distance, coincident
    /// planes) surfaces as Inf/NaN rather than an error; this is the
    /// inspection hook for it.
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
    }

    /// Horizontally mirrored frustum: the opposite eye of a stereo pair.
    ///
    /// The frustum computed for an eye offset of `+e` is the mirror of the
    /// one computed for `-e`.
    pub fn mirrored(&self) -> Self {
        Self {
            left: -self.right,
            right: -self.left,
            ..*self
        }
    }

    /// Perspective projection matrix for this frustum.
    pub fn perspective_matrix(&self) -> Mat4 {
        perspective_projection_matrix(
            self.left, self.right, self.bottom, self.top, self.near, self.far,
        )
    }

    /// Orthographic projection matrix for this frustum.
    pub fn orthographic_matrix(&self) -> Mat4 {
        orthographic_projection_matrix(
            self.left, self.right, self.bottom, self.top, self.near, self.far,
        )
    }
}

/// Calculate frustum parameters for rendering with perspective on a
/// physical display.
///
/// With a non-zero `eye_offset` the returned frustum is asymmetric
/// (sheared), suitable for one eye of a stereoscopic pair; calling twice
/// with `+eye_offset` and `-eye_offset` yields the two-eye pair. With
/// `eye_offset == 0.0` the frustum is symmetric (`left == -right`).
///
/// * `screen_width` — display width in meters.
/// * `screen_aspect` — display aspect ratio (width / height).
/// * `screen_dist` — distance from the center of the eyes to the screen,
///   in meters.
/// * `converge_offset` — offset of the zero-disparity plane from the
///   screen. For best results keep the convergence plane on the screen
///   (0.0).
/// * `eye_offset` — half the inter-ocular separation in meters.
/// * `near_clip` — near clipping plane distance; should be less than
///   `screen_dist`.
/// * `far_clip` — far clipping plane distance; must be greater than
///   `near_clip`.
///
/// The view point must be transformed to match: offsets of +/-
/// `eye_offset` in X and `screen_dist` in Z belong on the view matrix,
/// not the projection matrix, or lighting calculations will break.
///
/// `converge_offset + screen_dist` and `screen_aspect` must be non-zero;
/// otherwise the division yields Inf/NaN in the result.
pub fn compute_frustum(
    screen_width: f32,
    screen_aspect: f32,
    screen_dist: f32,
    converge_offset: f32,
    eye_offset: f32,
    near_clip: f32,
    far_clip: f32,
) -> Frustum {
    let d = screen_width * (converge_offset + screen_dist);
    let ratio = near_clip / (converge_offset + screen_dist);

    let right = (d - eye_offset) * ratio;
    let left = (d + eye_offset) * -ratio;
    let top = (screen_width / screen_aspect) * near_clip;
    let bottom = -top;

    log::trace!(
        "computed frustum for width={} aspect={} dist={} eye_offset={}: \
         l={} r={} b={} t={}",
        screen_width,
        screen_aspect,
        screen_dist,
        eye_offset,
        left,
        right,
        bottom,
        top
    );

    Frustum::new(left, right, bottom, top, near_clip, far_clip)
}

/// Symmetric frustum for a viewer centered on the display.
///
/// Shorthand for [`compute_frustum`] with zero convergence and eye
/// offsets — the monoscopic case.
pub fn compute_symmetric_frustum(
    screen_width: f32,
    screen_aspect: f32,
    screen_dist: f32,
    near_clip: f32,
    far_clip: f32,
) -> Frustum {
    compute_frustum(
        screen_width,
        screen_aspect,
        screen_dist,
        0.0,
        0.0,
        near_clip,
        far_clip,
    )
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;

/// Camera — passive view/projection pair.
///
/// The Camera computes nothing on its own; it stores the matrices the
/// derivation functions produce and hands them to the consumer. The
/// constructors cover the two derivation paths: physical screen corners
/// (off-axis) and frustum + look-at.

use glam::{Mat4, Vec3};
use super::frustum::Frustum;
use super::look_at::look_at;
use super::offaxis::general_perspective_projection;

/// A view matrix and a projection matrix, owned together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a camera from precomputed matrices.
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
        }
    }

    /// Camera for an eye looking at a physical screen described by three
    /// corner points. Both matrices come from the generalized perspective
    /// projection.
    pub fn off_axis(
        bottom_left: Vec3,
        bottom_right: Vec3,
        top_left: Vec3,
        eye_pos: Vec3,
        near_clip: f32,
        far_clip: f32,
    ) -> Self {
        let (projection, view) = general_perspective_projection(
            bottom_left,
            bottom_right,
            top_left,
            eye_pos,
            near_clip,
            far_clip,
        );
        Self::new(view, projection)
    }

    /// Camera with a frustum-derived perspective projection and a
    /// look-at view.
    pub fn perspective_look_at(frustum: &Frustum, eye_pos: Vec3, center_pos: Vec3, up: Vec3) -> Self {
        Self::new(look_at(eye_pos, center_pos, up), frustum.perspective_matrix())
    }

    /// View matrix (scene into camera space).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (camera space into clip space).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Set the view matrix.
    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    /// Set the projection matrix.
    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;

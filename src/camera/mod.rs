//! Camera module — frustum derivation, projection builders, and view
//! transforms.
//!
//! Everything here is a pure function over vectors and matrices: each call
//! returns freshly constructed values, owns nothing shared, and may run
//! concurrently from any number of threads.
//!
//! Two paths produce a projection:
//! - [`compute_frustum`] → [`perspective_projection_matrix`] for a screen
//!   described by width/aspect/distance (with optional convergence and
//!   per-eye offsets for stereo),
//! - [`general_perspective_projection`] for a screen described by three
//!   corner points at an arbitrary pose, which also yields the matching
//!   view matrix.
//!
//! [`look_at`] builds a view matrix independently of either path.

mod camera;
mod frustum;
mod look_at;
mod offaxis;
mod projection;

pub use camera::Camera;
pub use frustum::{
    compute_frustum, compute_symmetric_frustum, Frustum, DEFAULT_FAR_CLIP, DEFAULT_NEAR_CLIP,
};
pub use look_at::look_at;
pub use offaxis::{general_perspective_projection, off_axis_frustum};
pub use projection::{orthographic_projection_matrix, perspective_projection_matrix};

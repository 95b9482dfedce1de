/*!
# Parallax View

Camera projection and view transformation matrices for 2D/3D rendering,
including stereoscopic (asymmetric) frustums derived from physical display
geometry.

The crate maps a viewer's eye position and a physical screen configuration
into standard 4x4 projection/view matrices consumable by a graphics
pipeline:

- **Frustum calculation**: symmetric and asymmetric (per-eye) clipping
  plane parameters from display width, aspect ratio, viewing distance,
  convergence offset, and eye offset.
- **Generalized perspective projection**: off-axis projection and view
  matrices derived directly from three screen-corner coordinates and an
  eye position (Kooima's method). Handles screens at arbitrary poses
  relative to the eye.
- **Projection matrix builders**: orthographic and (possibly asymmetric)
  perspective matrices from six frustum scalars, following the
  `glOrtho`/`glFrustum` clip-space convention.
- **Look-at view matrix**: rigid view transform orienting an eye toward a
  target point, following the `gluLookAt` algorithm.

All operations are pure, stateless functions. Degenerate geometry (eye on
the screen plane, coincident clipping planes, up parallel to forward) is
NOT validated: it propagates as Inf/NaN in the output, to be caught by the
caller's own inspection (`Frustum::is_finite`, `Mat4::is_finite`).

Matrices are `glam::Mat4`, column-major, directly consumable by a
fixed-function-style graphics call expecting 16 consecutive column-major
floats (see [`mat4_as_gl`]).
*/

// Internal modules
mod convert;
mod error;
pub mod camera;

// Error types
pub use error::{Error, Result};

// Input/output boundary helpers
pub use convert::{mat4_as_gl, vec3_from_slice};

// Camera math
pub use camera::{
    compute_frustum, compute_symmetric_frustum, general_perspective_projection, look_at,
    off_axis_frustum, orthographic_projection_matrix, perspective_projection_matrix, Camera,
    Frustum, DEFAULT_FAR_CLIP, DEFAULT_NEAR_CLIP,
};

// Re-export math library at crate root
pub use glam;

//! Conversion helpers at the crate's input/output boundary.
//!
//! Fixed-size numeric containers (`[f32; 3]`, tuples) convert to `Vec3`
//! infallibly through glam's `From` impls — the shape check happens at
//! compile time. Dynamically sized input goes through `vec3_from_slice`,
//! which validates the shape before any arithmetic.
//!
//! On the output side, `mat4_as_gl` reinterprets a `Mat4` as the 16
//! consecutive column-major floats a fixed-function-style graphics call
//! expects, without copying.

use crate::error::{Error, Result};
use glam::{Mat4, Vec3};

/// Convert a dynamically sized slice into a `Vec3`.
///
/// Fails with [`Error::InvalidInput`] unless the slice holds exactly 3
/// components. Use this for input whose length is only known at runtime
/// (parsed configuration, FFI buffers); fixed-size arrays and tuples
/// convert via `Vec3::from` instead.
pub fn vec3_from_slice(slice: &[f32]) -> Result<Vec3> {
    match slice {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(Error::InvalidInput(format!(
            "expected 3 components, got {}",
            slice.len()
        ))),
    }
}

/// View a matrix as 16 consecutive column-major floats.
///
/// Zero-copy: `Mat4` is already laid out column-major in memory, so the
/// returned reference aliases the matrix storage directly. Suitable for
/// handing to a `glLoadMatrixf`-style call.
pub fn mat4_as_gl(matrix: &Mat4) -> &[f32; 16] {
    bytemuck::cast_ref(matrix)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;

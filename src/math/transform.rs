//! Construction and application of homogeneous 4x4 transforms.
//!
//! Points are column vectors `(x, y, z, 1)`, so `m * p` applies `m` to `p`
//! and `b * a` means "apply `a`, then `b`".

use std::fmt;
use std::str::FromStr;

use crate::error::MatrixError;

use super::{Matrix4, Point3, Vector3, TOLERANCE};

/// A coordinate axis to rotate around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the unit vector along this axis.
    #[must_use]
    pub fn unit(self) -> Vector3 {
        match self {
            Self::X => Vector3::x(),
            Self::Y => Vector3::y(),
            Self::Z => Vector3::z(),
        }
    }
}

impl FromStr for Axis {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Self::X),
            "y" | "Y" => Ok(Self::Y),
            "z" | "Z" => Ok(Self::Z),
            other => Err(MatrixError::InvalidAxis(other.to_owned())),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// Returns the 4x4 identity matrix.
#[must_use]
pub fn identity() -> Matrix4 {
    Matrix4::identity()
}

/// Builds a scale matrix.
#[must_use]
pub fn scale(sx: f64, sy: f64, sz: f64) -> Matrix4 {
    Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
}

/// Builds a translation matrix.
#[must_use]
pub fn translate(tx: f64, ty: f64, tz: f64) -> Matrix4 {
    Matrix4::new_translation(&Vector3::new(tx, ty, tz))
}

/// Builds a rotation of `theta` radians around a coordinate axis,
/// counter-clockwise when looking down the positive axis.
#[must_use]
pub fn rotate(axis: Axis, theta: f64) -> Matrix4 {
    rotation_matrix(&axis.unit(), theta)
}

/// Builds a 4x4 rotation matrix around a unit axis by an angle (Rodrigues).
#[allow(clippy::many_single_char_names, clippy::suspicious_operation_groupings)]
#[rustfmt::skip]
fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix4 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}

/// Maps a point through a matrix using homogeneous coordinates.
///
/// The result is divided by `w` unless `w` is 1 or too close to zero,
/// which never happens for the affine matrices built in this module.
#[must_use]
pub fn apply(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * point.to_homogeneous();
    let w = v.w;
    if (w - 1.0).abs() > TOLERANCE && w.abs() > TOLERANCE {
        Point3::new(v.x / w, v.y / w, v.z / w)
    } else {
        Point3::new(v.x, v.y, v.z)
    }
}

pub mod matrix;
pub mod transform;

pub use transform::Axis;

/// 2D point type, used for projected screen coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 homogeneous transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Dynamically sized matrix for general products.
pub type DMatrix = nalgebra::DMatrix<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

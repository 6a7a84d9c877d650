mod matrix;
mod vector;

pub use matrix::Mat4;
pub use vector::{cross, Vec2, Vec3, Vec4};

/// 3D vector storage type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Homogeneous 4D vector storage type.
pub type Vector4 = nalgebra::Vector4<f64>;

/// 4x4 transformation matrix storage type.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

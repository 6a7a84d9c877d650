pub mod error;
pub mod math;

pub use error::{Result, ThreedError};
pub use math::{cross, Mat4, Vec2, Vec3, Vec4, TOLERANCE};

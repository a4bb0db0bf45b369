/// 2D point type used for interop.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type used for interop.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Tolerance for unit-length checks.
pub const EPSILON: f64 = f64::EPSILON;

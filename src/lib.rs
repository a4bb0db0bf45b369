pub mod error;
pub mod math;
pub mod vector;

pub use error::{ArgumentError, Result, Vector2dError};
pub use vector::fitting::FitPolicy;
pub use vector::input::{MapKey, VectorInput};
pub use vector::{vector2d, Vector2d};

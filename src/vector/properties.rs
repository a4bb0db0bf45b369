use super::Vector2d;
use crate::math::EPSILON;

impl Vector2d {
    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.squared_length().sqrt()
    }

    /// Length before the square root. Cheaper for comparisons.
    #[must_use]
    pub fn squared_length(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Angle from the positive x axis in radians, in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// `|x / y|`.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        (self.x / self.y).abs()
    }

    /// Whether the length is 1.0 within machine epsilon.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        (self.length() - 1.0).abs() < EPSILON
    }
}

use super::Vector2d;
use crate::math::{Rotation2, Vector2};

impl Vector2d {
    /// Scales the vector to `new_length`, keeping its direction.
    ///
    /// A zero-length vector yields NaN components.
    #[must_use]
    pub fn resize(&self, new_length: f64) -> Self {
        *self * (new_length / self.length())
    }

    /// Returns the unit vector with the same direction.
    #[must_use]
    pub fn normalize(&self) -> Self {
        self.resize(1.0)
    }

    /// Caps the length at `max`. A shorter vector keeps its length.
    #[must_use]
    pub fn truncate(&self, max: f64) -> Self {
        self.resize(max.min(self.length()))
    }

    /// Points the vector the opposite way.
    #[must_use]
    pub fn reverse(&self) -> Self {
        -*self
    }

    /// Rotates 90° counter-clockwise: `(-y, x)`.
    #[must_use]
    pub fn perpendicular(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates counter-clockwise by `angle` radians.
    #[must_use]
    pub fn rotate(&self, angle: f64) -> Self {
        (Rotation2::new(angle) * Vector2::from(*self)).into()
    }

    /// Rounds each component to the nearest integer, half away from zero.
    #[must_use]
    pub fn round(&self) -> Self {
        self.map(f64::round)
    }

    /// Rounds each component to `digits` decimal places. Negative `digits`
    /// round to tens, hundreds, and so on.
    #[must_use]
    pub fn round_to(&self, digits: i32) -> Self {
        let factor = 10_f64.powi(digits.abs());
        if digits >= 0 {
            self.map(|c| (c * factor).round() / factor)
        } else {
            self.map(|c| (c / factor).round() * factor)
        }
    }

    /// Rounds each component up.
    #[must_use]
    pub fn ceil(&self) -> Self {
        self.map(f64::ceil)
    }

    /// Rounds each component down.
    #[must_use]
    pub fn floor(&self) -> Self {
        self.map(f64::floor)
    }

    /// Drops the fractional part of each component.
    #[must_use]
    pub fn trunc(&self) -> Self {
        self.map(f64::trunc)
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y))
    }
}

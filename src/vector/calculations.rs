use super::input::VectorInput;
use super::Vector2d;
use crate::error::Result;

impl Vector2d {
    /// Dot product of two vectors.
    #[must_use]
    pub fn dot(a: Self, b: Self) -> f64 {
        a.x * b.x + a.y * b.y
    }

    /// Cross product (z component of the 3D cross product) of two vectors.
    #[must_use]
    pub fn cross(a: Self, b: Self) -> f64 {
        a.x * b.y - a.y * b.x
    }

    /// Unsigned angle between two vectors in radians, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding drift never leaves the
    /// domain of `acos`. A zero-length operand yields NaN.
    #[must_use]
    pub fn angle_between_vectors(a: Self, b: Self) -> f64 {
        let a = if a.is_normalized() { a } else { a.normalize() };
        let b = if b.is_normalized() { b } else { b.normalize() };
        Self::dot(a, b).clamp(-1.0, 1.0).acos()
    }

    /// Dot product of this vector and `other`.
    #[must_use]
    pub fn dot_product(&self, other: impl Into<Self>) -> f64 {
        Self::dot(*self, other.into())
    }

    /// Cross product of this vector and `other`.
    #[must_use]
    pub fn cross_product(&self, other: impl Into<Self>) -> f64 {
        Self::cross(*self, other.into())
    }

    /// Angle in radians between this vector and `other`.
    #[must_use]
    pub fn angle_between(&self, other: impl Into<Self>) -> f64 {
        Self::angle_between_vectors(*self, other.into())
    }

    /// Distance between the points described by the two vectors.
    #[must_use]
    pub fn distance(&self, other: impl Into<Self>) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Squared distance. Cheaper than [`Vector2d::distance`] for comparisons.
    #[must_use]
    pub fn squared_distance(&self, other: impl Into<Self>) -> f64 {
        let other = other.into();
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// [`Vector2d::dot_product`] with any coercible input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `other` cannot be read as a vector.
    pub fn try_dot_product(&self, other: impl Into<VectorInput>) -> Result<f64> {
        let (other, this) = self.coerce(other)?;
        Ok(Self::dot(this, other))
    }

    /// [`Vector2d::cross_product`] with any coercible input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `other` cannot be read as a vector.
    pub fn try_cross_product(&self, other: impl Into<VectorInput>) -> Result<f64> {
        let (other, this) = self.coerce(other)?;
        Ok(Self::cross(this, other))
    }

    /// [`Vector2d::angle_between`] with any coercible input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `other` cannot be read as a vector.
    pub fn try_angle_between(&self, other: impl Into<VectorInput>) -> Result<f64> {
        let (other, this) = self.coerce(other)?;
        Ok(Self::angle_between_vectors(this, other))
    }

    /// [`Vector2d::distance`] with any coercible input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `other` cannot be read as a vector.
    pub fn try_distance(&self, other: impl Into<VectorInput>) -> Result<f64> {
        let (other, this) = self.coerce(other)?;
        Ok(this.distance(other))
    }

    /// [`Vector2d::squared_distance`] with any coercible input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `other` cannot be read as a vector.
    pub fn try_squared_distance(&self, other: impl Into<VectorInput>) -> Result<f64> {
        let (other, this) = self.coerce(other)?;
        Ok(this.squared_distance(other))
    }
}

use std::ops::{Add, Div, Mul, Neg, Sub};

use super::input::VectorInput;
use super::Vector2d;
use crate::error::Result;

// Component-wise operators. The right-hand side may be anything with an
// infallible conversion into a vector, so a bare `f64` is broadcast to both
// axes. Division by a zero component follows IEEE-754.
macro_rules! component_wise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Into<Vector2d>> $trait<T> for Vector2d {
            type Output = Vector2d;

            fn $method(self, rhs: T) -> Vector2d {
                let rhs = rhs.into();
                Vector2d::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

component_wise!(Add, add, +);
component_wise!(Sub, sub, -);
component_wise!(Mul, mul, *);
component_wise!(Div, div, /);

impl Mul<Vector2d> for f64 {
    type Output = Vector2d;

    fn mul(self, rhs: Vector2d) -> Vector2d {
        rhs * self
    }
}

impl Neg for Vector2d {
    type Output = Vector2d;

    fn neg(self) -> Vector2d {
        Vector2d::new(-self.x, -self.y)
    }
}

impl Vector2d {
    /// Adds any coercible input component-wise.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `other` cannot be read as a vector.
    pub fn try_add(self, other: impl Into<VectorInput>) -> Result<Self> {
        let (other, this) = self.coerce(other)?;
        Ok(this + other)
    }

    /// Subtracts any coercible input component-wise.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `other` cannot be read as a vector.
    pub fn try_sub(self, other: impl Into<VectorInput>) -> Result<Self> {
        let (other, this) = self.coerce(other)?;
        Ok(this - other)
    }

    /// Multiplies by any coercible input component-wise.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `other` cannot be read as a vector.
    pub fn try_mul(self, other: impl Into<VectorInput>) -> Result<Self> {
        let (other, this) = self.coerce(other)?;
        Ok(this * other)
    }

    /// Divides by any coercible input component-wise.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `other` cannot be read as a vector.
    pub fn try_div(self, other: impl Into<VectorInput>) -> Result<Self> {
        let (other, this) = self.coerce(other)?;
        Ok(this / other)
    }
}

pub mod arithmetic;
pub mod calculations;
pub mod fitting;
pub mod input;
pub mod properties;
pub mod transformations;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Vector2dError;
use crate::math::{Point2, Vector2};

/// A two-dimensional vector, point or size (width x height).
///
/// `Vector2d` is an immutable value: every operation returns a new vector.
/// Equality compares both components exactly, without tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2d {
    x: f64,
    y: f64,
}

impl Vector2d {
    /// The vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x component (the width, for sizes).
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y component (the height, for sizes).
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the components as `[x, y]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Returns the components as a `{ "x": x, "y": y }` mapping.
    #[must_use]
    pub fn to_map(self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([("x", self.x), ("y", self.y)])
    }

    /// Renders the vector as `Vector2d(x,y)`.
    #[must_use]
    pub fn inspect(&self) -> String {
        format!("Vector2d({},{})", self.x, self.y)
    }
}

/// Shorthand for [`Vector2d::new`] accepting anything losslessly convertible
/// to `f64`, so integer literals work: `vector2d(150, 100)`.
#[must_use]
pub fn vector2d(x: impl Into<f64>, y: impl Into<f64>) -> Vector2d {
    Vector2d::new(x.into(), y.into())
}

/// Formats as `{x}x{y}`, e.g. `150x100` or `2.5x3`.
impl fmt::Display for Vector2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl FromStr for Vector2d {
    type Err = Vector2dError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        input::parse_dimensions(s).map_err(Into::into)
    }
}

impl From<f64> for Vector2d {
    fn from(value: f64) -> Self {
        Self::new(value, value)
    }
}

impl From<(f64, f64)> for Vector2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2d> for (f64, f64) {
    fn from(v: Vector2d) -> Self {
        (v.x, v.y)
    }
}

impl From<Vector2d> for [f64; 2] {
    fn from(v: Vector2d) -> Self {
        v.to_array()
    }
}

impl From<Vector2> for Vector2d {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2d> for Vector2 {
    fn from(v: Vector2d) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Point2> for Vector2d {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vector2d> for Point2 {
    fn from(v: Vector2d) -> Self {
        Point2::new(v.x, v.y)
    }
}


#[cfg(all(test, feature = "serde"))]
#[allow(clippy::unwrap_used)]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_named_components() {
        let json = serde_json::to_string(&vector2d(2, 3)).unwrap();
        assert_eq!(json, r#"{"x":2.0,"y":3.0}"#);
    }

    #[test]
    fn deserializes_named_components() {
        let v: Vector2d = serde_json::from_str(r#"{"x":1.5,"y":-4.0}"#).unwrap();
        assert_eq!(v, Vector2d::new(1.5, -4.0));
        let back: Vector2d = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        assert_eq!(back, v);
    }
}

use std::collections::BTreeMap;

use tracing::debug;

use super::Vector2d;
use crate::error::{ArgumentError, Result, Vector2dError};

/// A loosely shaped value that can be turned into a [`Vector2d`].
///
/// Each variant has its own resolution rule:
///
/// - `Vector`: taken as-is.
/// - `Number`: used for both components.
/// - `Pair`: two numbers, unpacked positionally. Nested pairs are flattened,
///   so `[[1, 2]]` is the same as `[1, 2]`.
/// - `Named`: components read from the `x` and `y` keys. A symbol key wins
///   over a string key; a missing key reads as `0.0`.
/// - `Text`: a `WxH` string such as `"150x100"`, `"x200"` or `"1.5 x 2"`.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorInput {
    Vector(Vector2d),
    Number(f64),
    Pair(Vec<VectorInput>),
    Named(Vec<(MapKey, VectorInput)>),
    Text(String),
}

/// Key of a [`VectorInput::Named`] entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum MapKey {
    /// Identifier-style key (`x:`).
    Symbol(String),
    /// Plain string key (`"x"`).
    Str(String),
}

impl MapKey {
    /// Creates an identifier-style key.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_owned())
    }

    /// Creates a plain string key.
    #[must_use]
    pub fn string(name: &str) -> Self {
        Self::Str(name.to_owned())
    }
}

impl VectorInput {
    /// Builds a `Named` input from key/value entries.
    pub fn named<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (MapKey, V)>,
        V: Into<VectorInput>,
    {
        Self::Named(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    /// Name of the variant, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Vector(_) => "Vector2d",
            Self::Number(_) => "number",
            Self::Pair(_) => "pair",
            Self::Named(_) => "mapping",
            Self::Text(_) => "string",
        }
    }

    fn as_number(&self, position: &'static str) -> std::result::Result<f64, ArgumentError> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(ArgumentError::NonNumeric {
                position,
                kind: other.kind(),
            }),
        }
    }

    fn resolve(&self) -> std::result::Result<Vector2d, ArgumentError> {
        match self {
            Self::Vector(v) => Ok(*v),
            Self::Number(n) => Ok(Vector2d::new(*n, *n)),
            Self::Pair(items) => {
                let mut flat = Vec::with_capacity(2);
                flatten_into(items, &mut flat);
                match flat.as_slice() {
                    [single] => single.resolve(),
                    [x, y] => resolve_pair(x, y),
                    _ => Err(ArgumentError::WrongArity { len: flat.len() }),
                }
            }
            Self::Named(entries) => Ok(Vector2d::new(
                named_component(entries, "x")?,
                named_component(entries, "y")?,
            )),
            Self::Text(s) => parse_dimensions(s),
        }
    }
}

fn resolve_pair(x: &VectorInput, y: &VectorInput) -> std::result::Result<Vector2d, ArgumentError> {
    Ok(Vector2d::new(x.as_number("x")?, y.as_number("y")?))
}

fn flatten_into<'a>(items: &'a [VectorInput], out: &mut Vec<&'a VectorInput>) {
    for item in items {
        match item {
            VectorInput::Pair(inner) => flatten_into(inner, out),
            other => out.push(other),
        }
    }
}

fn named_component(
    entries: &[(MapKey, VectorInput)],
    axis: &'static str,
) -> std::result::Result<f64, ArgumentError> {
    let find = |symbol: bool| {
        entries.iter().find_map(|(key, value)| match key {
            MapKey::Symbol(name) if symbol && name == axis => Some(value),
            MapKey::Str(name) if !symbol && name == axis => Some(value),
            _ => None,
        })
    };
    let value = find(true).or_else(|| find(false));

    value.map_or(Ok(0.0), |v| v.as_number(axis))
}

/// Parses a `WxH` string. Whitespace around either side is ignored; an
/// empty side or a bare `.` reads as `0.0`.
pub(crate) fn parse_dimensions(s: &str) -> std::result::Result<Vector2d, ArgumentError> {
    let invalid = || ArgumentError::InvalidString(s.to_owned());
    let (width, height) = s.split_once('x').ok_or_else(invalid)?;
    let x = parse_side(width).ok_or_else(invalid)?;
    let y = parse_side(height).ok_or_else(invalid)?;
    Ok(Vector2d::new(x, y))
}

fn parse_side(side: &str) -> Option<f64> {
    let side = side.trim();
    if side.is_empty() {
        return Some(0.0);
    }
    let digits = side.strip_prefix(['-', '+']).unwrap_or(side);
    if digits == "." {
        return Some(0.0);
    }
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    side.parse().ok()
}

impl Vector2d {
    /// Builds a vector from any supported input shape.
    ///
    /// ```
    /// use vector2d::{vector2d, Vector2d};
    ///
    /// assert_eq!(Vector2d::parse("150x100").unwrap(), vector2d(150, 100));
    /// assert_eq!(Vector2d::parse(2.0).unwrap(), vector2d(2, 2));
    /// assert_eq!(Vector2d::parse([1.0, 2.0]).unwrap(), vector2d(1, 2));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Vector2dError::InvalidArgument`] if the string does not match
    /// the `WxH` pattern, a coordinate slot is not numeric, or a pair does not
    /// hold exactly two coordinates.
    pub fn parse(input: impl Into<VectorInput>) -> Result<Self> {
        let input = input.into();
        input.resolve().map_err(|err| {
            debug!(kind = input.kind(), %err, "rejected vector input");
            err.into()
        })
    }

    /// Builds a vector from two positional inputs, each of which must be a
    /// number.
    ///
    /// # Errors
    ///
    /// Returns [`Vector2dError::InvalidArgument`] if either input is not a
    /// number.
    pub fn parse_pair(x: impl Into<VectorInput>, y: impl Into<VectorInput>) -> Result<Self> {
        resolve_pair(&x.into(), &y.into()).map_err(|err| {
            debug!(%err, "rejected positional vector input");
            err.into()
        })
    }

    /// Interprets `other` as a vector for use in a binary operation.
    ///
    /// Returns `(other, self)`.
    ///
    /// # Errors
    ///
    /// Returns [`Vector2dError::Coercion`] if `other` cannot be read as a
    /// vector.
    pub fn coerce(&self, other: impl Into<VectorInput>) -> Result<(Self, Self)> {
        let other = other.into();
        match other.resolve() {
            Ok(v) => Ok((v, *self)),
            Err(source) => {
                debug!(kind = other.kind(), %source, "coercion failed");
                Err(Vector2dError::Coercion {
                    kind: other.kind(),
                    source,
                })
            }
        }
    }
}

impl From<Vector2d> for VectorInput {
    fn from(v: Vector2d) -> Self {
        Self::Vector(v)
    }
}

impl From<&Vector2d> for VectorInput {
    fn from(v: &Vector2d) -> Self {
        Self::Vector(*v)
    }
}

impl From<f64> for VectorInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for VectorInput {
    fn from(n: f32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i32> for VectorInput {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<u32> for VectorInput {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl From<(f64, f64)> for VectorInput {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Pair(vec![Self::Number(x), Self::Number(y)])
    }
}

impl From<[f64; 2]> for VectorInput {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::Pair(vec![Self::Number(x), Self::Number(y)])
    }
}

impl From<Vec<VectorInput>> for VectorInput {
    fn from(items: Vec<VectorInput>) -> Self {
        Self::Pair(items)
    }
}

impl From<&str> for VectorInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for VectorInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Reads the output of [`Vector2d::to_map`] back, with symbol keys.
impl From<BTreeMap<&str, f64>> for VectorInput {
    fn from(map: BTreeMap<&str, f64>) -> Self {
        Self::named(map.into_iter().map(|(k, v)| (MapKey::symbol(k), v)))
    }
}

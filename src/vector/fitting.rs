use std::fmt;
use std::str::FromStr;

use tracing::trace;

use super::input::VectorInput;
use super::Vector2d;
use crate::error::{ArgumentError, Result};

impl Vector2d {
    /// Scales the vector, keeping its aspect ratio, so it fits inside `bound`
    /// and touches it on at least one axis.
    ///
    /// An axis of `bound` that is zero is disregarded, so `"x100"` means "100
    /// high, any width".
    ///
    /// ```
    /// use vector2d::vector2d;
    ///
    /// let image = vector2d(320, 200);
    /// assert_eq!(image.fit("150x50").unwrap(), vector2d(80, 50));
    /// assert_eq!(image.fit("x100").unwrap(), vector2d(160, 100));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `bound` cannot be read as a vector.
    pub fn fit(&self, bound: impl Into<VectorInput>) -> Result<Self> {
        let (bound, this) = self.coerce(bound)?;
        Ok(this.fit_within(bound))
    }

    /// Alias of [`Vector2d::fit`].
    ///
    /// # Errors
    ///
    /// See [`Vector2d::fit`].
    pub fn constrain_both(&self, bound: impl Into<VectorInput>) -> Result<Self> {
        self.fit(bound)
    }

    /// Scales the vector, keeping its aspect ratio, so it matches or exceeds
    /// `bound` on at least one axis while covering it on the other.
    ///
    /// When either ratio is not positive this behaves like [`Vector2d::fit`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `bound` cannot be read as a vector.
    pub fn fit_either(&self, bound: impl Into<VectorInput>) -> Result<Self> {
        let (bound, this) = self.coerce(bound)?;
        Ok(this.cover(bound))
    }

    /// Alias of [`Vector2d::fit_either`].
    ///
    /// # Errors
    ///
    /// See [`Vector2d::fit_either`].
    pub fn constrain_one(&self, bound: impl Into<VectorInput>) -> Result<Self> {
        self.fit_either(bound)
    }

    /// Shrinks `other` to fit inside this vector if it is larger on either
    /// axis. Otherwise returns `other` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `other` cannot be read as a vector.
    pub fn contain(&self, other: impl Into<VectorInput>) -> Result<Self> {
        let (other, this) = self.coerce(other)?;
        Ok(this.shrink_to_contain(other))
    }

    fn fit_within(self, bound: Self) -> Self {
        let scale = bound / self;
        let factor = if scale.y == 0.0 || (scale.x > 0.0 && scale.x < scale.y) {
            scale.x
        } else {
            scale.y
        };
        trace!(size = %self, %bound, %scale, factor, "fit");
        self * factor
    }

    fn cover(self, bound: Self) -> Self {
        let scale = bound / self;
        if scale.x > 0.0 && scale.y > 0.0 {
            let factor = scale.x.max(scale.y);
            trace!(size = %self, %bound, %scale, factor, "fit_either");
            self * factor
        } else {
            self.fit_within(bound)
        }
    }

    fn shrink_to_contain(self, other: Self) -> Self {
        if other.x > self.x || other.y > self.y {
            other.fit_within(self)
        } else {
            other
        }
    }
}

/// A resizing policy, applied to a `size` and a `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitPolicy {
    /// Scale up or down to fit inside the target ([`Vector2d::fit`]).
    #[default]
    Fit,
    /// Scale up or down to cover the target ([`Vector2d::fit_either`]).
    FitEither,
    /// Scale down only, when the size exceeds the target
    /// ([`Vector2d::contain`] called on the target).
    Contain,
}

impl FitPolicy {
    /// Resizes `size` against `target` according to the policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Vector2dError::Coercion`] if `target` cannot be read as a
    /// vector.
    pub fn apply(self, size: Vector2d, target: impl Into<VectorInput>) -> Result<Vector2d> {
        match self {
            Self::Fit => size.fit(target),
            Self::FitEither => size.fit_either(target),
            Self::Contain => {
                let (target, size) = size.coerce(target)?;
                Ok(target.shrink_to_contain(size))
            }
        }
    }
}

impl fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fit => "fit",
            Self::FitEither => "fit_either",
            Self::Contain => "contain",
        })
    }
}

impl FromStr for FitPolicy {
    type Err = ArgumentError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "fit" | "constrain_both" => Ok(Self::Fit),
            "fit_either" | "constrain_one" | "cover" => Ok(Self::FitEither),
            "contain" => Ok(Self::Contain),
            other => Err(ArgumentError::UnknownPolicy(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::Vector2dError;
    use crate::vector2d;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    const ORIGINAL: Vector2d = Vector2d::new(300.0, 300.0);

    #[test]
    fn fit_scaling_by_height() {
        init_tracing();
        assert_eq!(ORIGINAL.fit(vector2d(200, 150)).unwrap(), vector2d(150, 150));
    }

    #[test]
    fn fit_scaling_by_width() {
        assert_eq!(ORIGINAL.fit(vector2d(150, 200)).unwrap(), vector2d(150, 150));
    }

    #[test]
    fn fit_scales_up_and_down() {
        let v = vector2d(20, 10);
        assert_eq!(v.fit(vector2d(10, 10)).unwrap(), vector2d(10, 5));
        assert_eq!(v.fit(vector2d(20, 20)).unwrap(), vector2d(20, 10));
        assert_eq!(v.fit(vector2d(40, 40)).unwrap(), vector2d(40, 20));
    }

    #[test]
    fn fit_accepts_strings_and_numbers() {
        let image = vector2d(320, 200);
        assert_eq!(image.fit("150x50").unwrap(), vector2d(80, 50));
        assert_eq!(image.fit(100).unwrap().round(), vector2d(100, 63));
        assert_eq!(image.constrain_both("150x50").unwrap(), vector2d(80, 50));
    }

    #[test]
    fn fit_ignores_zero_axis() {
        let image = vector2d(320, 200);
        assert_eq!(image.fit("x100").unwrap(), vector2d(160, 100));
        assert_eq!(image.fit("160x").unwrap(), vector2d(160, 100));
    }

    #[test]
    fn fit_stays_within_bound() {
        init_tracing();
        let sizes = [vector2d(320, 200), vector2d(17, 900), Vector2d::new(0.5, 0.75)];
        let bounds = [vector2d(100, 100), vector2d(640, 10), Vector2d::new(3.3, 1000.0)];
        for size in sizes {
            for bound in bounds {
                let r = size.fit(bound).unwrap();
                let tol = 1e-9 * bound.x().max(bound.y());
                assert!(r.x() <= bound.x() + tol, "{size} fit {bound} = {r}");
                assert!(r.y() <= bound.y() + tol, "{size} fit {bound} = {r}");
                let touches_x = (r.x() - bound.x()).abs() <= tol;
                let touches_y = (r.y() - bound.y()).abs() <= tol;
                assert!(touches_x || touches_y, "{size} fit {bound} = {r}");
                assert_abs_diff_eq!(r.aspect_ratio(), size.aspect_ratio(), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn fit_either_when_width_is_largest() {
        assert_eq!(ORIGINAL.fit_either(vector2d(200, 150)).unwrap(), vector2d(200, 200));
    }

    #[test]
    fn fit_either_when_height_is_largest() {
        assert_eq!(ORIGINAL.fit_either(vector2d(150, 200)).unwrap(), vector2d(200, 200));
    }

    #[test]
    fn fit_either_covers_constraint() {
        let constraint = vector2d(5, 5);
        assert_eq!(vector2d(20, 10).fit_either(constraint).unwrap(), vector2d(10, 5));
        assert_eq!(vector2d(10, 20).fit_either(constraint).unwrap(), vector2d(5, 10));
        assert_eq!(vector2d(320, 200).constrain_one((100.0, 100.0)).unwrap(), vector2d(160, 100));
    }

    #[test]
    fn fit_either_falls_back_to_fit_on_zero_axis() {
        let image = vector2d(320, 200);
        assert_eq!(image.fit_either("x100").unwrap(), image.fit("x100").unwrap());
        assert_eq!(image.fit_either("160x0").unwrap(), vector2d(160, 100));
    }

    #[test]
    fn contain_when_smaller() {
        assert_eq!(ORIGINAL.contain(vector2d(150, 100)).unwrap(), vector2d(150, 100));
    }

    #[test]
    fn contain_when_wider() {
        assert_eq!(ORIGINAL.contain(vector2d(400, 300)).unwrap(), vector2d(300, 225));
    }

    #[test]
    fn contain_when_higher() {
        assert_eq!(ORIGINAL.contain(vector2d(300, 400)).unwrap(), vector2d(225, 300));
    }

    #[test]
    fn fitting_reports_coercion_errors() {
        let err = ORIGINAL.fit("big").unwrap_err();
        assert!(matches!(err, Vector2dError::Coercion { kind: "string", .. }));
        assert!(ORIGINAL.fit_either("big").is_err());
        assert!(ORIGINAL.contain("big").is_err());
    }

    #[test]
    fn policies() {
        let size = vector2d(400, 300);
        assert_eq!(FitPolicy::Fit.apply(size, "600x600").unwrap(), vector2d(600, 450));
        assert_eq!(FitPolicy::FitEither.apply(size, "600x600").unwrap(), vector2d(800, 600));
        assert_eq!(FitPolicy::Contain.apply(size, "600x600").unwrap(), size);
        assert_eq!(FitPolicy::Contain.apply(size, "300x300").unwrap(), vector2d(300, 225));
        assert!(matches!(
            FitPolicy::Contain.apply(size, "huge").unwrap_err(),
            Vector2dError::Coercion { kind: "string", .. }
        ));
    }

    #[test]
    fn policy_names() {
        assert_eq!("fit".parse::<FitPolicy>().unwrap(), FitPolicy::Fit);
        assert_eq!("cover".parse::<FitPolicy>().unwrap(), FitPolicy::FitEither);
        assert_eq!("constrain_one".parse::<FitPolicy>().unwrap(), FitPolicy::FitEither);
        assert_eq!(" contain ".parse::<FitPolicy>().unwrap(), FitPolicy::Contain);
        assert_eq!(
            "stretch".parse::<FitPolicy>().unwrap_err(),
            ArgumentError::UnknownPolicy("stretch".to_owned())
        );
        for policy in [FitPolicy::Fit, FitPolicy::FitEither, FitPolicy::Contain] {
            assert_eq!(policy.to_string().parse::<FitPolicy>().unwrap(), policy);
        }
        assert_eq!(FitPolicy::default(), FitPolicy::Fit);
    }
}

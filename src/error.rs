use thiserror::Error;

/// Top-level error type for vector construction and coercion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Vector2dError {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    #[error("Vector2d can't be coerced from {kind}: {source}")]
    Coercion {
        kind: &'static str,
        source: ArgumentError,
    },
}

/// Errors raised while turning an input into a vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("not a valid string input: {0:?}")]
    InvalidString(String),

    #[error("{position} coordinate is not numeric: got {kind}")]
    NonNumeric {
        position: &'static str,
        kind: &'static str,
    },

    #[error("unknown fit policy: {0:?}")]
    UnknownPolicy(String),

    #[error("expected a pair of two coordinates, got {len} element(s)")]
    WrongArity { len: usize },
}

/// Convenience type alias for results using [`Vector2dError`].
pub type Result<T> = std::result::Result<T, Vector2dError>;

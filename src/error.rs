use thiserror::Error;

/// Top-level error type for the triangle core.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by geometric computations and construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("degenerate segment: end points coincide")]
    DegenerateSegment,

    #[error("display dimensions must be positive and finite, got {width} x {height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f32 },

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
}

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

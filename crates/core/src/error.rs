use thiserror::Error;

/// A point or segment was requested outside the dial's valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("radius must not be negative: {0}")]
    NegativeRadius(f64),
    #[error("angle {0} is outside [0, 2π]")]
    AngleOutOfRange(f64),
    #[error("segment ends at radius {end} before it begins at {begin}")]
    InvertedSegment { begin: f64, end: f64 },
}

/// A decomposed time component fell outside its range. Only a broken
/// decomposition can produce these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeComponentError {
    #[error("seconds out of range 0..=59: {0}")]
    Seconds(u32),
    #[error("minutes out of range [0, 60): {0}")]
    Minutes(f64),
    #[error("hours out of range [0, 24): {0}")]
    Hours(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenderError {
    #[error("geometry: {0}")]
    Geometry(#[from] GeometryError),
    #[error("time: {0}")]
    Time(#[from] TimeComponentError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("{hand} hand spans {begin}..{end}; expected 0 <= begin <= end <= 1")]
    InvalidHand {
        hand: &'static str,
        begin: f64,
        end: f64,
    },
    #[error("tick radii must satisfy 0 <= begin <= end <= 1 and label radius in [0, 1]")]
    InvalidTicks,
    #[error("{0} must be positive and finite")]
    NonPositive(&'static str),
}

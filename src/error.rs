use thiserror::Error;

/// Errors raised when constructing agents or loading scenarios.
#[derive(Debug, Error)]
pub enum Error {
    /// An agent's radius was negative or not a finite number.
    #[error("invalid radius {0}: must be finite and non-negative")]
    InvalidRadius(f64),
    /// A path waypoint had a NaN or infinite coordinate.
    #[error("waypoint {index} has a non-finite coordinate")]
    NonFiniteWaypoint { index: usize },
    #[error("failed to parse scenario: {0}")]
    Scenario(#[from] serde_json::Error),
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

/// Error types for the bimeans library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupingError {
    /// Exactly two seed centers are required
    #[error("Expected 2 seed centers, got {0}")]
    InvalidSeedCount(usize),

    /// Dimension mismatch between reference and query points
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),

    /// A centroid was requested for a set too small to have a meaningful mean
    #[error("Cannot compute a centroid from {0} point(s), at least 2 are required")]
    UndersizedCluster(usize),

    /// Seeding bound for random centers is unusable
    #[error("Invalid seeding bound: {0}")]
    InvalidBound(String),
}

use crate::algorithm::iterative_group;
use crate::config::GroupingConfig;
use crate::error::GroupingError;
use crate::group::GroupResult;
use crate::point::{points_to_array, Point};

/// Two-center point grouper.
///
/// Stateless across calls: the caller supplies the points and both seed
/// centers every time, and carries the returned centers forward itself.
///
/// # Example
///
/// ```
/// use bimeans_rs::{Point, PointGrouper};
///
/// let points = [
///     Point::new(5.0, 5.0),
///     Point::new(5.0, 6.0),
///     Point::new(5.0, 7.0),
/// ];
/// let seeds = [Point::new(5.0, 6.0), Point::new(100.0, 100.0)];
///
/// let grouper = PointGrouper::new();
/// let result = grouper.group_points(&points, &seeds).unwrap();
///
/// assert_eq!(result.assignments(), &[0, 0, 0]);
/// assert!(result.group1_is_default());
/// assert_eq!(result.centers()[1], Point::new(100.0, 100.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointGrouper {
    config: GroupingConfig,
}

impl PointGrouper {
    /// Create a grouper with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grouper with a custom configuration
    pub fn with_config(config: GroupingConfig) -> Self {
        Self { config }
    }

    /// Group `points` around two centers, starting from `seeds`.
    ///
    /// Always runs the configured number of rounds. The same inputs give
    /// bit-identical results.
    ///
    /// # Errors
    ///
    /// Returns [`GroupingError::InvalidSeedCount`] unless exactly two seeds are
    /// given.
    pub fn group_points(
        &self,
        points: &[Point],
        seeds: &[Point],
    ) -> Result<GroupResult, GroupingError> {
        let seeds: [Point; 2] = seeds
            .try_into()
            .map_err(|_| GroupingError::InvalidSeedCount(seeds.len()))?;

        let data = points_to_array(points);
        let result = iterative_group(&data.view(), &seeds, &self.config)?;

        Ok(GroupResult::new(result.assignments, result.centers))
    }

    /// Number of refinement rounds per call
    pub fn rounds(&self) -> usize {
        self.config.rounds
    }

    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }
}

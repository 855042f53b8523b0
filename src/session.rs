//! Caller-side driver that keeps points and carries centers between calls.
//!
//! The grouping engine is stateless. Interactive callers add points one at a
//! time, ask for a regroup, and reuse the previous result's centers as the next
//! seeds; this module holds that state.

use crate::config::SessionConfig;
use crate::error::GroupingError;
use crate::group::{GroupResult, MIN_GROUP_SIZE};
use crate::grouper::PointGrouper;
use crate::point::Point;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Result of asking a session to group its points
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Too few points, or both resulting groups were default
    NeedMorePoints,
    /// At least one group is meaningful; its centers are now the session's seeds
    Grouped(GroupResult),
}

/// Result of adding a point to a session
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added,
    /// Capacity reached, the point was not stored
    MaxReached,
    /// Stored and regrouped because auto-grouping is on
    Grouped(SessionOutcome),
}

pub struct GroupingSession {
    config: SessionConfig,
    grouper: PointGrouper,
    points: Vec<Point>,
    centers: Option<[Point; 2]>,
    rng: ChaCha8Rng,
}

impl GroupingSession {
    /// # Errors
    ///
    /// Returns [`GroupingError::InvalidBound`] if `config.bound` is negative or
    /// not finite.
    pub fn new(config: SessionConfig) -> Result<Self, GroupingError> {
        if !config.bound.is_finite() || config.bound < 0.0 {
            return Err(GroupingError::InvalidBound(format!(
                "bound must be finite and non-negative, got {}",
                config.bound
            )));
        }

        Ok(Self {
            grouper: PointGrouper::with_config(config.grouping.clone()),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            points: Vec::new(),
            centers: None,
            config,
        })
    }

    /// Store a point, regrouping afterwards when auto-grouping is on
    pub fn add_point(&mut self, point: Point) -> Result<AddOutcome, GroupingError> {
        if self.points.len() >= self.config.max_points {
            return Ok(AddOutcome::MaxReached);
        }
        self.points.push(point);

        if self.config.auto_group {
            return Ok(AddOutcome::Grouped(self.group()?));
        }
        Ok(AddOutcome::Added)
    }

    /// Group the stored points.
    ///
    /// Seeds are drawn at random the first time, then taken from the last
    /// result that had at least one non-default group.
    pub fn group(&mut self) -> Result<SessionOutcome, GroupingError> {
        if self.points.len() < MIN_GROUP_SIZE {
            return Ok(SessionOutcome::NeedMorePoints);
        }

        let seeds = match self.centers {
            Some(centers) => centers,
            None => {
                let seeds = [
                    Point::random_seed(self.config.bound, &mut self.rng),
                    Point::random_seed(self.config.bound, &mut self.rng),
                ];
                self.centers = Some(seeds);
                seeds
            }
        };

        let result = self.grouper.group_points(&self.points, &seeds)?;
        if result.is_fully_default() {
            return Ok(SessionOutcome::NeedMorePoints);
        }

        self.centers = Some(result.centers());
        if self.config.grouping.verbosity.info_enabled() {
            info!(
                "Grouped {} points: {} in group 0, {} in group 1",
                self.points.len(),
                result.member_count(0),
                result.member_count(1)
            );
        }
        Ok(SessionOutcome::Grouped(result))
    }

    /// Drop all points and carried centers
    pub fn reset(&mut self) {
        self.points.clear();
        self.centers = None;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Seeds for the next grouping call, if any have been chosen
    pub fn centers(&self) -> Option<[Point; 2]> {
        self.centers
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= self.config.max_points
    }

    pub fn set_auto_group(&mut self, auto_group: bool) {
        self.config.auto_group = auto_group;
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

use crate::centroid::centroid;
use crate::config::{Backend, GroupingConfig};
use crate::distance::{nearest_centers, pairwise_distances, pairwise_distances_parallel};
use crate::error::GroupingError;
use crate::group::MIN_GROUP_SIZE;
use crate::point::{points_to_array, Point};
use log::{info, trace};
use ndarray::{ArrayView2, Axis};
use std::time::Instant;

/// How a group's center was produced in one round
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CenterUpdate {
    /// Mean of the group's members
    Recomputed(Point),
    /// Too few members; the center the group entered the round with
    CarriedForward(Point),
}

impl CenterUpdate {
    pub fn point(&self) -> Point {
        match *self {
            CenterUpdate::Recomputed(p) | CenterUpdate::CarriedForward(p) => p,
        }
    }

    pub fn is_recomputed(&self) -> bool {
        matches!(self, CenterUpdate::Recomputed(_))
    }
}

/// State leaving a single refinement round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub assignments: Vec<usize>,
    pub updates: [CenterUpdate; 2],
}

impl RoundOutcome {
    pub fn centers(&self) -> [Point; 2] {
        [self.updates[0].point(), self.updates[1].point()]
    }
}

/// Result of the full refinement loop
#[derive(Debug, Clone, PartialEq)]
pub struct RefinementResult {
    pub assignments: Vec<usize>,
    pub centers: [Point; 2],
    pub rounds_run: usize,
    /// Per-group outcome of the last round, `None` if no round ran
    pub last_updates: Option<[CenterUpdate; 2]>,
}

/// Run one assign-then-recenter round
///
/// All intermediate buffers (distance matrix, membership lists, gathered member
/// rows) are owned by this call and dropped before it returns. Only the new
/// assignments and the two center outcomes leave the round.
pub fn refine_round(
    points: &ArrayView2<f64>,
    centers: &[Point; 2],
    config: &GroupingConfig,
    round: usize,
) -> Result<RoundOutcome, GroupingError> {
    let assignments = {
        let center_rows = points_to_array(centers);
        let distances = match config.backend {
            Backend::Serial => pairwise_distances(&center_rows.view(), points)?,
            Backend::Parallel => pairwise_distances_parallel(&center_rows.view(), points)?,
        };
        if config.verbosity.trace_enabled() {
            trace!("Distances, round {}:\n{}", round, distances);
        }
        nearest_centers(&distances.view())
    };

    let assignments = assignments.to_vec();
    let updates = [
        recenter(points, &assignments, 0, centers[0], config, round)?,
        recenter(points, &assignments, 1, centers[1], config, round)?,
    ];

    Ok(RoundOutcome {
        assignments,
        updates,
    })
}

/// Recompute one group's center, or carry `previous` forward if the group is undersized
fn recenter(
    points: &ArrayView2<f64>,
    assignments: &[usize],
    group: usize,
    previous: Point,
    config: &GroupingConfig,
    round: usize,
) -> Result<CenterUpdate, GroupingError> {
    let members: Vec<usize> = assignments
        .iter()
        .enumerate()
        .filter(|(_, &a)| a == group)
        .map(|(i, _)| i)
        .collect();

    if config.verbosity.trace_enabled() {
        trace!(
            "Group membership for group {}, round {}: {:?}",
            group,
            round,
            members
        );
    }

    if members.len() < MIN_GROUP_SIZE {
        if config.verbosity.info_enabled() {
            info!(
                "Group {} cannot be grouped ({} member(s)), keeping center {}",
                group,
                members.len(),
                previous
            );
        }
        return Ok(CenterUpdate::CarriedForward(previous));
    }

    let member_points = points.select(Axis(0), &members);
    let mean = centroid(&member_points.view())?;
    let center = Point::from_row(&mean.view()).ok_or_else(|| {
        GroupingError::InvalidDimensions(format!(
            "expected 2 coordinates, centroid has {}",
            mean.len()
        ))
    })?;

    if config.verbosity.info_enabled() {
        info!(
            "Group {} can be grouped ({} members), new center {}",
            group,
            members.len(),
            center
        );
    }

    Ok(CenterUpdate::Recomputed(center))
}

/// Run exactly `config.rounds` refinement rounds starting from `seeds`
///
/// There is no convergence check. With zero rounds, or fewer than
/// [`MIN_GROUP_SIZE`] points, no round runs: every point is assigned to group 0
/// and the seeds are returned unchanged.
///
/// # Arguments
/// * `points` - Points to group (n, 2)
/// * `seeds` - Centers entering the first round
/// * `config` - Round count, verbosity and backend
pub fn iterative_group(
    points: &ArrayView2<f64>,
    seeds: &[Point; 2],
    config: &GroupingConfig,
) -> Result<RefinementResult, GroupingError> {
    let n_points = points.nrows();

    if points.ncols() != 2 {
        return Err(GroupingError::InvalidDimensions(format!(
            "expected points with 2 coordinates, got {}",
            points.ncols()
        )));
    }

    if n_points < MIN_GROUP_SIZE || config.rounds == 0 {
        if config.verbosity.info_enabled() {
            info!(
                "Skipping refinement: {} point(s), {} round(s)",
                n_points, config.rounds
            );
        }
        return Ok(RefinementResult {
            assignments: vec![0; n_points],
            centers: *seeds,
            rounds_run: 0,
            last_updates: None,
        });
    }

    if config.verbosity.info_enabled() {
        info!(
            "Grouping {} points over {} rounds, seeds {} and {}",
            n_points, config.rounds, seeds[0], seeds[1]
        );
    }

    let mut centers = *seeds;
    let mut assignments = vec![0; n_points];
    let mut last_updates = None;

    for round in 0..config.rounds {
        let round_start = Instant::now();

        let outcome = refine_round(points, &centers, config, round)?;
        centers = outcome.centers();
        last_updates = Some(outcome.updates);
        assignments = outcome.assignments;

        if config.verbosity.info_enabled() {
            info!(
                "Round {}/{}: centers {} and {}, time = {:.6}s",
                round + 1,
                config.rounds,
                centers[0],
                centers[1],
                round_start.elapsed().as_secs_f64()
            );
        }
    }

    Ok(RefinementResult {
        assignments,
        centers,
        rounds_run: config.rounds,
        last_updates,
    })
}

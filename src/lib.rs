//! # bimeans-rs
//!
//! Fixed-round two-centroid k-means for 2-D points, built on ndarray.
//!
//! ## Features
//!
//! - **Fixed refinement rounds**: every call runs exactly the configured number of
//!   assign-then-recenter rounds, with no convergence short-circuit
//! - **Deterministic ties**: a point equidistant from both centers joins group 0
//! - **Undersized groups keep their center**: a group with fewer than two members
//!   carries its previous center forward and is reported as default
//! - **Optional parallel distance step**: select [`Backend::Parallel`] to compute the
//!   distance matrix on the rayon pool
//!
//! ## Example
//!
//! ```rust
//! use bimeans_rs::{GroupingConfig, Point, PointGrouper};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(9.0, 9.0),
//!     Point::new(10.0, 9.0),
//! ];
//! let seeds = [Point::new(2.0, 2.0), Point::new(8.0, 8.0)];
//!
//! let grouper = PointGrouper::with_config(GroupingConfig::new(5));
//! let result = grouper.group_points(&points, &seeds).unwrap();
//!
//! assert_eq!(result.assignments(), &[0, 0, 1, 1]);
//! assert_eq!(result.centers()[0], Point::new(0.5, 0.0));
//! assert!(!result.group0_is_default());
//! ```
//!
//! ## Interactive use
//!
//! [`GroupingSession`] stores points, seeds centers at random on first use and
//! carries each result's centers into the next call:
//!
//! ```rust
//! use bimeans_rs::{GroupingSession, Point, SessionConfig, SessionOutcome};
//!
//! let mut session = GroupingSession::new(SessionConfig::new(100.0)).unwrap();
//! session.add_point(Point::new(10.0, 10.0)).unwrap();
//! assert_eq!(session.group().unwrap(), SessionOutcome::NeedMorePoints);
//! ```

mod algorithm;
mod centroid;
mod config;
mod distance;
mod error;
mod group;
mod grouper;
mod point;
mod session;

pub use algorithm::{iterative_group, refine_round, CenterUpdate, RefinementResult, RoundOutcome};
pub use centroid::centroid;
pub use config::{Backend, GroupingConfig, SessionConfig, Verbosity, DEFAULT_ROUNDS};
pub use distance::{nearest_centers, pairwise_distances, pairwise_distances_parallel};
pub use error::GroupingError;
pub use group::{GroupResult, MIN_GROUP_SIZE};
pub use grouper::PointGrouper;
pub use point::{points_to_array, Point};
pub use session::{AddOutcome, GroupingSession, SessionOutcome};

/// Number of refinement rounds used when none is configured
pub const DEFAULT_ROUNDS: usize = 10;

/// How much the engine reports through the `log` facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Nothing is logged
    #[default]
    Quiet,
    /// Per-call and per-round summaries at `info` level
    Info,
    /// Summaries plus distance matrices and memberships at `trace` level
    Trace,
}

impl Verbosity {
    pub fn info_enabled(self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    pub fn trace_enabled(self) -> bool {
        matches!(self, Verbosity::Trace)
    }
}

/// Compute backend used for the distance step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Single-threaded scan
    #[default]
    Serial,
    /// Rows of the distance matrix are computed on the rayon pool
    Parallel,
}

/// Configuration for the grouping engine
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingConfig {
    /// Number of refinement rounds. Every call runs exactly this many;
    /// there is no early exit on stable assignments.
    pub rounds: usize,

    /// Logging verbosity
    pub verbosity: Verbosity,

    /// Distance backend
    pub backend: Backend,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            verbosity: Verbosity::Quiet,
            backend: Backend::Serial,
        }
    }
}

impl GroupingConfig {
    /// Create a new configuration with the specified number of rounds
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            ..Default::default()
        }
    }

    /// Set the number of refinement rounds
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Set the logging verbosity
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set the distance backend
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }
}

/// Configuration for a [`GroupingSession`](crate::GroupingSession)
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Upper bound of both coordinates of randomly seeded centers
    pub bound: f64,

    /// Maximum number of stored points. A point is rejected once this many
    /// are stored; the interactive original accepted one more (it compared
    /// the count with `>` against its canvas height).
    pub max_points: usize,

    /// Regroup after every accepted point
    pub auto_group: bool,

    /// Seed for the random center generator
    pub seed: u64,

    /// Engine configuration used for every grouping call
    pub grouping: GroupingConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bound: 500.0,
            max_points: 500,
            auto_group: false,
            seed: 0,
            grouping: GroupingConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a session configuration seeding centers within `[0, bound]`
    pub fn new(bound: f64) -> Self {
        Self {
            bound,
            ..Default::default()
        }
    }

    /// Set the point capacity
    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Set auto-grouping
    pub fn with_auto_group(mut self, auto_group: bool) -> Self {
        self.auto_group = auto_group;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the engine configuration
    pub fn with_grouping(mut self, grouping: GroupingConfig) -> Self {
        self.grouping = grouping;
        self
    }
}

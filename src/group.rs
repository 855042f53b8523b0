use crate::point::Point;

/// Smallest membership for which a group gets a freshly computed center.
///
/// The same threshold decides whether a group counts as default in a
/// [`GroupResult`].
pub const MIN_GROUP_SIZE: usize = 2;

/// Outcome of one grouping call: per-point assignments and the two final centers
#[derive(Debug, Clone, PartialEq)]
pub struct GroupResult {
    assignments: Vec<usize>,
    centers: [Point; 2],
}

impl GroupResult {
    pub fn new(assignments: Vec<usize>, centers: [Point; 2]) -> Self {
        Self {
            assignments,
            centers,
        }
    }

    /// Group index (0 or 1) of each input point, in input order
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    pub fn centers(&self) -> [Point; 2] {
        self.centers
    }

    pub fn center(&self, group: usize) -> Option<Point> {
        self.centers.get(group).copied()
    }

    /// Number of points assigned to `group`
    pub fn member_count(&self, group: usize) -> usize {
        self.assignments.iter().filter(|&&a| a == group).count()
    }

    /// True when `group` ended with fewer than [`MIN_GROUP_SIZE`] members.
    ///
    /// Such a group's center is the one it entered the last round with, and
    /// callers should not present it as a meaningful cluster.
    pub fn is_default(&self, group: usize) -> bool {
        self.member_count(group) < MIN_GROUP_SIZE
    }

    pub fn group0_is_default(&self) -> bool {
        self.is_default(0)
    }

    pub fn group1_is_default(&self) -> bool {
        self.is_default(1)
    }

    /// Both groups are default; nothing worth carrying forward
    pub fn is_fully_default(&self) -> bool {
        self.group0_is_default() && self.group1_is_default()
    }

    pub fn into_parts(self) -> (Vec<usize>, [Point; 2]) {
        (self.assignments, self.centers)
    }
}

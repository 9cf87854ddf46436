use crate::NearMiss;

/// Indicates how the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every candidate on the lattice was evaluated.
    Complete,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// Stopped early because the cancel token was triggered.
    Cancelled,
}

/// The result of a near-miss search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the search terminated.
    pub status: Status,

    /// The overall champion, or `None` if the search stopped before any
    /// candidate was evaluated.
    pub best: Option<NearMiss>,

    /// Number of candidates fully evaluated.
    pub evaluated: u64,
}

impl Solution {
    /// Returns true if the whole lattice was scanned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }
}

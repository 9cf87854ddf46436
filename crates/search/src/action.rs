/// Actions an observer can take during a near-miss search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop scanning and return the champion found so far.
    ///
    /// The candidate that triggered the event has already been evaluated and
    /// counts toward the champion.
    StopEarly,
}

use fermat_core::Observer;

use crate::traits::CanStopEarly;

/// Stops the search once a fixed number of events has been observed.
///
/// The search emits one event per evaluated candidate, so this caps how many
/// candidates are evaluated.
#[derive(Debug, Clone, Copy)]
pub struct StopAfter {
    limit: u64,
    seen: u64,
}

impl StopAfter {
    /// Creates an observer that stops after `limit` events.
    ///
    /// A limit of zero behaves like one: the search cannot be stopped before
    /// the first event.
    #[must_use]
    pub fn new(limit: u64) -> Self {
        Self { limit, seen: 0 }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn seen(&self) -> u64 {
        self.seen
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.seen += 1;
        (self.seen >= self.limit).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    #[test]
    fn stops_on_the_limit() {
        let mut observer = StopAfter::new(3);

        let actions: Vec<Option<Stop>> = (0..3).map(|_| observer.observe(&())).collect();

        assert_eq!(actions, vec![None, None, Some(Stop)]);
        assert_eq!(observer.seen(), 3);
    }

    #[test]
    fn zero_limit_stops_immediately() {
        let mut observer = StopAfter::new(0);
        let action: Option<Stop> = observer.observe(&());
        assert_eq!(action, Some(Stop));
    }
}

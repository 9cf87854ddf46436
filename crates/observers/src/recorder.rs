use fermat_core::Observer;
use fermat_search::NearMiss;

use crate::traits::HasNearMiss;

/// Records every improvement in the order the search found it.
///
/// To read the updates after the search returns, keep ownership and forward
/// to it from a closure:
///
/// ```rust
/// use fermat_core::{Observer, SearchParameters};
/// use fermat_observers::Recorder;
/// use fermat_search::{Event, search};
///
/// let params = SearchParameters::new(3, 20).unwrap();
/// let mut recorder = Recorder::new();
/// let solution = search(&params, |event: &Event<'_>| recorder.observe(event));
///
/// assert_eq!(recorder.updates().last(), solution.best.as_ref());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    updates: Vec<NearMiss>,
}

impl Recorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded improvements, oldest first.
    #[must_use]
    pub fn updates(&self) -> &[NearMiss] {
        &self.updates
    }

    /// Consumes the recorder and returns its improvements.
    #[must_use]
    pub fn into_updates(self) -> Vec<NearMiss> {
        self.updates
    }
}

impl<E: HasNearMiss, A> Observer<E, A> for Recorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(best) = event.improvement() {
            self.updates.push(best.clone());
        }
        None
    }
}

//! Shared helpers for the cross-crate tests in `tests/`.

use fermat_core::{Observer, SearchParameters};
use fermat_observers::Recorder;
use fermat_search::{Event, NearMiss, search};

/// Runs a full search and returns every improvement plus the final champion.
#[must_use]
pub fn recorded(params: &SearchParameters) -> (Vec<NearMiss>, Option<NearMiss>) {
    let mut recorder = Recorder::new();
    let solution = search(params, |event: &Event<'_>| recorder.observe(event));
    (recorder.into_updates(), solution.best)
}

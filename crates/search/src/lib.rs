//! Exhaustive search for near misses of Fermat's Last Theorem.
//!
//! # Algorithm
//!
//! For an exponent `n` and bound `k`, every pair of bases `10 <= x <= y <= k`
//! is evaluated in canonical order (`x` ascending, then `y` ascending). For
//! each pair the exact sum `x^n + y^n` is bracketed between two consecutive
//! nth powers `z^n` and `(z + 1)^n`, and the nearer one gives the absolute
//! miss. Dividing by the sum gives the relative miss, which ranks candidates
//! of very different magnitude.
//!
//! The root of the sum is first estimated in floating point, then corrected
//! with exact integer arithmetic; the estimate alone is never trusted. All
//! powers use [`BigUint`](num_bigint::BigUint), so nothing can overflow.
//!
//! The scan is complete and deterministic, with cost quadratic in `k`.
//!
//! # Observer Events
//!
//! The search emits one [`Event`] per evaluated candidate:
//!
//! - [`Event::Improved`] — the candidate became the new champion
//! - [`Event::Evaluated`] — the champion was kept
//!
//! A candidate replaces the champion only if its relative miss is strictly
//! smaller, so the first of several equal candidates wins.
//!
//! Observers can return [`Action::StopEarly`] to halt after the current
//! candidate. A [`CancelToken`] can also stop the scan from another thread;
//! it is checked before each candidate. In both cases the champion found so
//! far is returned.

mod action;
mod best;
mod bracket;
mod cancel;
mod evaluate;
mod event;
mod near_miss;
mod search;
mod solution;


pub use action::Action;
pub use bracket::PowerBracket;
pub use cancel::CancelToken;
pub use evaluate::{MissEvaluation, evaluate};
pub use event::Event;
pub use near_miss::NearMiss;
pub use solution::{Solution, Status};

use fermat_core::{Observer, SearchParameters};

/// Finds the candidate with the smallest relative miss.
///
/// The observer receives an [`Event`] for each evaluated candidate.
/// See the [crate docs](crate) for details on event timing and observer actions.
pub fn search<Obs>(params: &SearchParameters, observer: Obs) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search::scan(params, &CancelToken::new(), observer)
}

/// Finds the candidate with the smallest relative miss, stopping early if
/// `cancel` is triggered.
///
/// A search cancelled before its first candidate returns a [`Solution`] with
/// no champion.
pub fn search_cancellable<Obs>(
    params: &SearchParameters,
    cancel: &CancelToken,
    observer: Obs,
) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search::scan(params, cancel, observer)
}

/// Finds the candidate with the smallest relative miss without observer support.
///
/// This is a convenience wrapper around [`search`] that uses a no-op observer.
#[must_use]
pub fn search_unobserved(params: &SearchParameters) -> Solution {
    search(params, ())
}

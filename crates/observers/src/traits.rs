//! Capability traits for reusable observers.
//!
//! These traits abstract over search-specific event and action types, so an
//! observer can be written once and reused.
//!
//! # Event traits
//!
//! - [`HasNearMiss`] — events that may carry a new champion
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use fermat_core::Observer;
//! use fermat_observers::traits::{CanStopEarly, HasNearMiss};
//!
//! /// Stops as soon as any candidate misses by less than `threshold`.
//! struct GoodEnough {
//!     threshold: f64,
//! }
//!
//! impl<E: HasNearMiss, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let best = event.improvement()?;
//!         (best.relative_miss < self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use fermat_search::{Action, Event, NearMiss};

/// An event that may carry a new champion.
pub trait HasNearMiss {
    /// Returns the new champion if this event is an improvement.
    fn improvement(&self) -> Option<&NearMiss>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

impl HasNearMiss for Event<'_> {
    fn improvement(&self) -> Option<&NearMiss> {
        Event::improvement(self)
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

//! Reusable observers for the Fermat near-miss search.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any event and action types implementing them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits ([`HasNearMiss`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Recorder`] — collects every improvement in the order it was found
//! - [`StopAfter`] — stops the search after a fixed number of events
//!
//! [`Observer`]: fermat_core::Observer
//! [`HasNearMiss`]: traits::HasNearMiss
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod recorder;
mod stop_after;

pub use recorder::Recorder;
pub use stop_after::StopAfter;

//! Core traits and types for the Fermat near-miss search.
//!
//! This crate defines the shared abstractions that the searcher, observers,
//! and front ends build on:
//!
//! - [`SearchParameters`] — the validated exponent and bound for one search
//! - [`Candidate`] — an `(x, y)` pair of bases on the search lattice
//! - [`Candidates`] — the lattice enumerated in canonical order
//! - [`Observer`] — receives search events and optionally returns control actions

mod candidate;
mod observer;
mod params;

pub use candidate::{Candidate, Candidates};
pub use observer::Observer;
pub use params::{MAX_EXPONENT, MIN_BASE, MIN_EXPONENT, ParamsError, SearchParameters};

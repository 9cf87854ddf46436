use std::iter::FusedIterator;

use crate::MIN_BASE;

/// A pair of bases `(x, y)` with `MIN_BASE <= x <= y`.
///
/// `(x, y)` and `(y, x)` describe the same sum, so only `x <= y` is ever
/// enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candidate {
    pub x: u64,
    pub y: u64,
}

impl Candidate {
    /// Creates a candidate, ordering the bases so that `x <= y`.
    #[must_use]
    pub fn new(a: u64, b: u64) -> Self {
        if a <= b {
            Self { x: a, y: b }
        } else {
            Self { x: b, y: a }
        }
    }
}

/// Iterator over the search lattice in canonical order.
///
/// Yields every [`Candidate`] with `MIN_BASE <= x <= y <= k`, with `x`
/// ascending and `y` ascending within each `x`. This order defines which of
/// two equally good candidates is seen first.
#[derive(Debug, Clone)]
pub struct Candidates {
    next: Option<Candidate>,
    k: u64,
}

impl Candidates {
    pub(crate) fn new(k: u64) -> Self {
        let next = (k >= MIN_BASE).then_some(Candidate {
            x: MIN_BASE,
            y: MIN_BASE,
        });
        Self { next, k }
    }
}

impl Iterator for Candidates {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let current = self.next?;

        self.next = if current.y < self.k {
            Some(Candidate {
                x: current.x,
                y: current.y + 1,
            })
        } else if current.x < self.k {
            Some(Candidate {
                x: current.x + 1,
                y: current.x + 1,
            })
        } else {
            None
        };

        Some(current)
    }
}

impl FusedIterator for Candidates {}

use crate::{MissEvaluation, NearMiss, Solution, Status};

/// Tracks the champion encountered so far.
///
/// The champion is the evaluation with the smallest relative miss. Only a
/// strictly smaller miss replaces it, so the first of several equal
/// candidates is kept. The `Option` represents the state before any
/// evaluation.
pub(crate) struct Best {
    champion: Option<NearMiss>,
}

/// The outcome of offering an evaluation to [`Best`].
pub(crate) enum Offer<'a> {
    /// The evaluation became the champion.
    Improved {
        current: &'a NearMiss,
        previous: Option<NearMiss>,
    },

    /// The existing champion was kept.
    Kept { current: &'a NearMiss },
}

impl Best {
    /// Creates an empty best tracker.
    pub(crate) fn empty() -> Self {
        Self { champion: None }
    }

    /// Replaces the champion if the evaluation's relative miss is smaller.
    pub(crate) fn offer(&mut self, eval: &MissEvaluation) -> Offer<'_> {
        match self.champion.take() {
            Some(champion) if eval.relative_miss >= champion.relative_miss => Offer::Kept {
                current: self.champion.insert(champion),
            },
            previous => Offer::Improved {
                current: self.champion.insert(NearMiss::from(eval)),
                previous,
            },
        }
    }

    /// Finalizes the search with whatever champion is held.
    pub(crate) fn finish(self, status: Status, evaluated: u64) -> Solution {
        Solution {
            status,
            best: self.champion,
            evaluated,
        }
    }
}

use fermat_core::{Candidate, Observer};

use crate::{Action, MissEvaluation, NearMiss, best::Offer};

/// Events emitted by the near-miss search.
///
/// One event is emitted per evaluated candidate, in canonical lattice order.
/// Each carries the evaluation and the champion as it stands after that
/// evaluation, so observers can report progress or decide to stop early.
#[derive(Debug)]
pub enum Event<'a> {
    /// The candidate did not beat the champion.
    Evaluated {
        /// The candidate's evaluation.
        evaluation: &'a MissEvaluation,

        /// The unchanged champion.
        best: &'a NearMiss,
    },

    /// The candidate became the new champion.
    ///
    /// The sequence of `Improved` events is the stream of best updates: each
    /// has a strictly smaller relative miss than the one before.
    Improved {
        /// The candidate's evaluation.
        evaluation: &'a MissEvaluation,

        /// The new champion, built from `evaluation`.
        best: &'a NearMiss,

        /// The champion it replaced, if any.
        previous: Option<&'a NearMiss>,
    },
}

impl Event<'_> {
    /// Returns the evaluated candidate.
    #[must_use]
    pub fn candidate(&self) -> Candidate {
        self.evaluation().candidate
    }

    /// Returns the evaluation that triggered this event.
    #[must_use]
    pub fn evaluation(&self) -> &MissEvaluation {
        match self {
            Self::Evaluated { evaluation, .. } | Self::Improved { evaluation, .. } => evaluation,
        }
    }

    /// Returns the champion after this evaluation.
    #[must_use]
    pub fn best(&self) -> &NearMiss {
        match self {
            Self::Evaluated { best, .. } | Self::Improved { best, .. } => best,
        }
    }

    /// Returns the new champion if this event is an improvement.
    #[must_use]
    pub fn improvement(&self) -> Option<&NearMiss> {
        match self {
            Self::Improved { best, .. } => Some(*best),
            Self::Evaluated { .. } => None,
        }
    }

    /// Builds the event for an offer outcome and returns the observer's action.
    pub(crate) fn emit<Obs>(
        evaluation: &MissEvaluation,
        offer: Offer<'_>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        match offer {
            Offer::Improved { current, previous } => {
                tracing::debug!(
                    x = current.x,
                    y = current.y,
                    z = current.z,
                    relative_miss = current.relative_miss,
                    "new best near miss"
                );
                let event = Event::Improved {
                    evaluation,
                    best: current,
                    previous: previous.as_ref(),
                };
                observer.observe(&event)
            }
            Offer::Kept { current } => {
                let event = Event::Evaluated {
                    evaluation,
                    best: current,
                };
                observer.observe(&event)
            }
        }
    }
}

use fermat_core::{Observer, SearchParameters};

use crate::{Action, CancelToken, Event, Solution, Status, best::Best, evaluate::evaluate};

/// Core near-miss scan.
///
/// Walks the lattice in canonical order. The cancel token is checked before
/// each candidate and the observer is consulted after each one; either can end
/// the scan, in which case the champion so far is returned.
pub(crate) fn scan<Obs>(
    params: &SearchParameters,
    cancel: &CancelToken,
    mut observer: Obs,
) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    tracing::info!(
        n = params.n(),
        k = params.k(),
        candidates = %params.candidate_count(),
        "starting near-miss search"
    );

    let mut best = Best::empty();
    let mut evaluated = 0_u64;
    let mut status = Status::Complete;

    for candidate in params.candidates() {
        if cancel.is_cancelled() {
            status = Status::Cancelled;
            break;
        }

        let evaluation = evaluate(candidate, params.n());
        evaluated += 1;

        let offer = best.offer(&evaluation);
        if let Some(Action::StopEarly) = Event::emit(&evaluation, offer, &mut observer) {
            status = Status::StoppedByObserver;
            break;
        }
    }

    let solution = best.finish(status, evaluated);

    match &solution.best {
        Some(best) => tracing::info!(
            status = ?solution.status,
            evaluated,
            x = best.x,
            y = best.y,
            z = best.z,
            relative_miss = best.relative_miss,
            "near-miss search finished"
        ),
        None => tracing::info!(
            status = ?solution.status,
            evaluated,
            "near-miss search finished without a result"
        ),
    }

    solution
}

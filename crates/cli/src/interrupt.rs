use anyhow::Context;
use fermat_core::SearchParameters;
use fermat_search::{CancelToken, Event, Solution, search_cancellable};

use crate::report;

/// Runs the search, printing each improvement, until it completes or the user
/// presses Ctrl-C.
///
/// On Ctrl-C the search is cancelled cooperatively and the champion found so
/// far is returned.
///
/// # Errors
///
/// Returns an error if the runtime cannot start, the Ctrl-C handler cannot be
/// installed, or the search task panics.
pub fn run_until_interrupted(params: SearchParameters) -> anyhow::Result<Solution> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    runtime.block_on(race_ctrl_c(params))
}

async fn race_ctrl_c(params: SearchParameters) -> anyhow::Result<Solution> {
    let cancel = CancelToken::new();
    let token = cancel.clone();

    let mut task = tokio::task::spawn_blocking(move || {
        search_cancellable(&params, &token, |event: &Event<'_>| {
            if let Some(best) = event.improvement() {
                println!("\n{}", report::Update(best));
            }
            None
        })
    });

    tokio::select! {
        joined = &mut task => joined.context("search task failed"),
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            tracing::info!("interrupt received, cancelling search");
            println!("\nSearch interrupted by user. Showing best found so far...");
            cancel.cancel();
            task.await.context("search task failed")
        }
    }
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use carbon_desk_core::models::summary::PortfolioSummary;

use crate::api::PortfolioApi;
use crate::filter::StatusFilter;

/// Visible state of the summary panel.
#[derive(Debug, Clone)]
pub enum SummaryState {
    /// No fetch has been started yet
    Idle,
    /// A fetch is in flight; render skeleton placeholders
    Loading,
    /// The latest fetch succeeded
    Loaded(PortfolioSummary),
    /// The latest fetch failed; the message is user-visible
    Failed(String),
}

impl SummaryState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, SummaryState::Loading)
    }
}

/// Drives the filtered fetch-and-render cycle for the summary panel.
///
/// Each [`set_filter`] call supersedes the previous request: the old
/// request's cancellation token fires before the new fetch starts, and a
/// superseded outcome is discarded instead of touching visible state.
/// The commit is additionally guarded by a generation counter, so a stale
/// response can never overwrite state produced by a newer filter even if
/// the transport ignores cancellation entirely.
///
/// [`set_filter`]: SummaryView::set_filter
pub struct SummaryView {
    api: Arc<dyn PortfolioApi>,
    state: Arc<Mutex<SummaryState>>,
    generation: Arc<AtomicU64>,
    filter: StatusFilter,
    inflight: Option<Inflight>,
}

struct Inflight {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl SummaryView {
    pub fn new(api: Arc<dyn PortfolioApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(SummaryState::Idle)),
            generation: Arc::new(AtomicU64::new(0)),
            filter: StatusFilter::All,
            inflight: None,
        }
    }

    /// Snapshot of the current panel state.
    #[must_use]
    pub fn state(&self) -> SummaryState {
        lock(&self.state).clone()
    }

    /// The filter the panel is currently showing (or loading).
    #[must_use]
    pub fn active_filter(&self) -> StatusFilter {
        self.filter
    }

    /// Switch the active filter: cancel any in-flight request, flip to
    /// `Loading`, and start a fetch for the new filter. Also used for the
    /// initial load (filter `All`).
    pub fn set_filter(&mut self, filter: StatusFilter) {
        if let Some(previous) = self.inflight.take() {
            previous.token.cancel();
        }

        self.filter = filter;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *lock(&self.state) = SummaryState::Loading;

        let token = CancellationToken::new();
        let handle = tokio::spawn(fetch_task(
            Arc::clone(&self.api),
            Arc::clone(&self.state),
            Arc::clone(&self.generation),
            generation,
            filter,
            token.clone(),
        ));
        self.inflight = Some(Inflight { token, handle });
    }

    /// Await the in-flight request, if any. Returns once the panel state
    /// has settled (Loaded or Failed), or immediately when nothing is in
    /// flight.
    pub async fn wait_settled(&mut self) {
        if let Some(inflight) = self.inflight.take() {
            // A JoinError here means the task was cancelled or panicked;
            // either way the state cell already holds the final word.
            let _ = inflight.handle.await;
        }
    }

    /// Cancel any in-flight request without waiting. Used on teardown so
    /// a late response cannot mutate state after the view is gone.
    pub fn shutdown(&mut self) {
        if let Some(inflight) = self.inflight.take() {
            inflight.token.cancel();
        }
    }
}

impl Drop for SummaryView {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn fetch_task(
    api: Arc<dyn PortfolioApi>,
    state: Arc<Mutex<SummaryState>>,
    current_generation: Arc<AtomicU64>,
    generation: u64,
    filter: StatusFilter,
    token: CancellationToken,
) {
    let outcome = tokio::select! {
        _ = token.cancelled() => {
            tracing::debug!(%filter, "summary request superseded");
            return;
        }
        result = api.fetch_summary(filter) => result,
    };

    // Commit under the lock, re-checking the generation there: a newer
    // set_filter bumps the counter before it writes Loading, so a stale
    // outcome can never win the race.
    let mut state = lock(&state);
    if current_generation.load(Ordering::SeqCst) != generation {
        return;
    }

    match outcome {
        Ok(summary) => *state = SummaryState::Loaded(summary),
        Err(err) => {
            tracing::warn!(%filter, error = %err, "summary request failed");
            *state = SummaryState::Failed(err.to_string());
        }
    }
}

fn lock(state: &Mutex<SummaryState>) -> MutexGuard<'_, SummaryState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

//! `{data, loading, error, refetch}` hook over a single async fetcher.
//!
//! The request starts on mount. A response that arrives after the owning
//! component has been disposed is dropped instead of written to a signal
//! nobody reads; a response that arrives after a newer `refetch` is dropped
//! by the generation check in [`FetchState`].

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::fetch::{FetchPhase, FetchState};

/// Handle returned by [`use_fetch`]. Cheap to copy into closures.
pub struct FetchHandle<T: Send + Sync + 'static> {
    pub state: RwSignal<FetchState<T>>,
    refetch: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for FetchHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FetchHandle<T> {}

impl<T: Send + Sync + 'static> FetchHandle<T> {
    /// Re-run the request. `loading` flips to true before this returns.
    pub fn refetch(&self) {
        self.refetch.run(());
    }

    #[must_use]
    pub fn refetch_callback(&self) -> Callback<()> {
        self.refetch
    }

    #[must_use]
    pub fn phase(&self) -> Signal<FetchPhase> {
        let state = self.state;
        Signal::derive(move || state.with(FetchState::phase))
    }

    #[must_use]
    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    #[must_use]
    pub fn is_stale(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(FetchState::is_stale))
    }
}

impl<T: Clone + Send + Sync + 'static> FetchHandle<T> {
    /// Current data, or `None` before the first success.
    #[must_use]
    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data.clone())
    }
}

/// Start `fetcher` now and expose its state plus a `refetch` trigger.
pub fn use_fetch<T, F, Fut>(fetcher: F) -> FetchHandle<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = RwSignal::new(FetchState::<T>::default());
    let alive = Arc::new(AtomicBool::new(true));

    let run = {
        let alive = alive.clone();
        move || {
            let Some(ticket) = state.try_update(FetchState::begin) else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let pending = fetcher();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let result = pending.await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    if let Err(e) = &result {
                        log::warn!("fetch failed: {e}");
                    }
                    state.update(|s| {
                        s.settle(ticket, result);
                    });
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (ticket, &fetcher, &alive);
            }
        }
    };

    run.clone()();
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    FetchHandle { state, refetch: Callback::new(move |()| run()) }
}

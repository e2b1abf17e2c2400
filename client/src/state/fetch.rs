//! Request lifecycle state behind every data-fetch hook.
//!
//! DESIGN
//! ======
//! Each request is stamped with a generation when it begins. Only the newest
//! generation may settle the state, so a slow response from an earlier
//! `refetch` can never overwrite a newer one.
//!
//! TRADE-OFFS
//! ==========
//! On failure the last successful `data` is kept next to the error. Panels
//! render it marked stale rather than blanking a card the user was reading.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

/// Proof that a request was started, checked when it settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Coarse phase used for rendering decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchPhase {
    /// Nothing requested yet.
    Idle,
    Loading,
    Ready,
    Failed,
}

/// `{data, loading, error}` for one resource.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None, generation: 0 }
    }
}

impl<T> FetchState<T> {
    /// Start a request. `loading` is true until the returned ticket settles.
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        self.loading = true;
        RequestTicket(self.generation)
    }

    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Store a successful response. Returns `false` if the ticket is outdated.
    pub fn resolve(&mut self, ticket: RequestTicket, data: T) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.data = Some(data);
        self.error = None;
        self.loading = false;
        true
    }

    /// Record a failure, keeping any earlier data. Returns `false` if the
    /// ticket is outdated.
    pub fn fail(&mut self, ticket: RequestTicket, message: impl Into<String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.error = Some(message.into());
        self.loading = false;
        true
    }

    pub fn settle(&mut self, ticket: RequestTicket, result: Result<T, String>) -> bool {
        match result {
            Ok(data) => self.resolve(ticket, data),
            Err(message) => self.fail(ticket, message),
        }
    }

    /// Retained data is on screen but the latest request failed.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.error.is_some() && self.data.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> FetchPhase {
        if self.loading {
            FetchPhase::Loading
        } else if self.error.is_some() {
            FetchPhase::Failed
        } else if self.data.is_some() {
            FetchPhase::Ready
        } else {
            FetchPhase::Idle
        }
    }
}

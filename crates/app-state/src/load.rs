//! Screen load state
//!
//! Every screen runs the same fetch-on-mount cycle. Instead of the
//! scattered `loading`/`error` boolean pairs this replaces, the cycle is
//! a single finite-state value, so contradictory combinations (loading
//! and failed at once) cannot exist.

/// Lifecycle of a screen-scoped fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T, E> {
    /// Nothing requested yet
    Idle,
    /// A request is in flight
    Loading,
    /// The request resolved with data
    Loaded(T),
    /// The request failed; loading is cleared
    Failed(E),
}

impl<T, E> Default for LoadState<T, E> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T, E> LoadState<T, E> {
    /// Check if nothing has been requested yet
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    /// Check if a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Check if data is available
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    /// Check if the last request failed
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    /// Get the loaded data, if any
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Get the failure, if any
    pub fn error(&self) -> Option<&E> {
        match self {
            LoadState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Mark a request as started
    pub fn start(&mut self) {
        *self = LoadState::Loading;
    }

    /// Resolve the in-flight request from a result
    pub fn resolve(&mut self, result: Result<T, E>) {
        *self = match result {
            Ok(data) => LoadState::Loaded(data),
            Err(error) => LoadState::Failed(error),
        };
    }
}

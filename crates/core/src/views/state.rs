//! Load state shared by every view
//!
//! A view starts in [`ViewState::Loading`], issues its client calls and moves
//! to `Ready`, `Empty` or `Error` once they resolve. [`ViewSlot`] owns that
//! state together with a mount flag and a fetch generation, so a result that
//! resolves after the view was unmounted or refetched is dropped instead of
//! overwriting newer state.

use doppler_domain::ClientResult;
use tracing::{debug, warn};

/// Render state of one view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Empty,
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ViewState<T> {
    /// Fold a client outcome into a render state.
    ///
    /// A refused session and a failed envelope both end in `Error`; a
    /// successful value that `is_empty` reports as empty ends in `Empty`.
    pub fn from_client_result(result: ClientResult<T>, is_empty: impl FnOnce(&T) -> bool) -> Self {
        match result {
            Ok(Ok(value)) if is_empty(&value) => Self::Empty,
            Ok(Ok(value)) => Self::Ready(value),
            Ok(Err(failure)) => {
                warn!(error = %failure, "view data request failed");
                Self::Error(failure.to_string())
            }
            Err(unavailable) => {
                warn!(error = %unavailable, "view data request refused");
                Self::Error(unavailable.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            Self::Loading => ViewState::Loading,
            Self::Ready(value) => ViewState::Ready(f(value)),
            Self::Empty => ViewState::Empty,
            Self::Error(message) => ViewState::Error(message),
        }
    }
}

/// Receipt for one fetch started through [`ViewSlot::begin_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a fetch result can only be applied with its ticket"]
pub struct FetchTicket {
    generation: u64,
}

/// View state plus the guards that keep late results out.
#[derive(Debug)]
pub struct ViewSlot<T> {
    state: ViewState<T>,
    generation: u64,
    mounted: bool,
}

impl<T> Default for ViewSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewSlot<T> {
    /// Mounted slot in the `Loading` state.
    pub fn new() -> Self {
        Self { state: ViewState::Loading, generation: 0, mounted: true }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState<T> {
        &mut self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start a fetch: show `Loading` and invalidate earlier tickets.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        FetchTicket { generation: self.generation }
    }

    /// Apply a fetch result. Returns `false` when it was discarded because
    /// the view is unmounted or a newer fetch started since.
    pub fn complete(&mut self, ticket: FetchTicket, state: ViewState<T>) -> bool {
        if !self.mounted {
            debug!(generation = ticket.generation, "discarding fetch result for unmounted view");
            return false;
        }
        if ticket.generation != self.generation {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }
        self.state = state;
        true
    }

    /// Mark the view as gone; pending results will be dropped.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use doppler_domain::{ApiFailure, SessionUnavailable};

    use super::*;

    #[test]
    fn client_results_fold_into_states() {
        let ready: ViewState<Vec<u8>> = ViewState::from_client_result(Ok(Ok(vec![1])), Vec::is_empty);
        assert_eq!(ready, ViewState::Ready(vec![1]));

        let empty: ViewState<Vec<u8>> = ViewState::from_client_result(Ok(Ok(vec![])), Vec::is_empty);
        assert_eq!(empty, ViewState::Empty);

        let failed: ViewState<Vec<u8>> = ViewState::from_client_result(
            Ok(Err(ApiFailure::Server { status: 400, title: Some("Bad request".into()) })),
            Vec::is_empty,
        );
        assert_eq!(failed.error(), Some("Bad request"));

        let refused: ViewState<Vec<u8>> =
            ViewState::from_client_result(Err(SessionUnavailable::MissingToken), Vec::is_empty);
        assert!(refused.error().unwrap().contains("not available"));
    }

    #[test]
    fn slot_applies_latest_fetch() {
        let mut slot = ViewSlot::new();
        let ticket = slot.begin_fetch();
        assert!(slot.state().is_loading());

        assert!(slot.complete(ticket, ViewState::Ready(7)));
        assert_eq!(slot.state().ready(), Some(&7));
    }

    #[test]
    fn slot_drops_superseded_fetch() {
        let mut slot = ViewSlot::new();
        let first = slot.begin_fetch();
        let second = slot.begin_fetch();

        assert!(slot.complete(second, ViewState::Ready("fresh")));
        assert!(!slot.complete(first, ViewState::Ready("stale")));
        assert_eq!(slot.state().ready(), Some(&"fresh"));
    }

    #[test]
    fn slot_drops_results_after_unmount() {
        let mut slot: ViewSlot<u8> = ViewSlot::new();
        let ticket = slot.begin_fetch();
        slot.unmount();

        assert!(!slot.complete(ticket, ViewState::Ready(1)));
        assert!(slot.state().is_loading());
        assert!(!slot.is_mounted());
    }

    #[test]
    fn map_preserves_non_ready_states() {
        let error: ViewState<u8> = ViewState::Error("x".into());
        assert_eq!(error.map(|v| v * 2), ViewState::Error("x".into()));
        assert_eq!(ViewState::Ready(2).map(|v| v * 2), ViewState::Ready(4));
    }
}

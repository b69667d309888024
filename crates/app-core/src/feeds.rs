//! Room feed
//!
//! The home screen's room listing: one authenticated read, no paging.
//! A 401 clears the session (the navigation gate then swaps the screen
//! tree); other failures surface once and are never retried.

use app_state::{LoadState, SessionStore};
use rooms_client::rest::ApiError;
use rooms_client::{ApiClient, RoomSummary};
use thiserror::Error;

/// Feed error types
#[derive(Debug, Error)]
pub enum FeedError {
    /// No session is available for the authenticated read
    #[error("No active session")]
    NoSession,

    /// The token was rejected; the session has been cleared
    #[error("Session expired, please sign in again")]
    Unauthorized,

    /// The service reported itself temporarily unavailable
    #[error("Service unavailable, please try again later")]
    ServiceUnavailable,

    /// Generic download failure
    #[error("There was a problem downloading the data")]
    Other(#[source] ApiError),
}

/// Result type for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;

/// Load state driven by the feed
pub type FeedLoadState = LoadState<Vec<RoomSummary>, FeedError>;

/// Room feed service
pub struct RoomFeed {
    client: ApiClient,
    session: SessionStore,
}

impl RoomFeed {
    /// Create a new feed service
    pub fn new(client: ApiClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// Fetch the room list with the current session token
    pub async fn fetch(&self) -> Result<Vec<RoomSummary>> {
        let credentials = self.session.credentials().ok_or(FeedError::NoSession)?;

        match self.client.rooms(&credentials.token).await {
            Ok(rooms) => {
                tracing::debug!(count = rooms.len(), "room feed loaded");
                Ok(rooms)
            }
            Err(e) if e.is_unauthorized() => {
                self.session.clear();
                Err(FeedError::Unauthorized)
            }
            Err(e) if e.is_unavailable() => Err(FeedError::ServiceUnavailable),
            Err(e) => Err(FeedError::Other(e)),
        }
    }

    /// Run the fetch-on-mount cycle into a screen load state
    pub async fn refresh(&self, state: &mut FeedLoadState) {
        state.start();
        state.resolve(self.fetch().await);
    }
}

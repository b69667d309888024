//! Room detail
//!
//! Drill-down view for a single room, including the coordinate the map
//! marker is placed at. Same authenticated-read contract as the feed.

use app_state::{LoadState, SessionStore};
use rooms_client::rest::ApiError;
use rooms_client::{ApiClient, RoomDetail};
use thiserror::Error;

/// Room detail error types
#[derive(Debug, Error)]
pub enum RoomError {
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
    #[error("An error occurred when fetching room data")]
    Other(#[source] ApiError),
}

/// Result type for room detail operations
pub type Result<T> = std::result::Result<T, RoomError>;

/// Load state driven by the room detail screen
pub type RoomLoadState = LoadState<RoomDetail, RoomError>;

/// Room detail service
pub struct RoomViewer {
    client: ApiClient,
    session: SessionStore,
}

impl RoomViewer {
    /// Create a new room detail service
    pub fn new(client: ApiClient, session: SessionStore) -> Self {
        Self { client, session }
    }

    /// Fetch a single room by id with the current session token
    pub async fn fetch(&self, room_id: &str) -> Result<RoomDetail> {
        let credentials = self.session.credentials().ok_or(RoomError::NoSession)?;

        match self.client.room(&credentials.token, room_id).await {
            Ok(room) => Ok(room),
            Err(e) if e.is_unauthorized() => {
                self.session.clear();
                Err(RoomError::Unauthorized)
            }
            Err(e) if e.is_unavailable() => Err(RoomError::ServiceUnavailable),
            Err(e) => Err(RoomError::Other(e)),
        }
    }

    /// Run the fetch-on-mount cycle into a screen load state
    pub async fn refresh(&self, room_id: &str, state: &mut RoomLoadState) {
        state.start();
        state.resolve(self.fetch(room_id).await);
    }
}

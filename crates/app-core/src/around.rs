//! Nearby rooms
//!
//! The "around me" map screen: asks for foreground location permission,
//! reads the current coordinate, and fetches the rooms near it. The
//! endpoint is unauthenticated by contract. When the permission is
//! denied or positioning fails, the search falls back to the default
//! city-center coordinate instead of failing the screen.

use app_platform::{LocationProvider, PermissionStatus, Position};
use app_state::LoadState;
use rooms_client::rest::ApiError;
use rooms_client::{ApiClient, RoomDetail};
use std::sync::Arc;
use thiserror::Error;

/// Nearby-rooms error types
#[derive(Debug, Error)]
pub enum AroundError {
    /// The service reported itself temporarily unavailable
    #[error("Service unavailable, please try again later")]
    ServiceUnavailable,

    /// Generic download failure
    #[error("There was a problem downloading the data")]
    Other(#[source] ApiError),
}

/// Result type for nearby-rooms operations
pub type Result<T> = std::result::Result<T, AroundError>;

/// Fallback search center when no device position is available
pub const DEFAULT_CENTER: Position = Position {
    latitude: 48.856614,
    longitude: 2.3522219,
};

/// The nearby rooms plus the center the map should open on
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyRooms {
    /// Map center (device position, or the fallback)
    pub center: Position,
    /// Whether `center` is the actual device position
    pub located: bool,
    /// Rooms around the center
    pub rooms: Vec<RoomDetail>,
}

/// Load state driven by the map screen
pub type AroundLoadState = LoadState<NearbyRooms, AroundError>;

/// Nearby-rooms service
pub struct AroundMe {
    client: ApiClient,
    location: Arc<dyn LocationProvider>,
}

impl AroundMe {
    /// Create a new nearby-rooms service
    pub fn new(client: ApiClient, location: Arc<dyn LocationProvider>) -> Self {
        Self { client, location }
    }

    /// Resolve the search center from the device
    ///
    /// Returns the current position when the permission is granted and
    /// positioning succeeds, the fallback center otherwise.
    pub async fn locate(&self) -> (Position, bool) {
        match self.location.request_foreground_permission().await {
            PermissionStatus::Granted => match self.location.current_position().await {
                Ok(position) => (position, true),
                Err(e) => {
                    tracing::warn!(error = %e, "positioning failed, using fallback center");
                    (DEFAULT_CENTER, false)
                }
            },
            PermissionStatus::Denied => {
                tracing::debug!("location permission denied, using fallback center");
                (DEFAULT_CENTER, false)
            }
        }
    }

    /// Locate the device and fetch the rooms around it
    pub async fn fetch(&self) -> Result<NearbyRooms> {
        let (center, located) = self.locate().await;

        match self
            .client
            .rooms_around(center.latitude, center.longitude)
            .await
        {
            Ok(rooms) => {
                tracing::debug!(count = rooms.len(), "nearby rooms loaded");
                Ok(NearbyRooms { center, located, rooms })
            }
            Err(e) if e.is_unavailable() => Err(AroundError::ServiceUnavailable),
            Err(e) => Err(AroundError::Other(e)),
        }
    }

    /// Run the fetch-on-mount cycle into a screen load state
    pub async fn refresh(&self, state: &mut AroundLoadState) {
        state.start();
        state.resolve(self.fetch().await);
    }
}

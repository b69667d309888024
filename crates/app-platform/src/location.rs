//! Foreground location capability
//!
//! The nearby-rooms screen needs the device's current coordinate. The
//! actual permission dialog and positioning hardware live behind the
//! `LocationProvider` trait; the application only sees the granted /
//! denied outcome and a position.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location capability error types
#[derive(Debug, Error)]
pub enum LocationError {
    /// The platform could not produce a position
    #[error("Position unavailable: {0}")]
    Unavailable(String),
}

/// Result type for location operations
pub type Result<T> = std::result::Result<T, LocationError>;

/// Outcome of a permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionStatus {
    /// The user granted the permission
    Granted,
    /// The user denied the permission
    Denied,
}

impl PermissionStatus {
    /// Check if the permission was granted
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// A device position in conventional latitude/longitude order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Provider of foreground location data
#[automock]
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Ask the user for foreground location permission
    async fn request_foreground_permission(&self) -> PermissionStatus;

    /// Get the device's current position
    ///
    /// Callers must only invoke this after the permission was granted.
    async fn current_position(&self) -> Result<Position>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_status() {
        assert!(PermissionStatus::Granted.is_granted());
        assert!(!PermissionStatus::Denied.is_granted());
    }

    #[tokio::test]
    async fn test_mock_location_provider() {
        let mut provider = MockLocationProvider::new();
        provider
            .expect_request_foreground_permission()
            .returning(|| PermissionStatus::Granted);
        provider.expect_current_position().returning(|| {
            Ok(Position { latitude: 48.856614, longitude: 2.3522219 })
        });

        assert!(provider.request_foreground_permission().await.is_granted());
        let position = provider.current_position().await.unwrap();
        assert_eq!(position.latitude, 48.856614);
    }
}

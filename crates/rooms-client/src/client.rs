//! High-level API client
//!
//! This module provides `ApiClient`, the typed surface over every rooms
//! API endpoint the application consumes. It owns the REST transport and
//! translates call parameters into requests; session handling lives one
//! layer up, so authenticated calls take the token explicitly.
//!
//! # Example
//!
//! ```rust,no_run
//! use rooms_client::{ApiClient, RestClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(RestClientConfig::default())?;
//!
//!     let auth = client.sign_in("alice@example.com", "password").await?;
//!     let rooms = client.rooms(&auth.token).await?;
//!     println!("{} rooms listed", rooms.len());
//!
//!     Ok(())
//! }
//! ```

use serde::Serialize;

use crate::rest::{ApiError, MultipartFile, RestClient, RestClientConfig, RestRequest};
use crate::types::{AuthSuccess, RoomDetail, RoomSummary, UserProfile};

/// Result type for API client operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Sign-up request parameters
#[derive(Debug, Clone, Serialize)]
pub struct SignUpParams {
    /// Email address
    pub email: String,
    /// Username
    pub username: String,
    /// Free-form profile description
    pub description: String,
    /// Password
    pub password: String,
}

/// Structured profile field update
///
/// Submitted wholesale; the picture-only path goes through
/// [`ApiClient::upload_picture`] instead.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    /// Email address
    pub email: String,
    /// Username
    pub username: String,
    /// Free-form profile description
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Typed client for the rooms API
#[derive(Debug, Clone)]
pub struct ApiClient {
    rest: RestClient,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: RestClientConfig) -> Result<Self> {
        Ok(Self { rest: RestClient::new(config)? })
    }

    /// Sign in with email and password
    ///
    /// # Errors
    ///
    /// Returns a 401 `ApiError` for incorrect credentials; transport and
    /// parse failures map to status-0 errors.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSuccess> {
        let request = RestRequest::post("/user/log_in")
            .json_body(&SignInBody { email, password })
            .map_err(|e| ApiError::new(0, "ParseError", e.to_string()))?;

        self.rest.execute(request).await
    }

    /// Create a new account
    ///
    /// # Errors
    ///
    /// Field-level rejections come back as an `ApiError` carrying the
    /// server's error string (e.g., "Username already taken").
    pub async fn sign_up(&self, params: &SignUpParams) -> Result<AuthSuccess> {
        let request = RestRequest::post("/user/sign_up")
            .json_body(params)
            .map_err(|e| ApiError::new(0, "ParseError", e.to_string()))?;

        self.rest.execute(request).await
    }

    /// List all rooms (authenticated)
    pub async fn rooms(&self, token: &str) -> Result<Vec<RoomSummary>> {
        let request = RestRequest::get("/rooms").bearer(token);
        self.rest.execute(request).await
    }

    /// Fetch a single room by id (authenticated)
    pub async fn room(&self, token: &str, id: &str) -> Result<RoomDetail> {
        let request = RestRequest::get(format!("/rooms/{}", id)).bearer(token);
        self.rest.execute(request).await
    }

    /// List rooms near a coordinate
    ///
    /// This endpoint is unauthenticated by contract; no bearer token is
    /// attached.
    pub async fn rooms_around(&self, latitude: f64, longitude: f64) -> Result<Vec<RoomDetail>> {
        let request = RestRequest::get("/rooms/around")
            .param("latitude", latitude.to_string())
            .param("longitude", longitude.to_string());

        self.rest.execute(request).await
    }

    /// Fetch a user profile by id (authenticated)
    pub async fn user(&self, token: &str, id: &str) -> Result<UserProfile> {
        let request = RestRequest::get(format!("/user/{}", id)).bearer(token);
        self.rest.execute(request).await
    }

    /// Submit a structured profile field update (authenticated)
    pub async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> Result<UserProfile> {
        let request = RestRequest::put("/user/update")
            .bearer(token)
            .json_body(update)
            .map_err(|e| ApiError::new(0, "ParseError", e.to_string()))?;

        self.rest.execute(request).await
    }

    /// Upload a new profile picture (authenticated, multipart)
    ///
    /// # Arguments
    ///
    /// * `bytes` - Raw image bytes
    /// * `file_name` - File name sent with the part (e.g., "userPicture.jpg")
    /// * `mime_type` - Image MIME type (e.g., "image/jpeg")
    pub async fn upload_picture(
        &self,
        token: &str,
        bytes: Vec<u8>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Result<UserProfile> {
        let request = RestRequest::put("/user/upload_picture")
            .bearer(token)
            .multipart_file(MultipartFile {
                field: "photo".to_string(),
                file_name: file_name.into(),
                mime_type: mime_type.into(),
                bytes,
            });

        self.rest.execute(request).await
    }

    /// Get the underlying transport configuration
    pub fn config(&self) -> &RestClientConfig {
        self.rest.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = ApiClient::new(RestClientConfig::default()).unwrap();
        assert!(client.config().base_url.contains("airbnb"));
    }

    #[test]
    fn test_sign_up_params_serialization() {
        let params = SignUpParams {
            email: "bob@example.com".to_string(),
            username: "bob".to_string(),
            description: "Hi there".to_string(),
            password: "secret".to_string(),
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["email"], "bob@example.com");
        assert_eq!(json["username"], "bob");
        assert_eq!(json["description"], "Hi there");
        assert_eq!(json["password"], "secret");
    }

    #[test]
    fn test_profile_update_serialization() {
        let update = ProfileUpdate {
            email: "bob@example.com".to_string(),
            username: "bob".to_string(),
            description: "Updated".to_string(),
        };

        let json = serde_json::to_string(&update).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("Updated"));
    }
}

//! Profile editing
//!
//! Fetches the signed-in user's profile and submits edits back. The
//! structured field update and the binary picture upload are independent
//! operations with independent success/failure reporting; saving with
//! neither marked dirty is rejected locally. Logout lives in
//! [`crate::auth::AuthService`]; this screen only calls it.

use app_platform::images::ImageError;
use app_platform::{ImagePicker, PickedImage};
use app_state::{LoadState, SessionStore};
use rooms_client::rest::ApiError;
use rooms_client::{ApiClient, ProfileUpdate, UserProfile};
use std::sync::Arc;
use thiserror::Error;

/// Profile error types
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No session is available for the authenticated call
    #[error("No active session")]
    NoSession,

    /// The token was rejected; the session has been cleared
    #[error("Session expired, please sign in again")]
    Unauthorized,

    /// The service reported itself temporarily unavailable
    #[error("Service unavailable, please try again later")]
    ServiceUnavailable,

    /// Save was requested with nothing marked dirty
    #[error("Modify at least one field")]
    NothingToUpdate,

    /// The image picker failed to produce the selected image
    #[error("Could not read the selected image")]
    Picker(#[from] ImageError),

    /// Generic failure
    #[error("An error occurred")]
    Other(#[source] ApiError),
}

/// Result type for profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Load state driven by the profile screen
pub type ProfileLoadState = LoadState<UserProfile, ProfileError>;

/// Outcome of a save: each sub-operation reports independently
#[derive(Debug, Default)]
pub struct SaveOutcome {
    /// Result of the picture upload, if one was requested
    pub picture: Option<Result<UserProfile>>,
    /// Result of the field update, if one was requested
    pub fields: Option<Result<UserProfile>>,
}

impl SaveOutcome {
    /// Check if every requested sub-operation succeeded
    pub fn is_success(&self) -> bool {
        self.picture.as_ref().map_or(true, Result::is_ok)
            && self.fields.as_ref().map_or(true, Result::is_ok)
    }
}

/// Profile editing service
pub struct ProfileEditor {
    client: ApiClient,
    session: SessionStore,
    picker: Arc<dyn ImagePicker>,
}

impl ProfileEditor {
    /// Create a new profile editor
    pub fn new(client: ApiClient, session: SessionStore, picker: Arc<dyn ImagePicker>) -> Self {
        Self { client, session, picker }
    }

    /// Fetch the signed-in user's profile
    pub async fn fetch(&self) -> Result<UserProfile> {
        let credentials = self.session.credentials().ok_or(ProfileError::NoSession)?;

        match self
            .client
            .user(&credentials.token, &credentials.user_id)
            .await
        {
            Ok(profile) => Ok(profile),
            Err(e) => Err(self.map_error(e)),
        }
    }

    /// Run the fetch-on-mount cycle into a screen load state
    pub async fn refresh(&self, state: &mut ProfileLoadState) {
        state.start();
        state.resolve(self.fetch().await);
    }

    /// Let the user pick a new profile picture from the library
    ///
    /// Returns `None` when the permission is denied or the user cancels.
    pub async fn choose_from_library(&self) -> Result<Option<PickedImage>> {
        if !self.picker.request_library_permission().await.is_granted() {
            return Ok(None);
        }
        Ok(self.picker.pick_from_library().await?)
    }

    /// Let the user take a new profile picture with the camera
    ///
    /// Returns `None` when the permission is denied or the user cancels.
    pub async fn capture_photo(&self) -> Result<Option<PickedImage>> {
        if !self.picker.request_camera_permission().await.is_granted() {
            return Ok(None);
        }
        Ok(self.picker.take_photo().await?)
    }

    /// Save pending edits
    ///
    /// Runs the picture upload and the field update as independent
    /// operations; each can succeed or fail on its own and both results
    /// are reported. Rejects the call locally when neither is pending.
    pub async fn save(
        &self,
        fields: Option<ProfileUpdate>,
        picture: Option<PickedImage>,
    ) -> Result<SaveOutcome> {
        if fields.is_none() && picture.is_none() {
            return Err(ProfileError::NothingToUpdate);
        }

        let credentials = self.session.credentials().ok_or(ProfileError::NoSession)?;
        let mut outcome = SaveOutcome::default();

        if let Some(image) = picture {
            let result = self
                .client
                .upload_picture(
                    &credentials.token,
                    image.bytes,
                    image.file_name,
                    image.mime_type,
                )
                .await
                .map_err(|e| self.map_error(e));
            outcome.picture = Some(result);
        }

        if let Some(update) = fields {
            let result = self
                .client
                .update_profile(&credentials.token, &update)
                .await
                .map_err(|e| self.map_error(e));
            outcome.fields = Some(result);
        }

        Ok(outcome)
    }

    fn map_error(&self, error: ApiError) -> ProfileError {
        if error.is_unauthorized() {
            self.session.clear();
            ProfileError::Unauthorized
        } else if error.is_unavailable() {
            ProfileError::ServiceUnavailable
        } else {
            ProfileError::Other(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_platform::images::MockImagePicker;
    use app_platform::PermissionStatus;
    use rooms_client::RestClientConfig;
    use storage::KvStore;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn editor_for(server: &MockServer, picker: MockImagePicker) -> (ProfileEditor, SessionStore) {
        let session = SessionStore::new(KvStore::in_memory().unwrap());
        session.bootstrap();
        session.set_session(Some("tok"), Some("user1"));
        let client = ApiClient::new(RestClientConfig::new(server.uri())).unwrap();
        (
            ProfileEditor::new(client, session.clone(), Arc::new(picker)),
            session,
        )
    }

    fn profile_json(username: &str) -> serde_json::Value {
        serde_json::json!({
            "_id": "user1",
            "username": username,
            "email": "alice@example.com",
            "description": "Traveler"
        })
    }

    fn picked_image() -> PickedImage {
        PickedImage {
            file_name: "userPicture.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8],
        }
    }

    #[tokio::test]
    async fn test_fetch_own_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/user1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("alice")))
            .mount(&server)
            .await;

        let (editor, _session) = editor_for(&server, MockImagePicker::new());
        let profile = editor.fetch().await.unwrap();

        assert_eq!(profile.username, "alice");
    }

    #[tokio::test]
    async fn test_fetch_401_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/user1"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"error": "Unauthorized"})),
            )
            .mount(&server)
            .await;

        let (editor, session) = editor_for(&server, MockImagePicker::new());
        let error = editor.fetch().await.unwrap_err();

        assert!(matches!(error, ProfileError::Unauthorized));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_save_with_nothing_dirty_is_rejected() {
        let server = MockServer::start().await;
        let (editor, _session) = editor_for(&server, MockImagePicker::new());

        let error = editor.save(None, None).await.unwrap_err();
        assert!(matches!(error, ProfileError::NothingToUpdate));
    }

    #[tokio::test]
    async fn test_save_fields_only() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/user/update"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("alice2")))
            .mount(&server)
            .await;

        let (editor, _session) = editor_for(&server, MockImagePicker::new());
        let update = ProfileUpdate {
            email: "alice@example.com".to_string(),
            username: "alice2".to_string(),
            description: "Traveler".to_string(),
        };

        let outcome = editor.save(Some(update), None).await.unwrap();
        assert!(outcome.is_success());
        assert!(outcome.picture.is_none());
        assert_eq!(
            outcome.fields.unwrap().unwrap().username,
            "alice2".to_string()
        );
    }

    #[tokio::test]
    async fn test_save_reports_sub_operations_independently() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/user/upload_picture"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/user/update"))
            .respond_with(ResponseTemplate::new(200).set_body_json(profile_json("alice2")))
            .mount(&server)
            .await;

        let (editor, _session) = editor_for(&server, MockImagePicker::new());
        let update = ProfileUpdate {
            email: "alice@example.com".to_string(),
            username: "alice2".to_string(),
            description: "Traveler".to_string(),
        };

        let outcome = editor.save(Some(update), Some(picked_image())).await.unwrap();

        // The upload failed but the field update still went through.
        assert!(!outcome.is_success());
        assert!(outcome.picture.unwrap().is_err());
        assert!(outcome.fields.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_choose_from_library_permission_denied() {
        let server = MockServer::start().await;
        let mut picker = MockImagePicker::new();
        picker
            .expect_request_library_permission()
            .returning(|| PermissionStatus::Denied);

        let (editor, _session) = editor_for(&server, picker);
        let image = editor.choose_from_library().await.unwrap();
        assert!(image.is_none());
    }

    #[tokio::test]
    async fn test_capture_photo_selection() {
        let server = MockServer::start().await;
        let mut picker = MockImagePicker::new();
        picker
            .expect_request_camera_permission()
            .returning(|| PermissionStatus::Granted);
        picker
            .expect_take_photo()
            .returning(|| Ok(Some(picked_image())));

        let (editor, _session) = editor_for(&server, picker);
        let image = editor.capture_photo().await.unwrap().unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
    }
}

//! Image selection capability
//!
//! Profile editing lets the user pick a photo from the library or take
//! one with the camera. Both flows request their own permission and can
//! be cancelled, in which case no image is returned.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::location::PermissionStatus;

/// Image capability error types
#[derive(Debug, Error)]
pub enum ImageError {
    /// The platform failed to read the selected image
    #[error("Image unavailable: {0}")]
    Unavailable(String),
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;

/// An image the user selected or captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedImage {
    /// File name for upload (e.g., "userPicture.jpg")
    pub file_name: String,
    /// MIME type (e.g., "image/jpeg")
    pub mime_type: String,
    /// Raw image bytes
    pub bytes: Vec<u8>,
}

/// Provider of photo-library and camera image selection
#[automock]
#[async_trait]
pub trait ImagePicker: Send + Sync {
    /// Ask the user for photo-library permission
    async fn request_library_permission(&self) -> PermissionStatus;

    /// Ask the user for camera permission
    async fn request_camera_permission(&self) -> PermissionStatus;

    /// Let the user pick an image from the library
    ///
    /// Returns `None` when the user cancels the picker.
    async fn pick_from_library(&self) -> Result<Option<PickedImage>>;

    /// Let the user take a photo with the camera
    ///
    /// Returns `None` when the user cancels.
    async fn take_photo(&self) -> Result<Option<PickedImage>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_picker_cancellation() {
        let mut picker = MockImagePicker::new();
        picker
            .expect_request_library_permission()
            .returning(|| PermissionStatus::Granted);
        picker.expect_pick_from_library().returning(|| Ok(None));

        assert!(picker.request_library_permission().await.is_granted());
        assert!(picker.pick_from_library().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_picker_selection() {
        let mut picker = MockImagePicker::new();
        picker.expect_take_photo().returning(|| {
            Ok(Some(PickedImage {
                file_name: "userPicture.jpg".to_string(),
                mime_type: "image/jpeg".to_string(),
                bytes: vec![1, 2, 3],
            }))
        });

        let image = picker.take_photo().await.unwrap().unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
    }
}

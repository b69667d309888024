//! Wire types for the rooms API
//!
//! These structures mirror the JSON documents the API returns. Rooms are
//! read-only on the client side; only the user profile is ever submitted
//! back. Field names follow the API exactly (`_id`, `ratingValue`, ...).

use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

/// A geographic coordinate as the API transmits it
///
/// The API encodes locations as a two-element array in
/// **longitude-before-latitude** order, the reverse of the conventional
/// ordering. This type exists so the inversion is absorbed once at the
/// wire boundary and can never be silently swapped downstream.
///
/// # Examples
/// ```
/// use rooms_client::types::Coordinate;
///
/// let coord: Coordinate = serde_json::from_str("[2.4002913, 48.8564449]").unwrap();
/// assert_eq!(coord.longitude, 2.4002913);
/// assert_eq!(coord.latitude, 48.8564449);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Longitude in degrees (first array element)
    pub longitude: f64,
    /// Latitude in degrees (second array element)
    pub latitude: f64,
}

impl Coordinate {
    /// Create a coordinate from the conventional latitude/longitude order
    pub fn from_lat_lon(latitude: f64, longitude: f64) -> Self {
        Self { longitude, latitude }
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Wire order is [longitude, latitude]
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.longitude)?;
        tuple.serialize_element(&self.latitude)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = <Vec<f64>>::deserialize(deserializer)?;
        if values.len() != 2 {
            return Err(D::Error::custom(format!(
                "expected [longitude, latitude], got {} elements",
                values.len()
            )));
        }
        Ok(Coordinate {
            longitude: values[0],
            latitude: values[1],
        })
    }
}

/// A hosted photo reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Public URL of the image
    pub url: String,
    /// Hosting identifier of the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_id: Option<String>,
}

/// Public account data nested inside a room's owner reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOwnerAccount {
    /// Owner's username
    pub username: String,
    /// Owner's profile photo, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
}

/// The owning-user reference embedded in room documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomOwner {
    /// Owner's user id
    #[serde(rename = "_id")]
    pub id: String,
    /// Owner's public account data
    pub account: RoomOwnerAccount,
}

/// A room as listed in the home feed
///
/// Read-only, sourced entirely from the API response; never mutated
/// locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSummary {
    /// Room id
    #[serde(rename = "_id")]
    pub id: String,

    /// Listing title
    pub title: String,

    /// Nightly price
    pub price: f64,

    /// Rating from 0 to 5
    #[serde(rename = "ratingValue")]
    pub rating_value: u8,

    /// Number of reviews behind the rating
    pub reviews: u32,

    /// Photo carousel entries
    pub photos: Vec<Photo>,

    /// Owning user, when the API includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RoomOwner>,
}

/// A room as returned by the detail and nearby endpoints
///
/// Superset of [`RoomSummary`] adding the description text and the
/// geographic location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDetail {
    /// Room id
    #[serde(rename = "_id")]
    pub id: String,

    /// Listing title
    pub title: String,

    /// Nightly price
    pub price: f64,

    /// Rating from 0 to 5
    #[serde(rename = "ratingValue")]
    pub rating_value: u8,

    /// Number of reviews behind the rating
    pub reviews: u32,

    /// Photo carousel entries
    pub photos: Vec<Photo>,

    /// Full description text
    #[serde(default)]
    pub description: String,

    /// Geographic location ([longitude, latitude] on the wire)
    pub location: Coordinate,

    /// Owning user, when the API includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<RoomOwner>,
}

/// A user profile document
///
/// Mutable locally during edit and submitted wholesale (or as a
/// picture-only update) back to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User id
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Username
    pub username: String,

    /// Email address
    pub email: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Profile photo, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,
}

/// Successful sign-in / sign-up payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSuccess {
    /// Session token for bearer authentication
    pub token: String,
    /// Authenticated user's id
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_wire_order_is_longitude_first() {
        let coord: Coordinate = serde_json::from_str("[2.4002913, 48.8564449]").unwrap();
        assert_eq!(coord.longitude, 2.4002913);
        assert_eq!(coord.latitude, 48.8564449);

        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(json, "[2.4002913,48.8564449]");
    }

    #[test]
    fn test_coordinate_rejects_wrong_length() {
        let result: Result<Coordinate, _> = serde_json::from_str("[2.4]");
        assert!(result.is_err());

        let result: Result<Coordinate, _> = serde_json::from_str("[1.0, 2.0, 3.0]");
        assert!(result.is_err());
    }

    #[test]
    fn test_coordinate_from_lat_lon() {
        let coord = Coordinate::from_lat_lon(48.85, 2.35);
        assert_eq!(coord.latitude, 48.85);
        assert_eq!(coord.longitude, 2.35);
    }

    #[test]
    fn test_room_summary_deserialization() {
        let json = serde_json::json!({
            "_id": "room1",
            "title": "Appartement cosy",
            "price": 80,
            "ratingValue": 4,
            "reviews": 12,
            "photos": [{"url": "https://img.example.com/1.jpg", "picture_id": "p1"}],
            "user": {
                "_id": "user1",
                "account": {
                    "username": "alice",
                    "photo": {"url": "https://img.example.com/alice.jpg"}
                }
            }
        });

        let room: RoomSummary = serde_json::from_value(json).unwrap();
        assert_eq!(room.id, "room1");
        assert_eq!(room.price, 80.0);
        assert_eq!(room.rating_value, 4);
        assert_eq!(room.photos.len(), 1);
        assert_eq!(room.user.unwrap().account.username, "alice");
    }

    #[test]
    fn test_room_summary_without_user() {
        let json = serde_json::json!({
            "_id": "room2",
            "title": "Studio",
            "price": 55,
            "ratingValue": 5,
            "reviews": 3,
            "photos": []
        });

        let room: RoomSummary = serde_json::from_value(json).unwrap();
        assert!(room.user.is_none());
    }

    #[test]
    fn test_room_detail_deserialization() {
        let json = serde_json::json!({
            "_id": "room3",
            "title": "Loft",
            "price": 120,
            "ratingValue": 3,
            "reviews": 40,
            "photos": [{"url": "https://img.example.com/3.jpg"}],
            "description": "A bright loft near the canal.",
            "location": [2.4002913, 48.8564449]
        });

        let room: RoomDetail = serde_json::from_value(json).unwrap();
        assert_eq!(room.description, "A bright loft near the canal.");
        assert_eq!(room.location.longitude, 2.4002913);
        assert_eq!(room.location.latitude, 48.8564449);
    }

    #[test]
    fn test_user_profile_roundtrip() {
        let profile = UserProfile {
            id: Some("user1".to_string()),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            description: "Traveler".to_string(),
            photo: None,
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"_id\":\"user1\""));
        assert!(!json.contains("photo"));

        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_auth_success_deserialization() {
        let auth: AuthSuccess =
            serde_json::from_str(r#"{"token": "abc", "id": "1"}"#).unwrap();
        assert_eq!(auth.token, "abc");
        assert_eq!(auth.id, "1");
    }
}

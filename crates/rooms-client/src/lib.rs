//! Rooms API client library
//!
//! This crate provides the Rust client for the StayFinder rooms REST API,
//! including the HTTP transport, the wire types for rooms and users, and
//! the high-level `ApiClient` covering every endpoint the application
//! consumes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod rest;
pub mod types;

pub use client::{ApiClient, ProfileUpdate, SignUpParams};
pub use rest::{ApiError, RestClient, RestClientConfig, RestRequest};
pub use types::{
    AuthSuccess, Coordinate, Photo, RoomDetail, RoomOwner, RoomOwnerAccount, RoomSummary,
    UserProfile,
};

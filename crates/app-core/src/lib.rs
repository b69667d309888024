//! Core application logic for StayFinder
//!
//! This crate contains the screen-level services: authentication flows,
//! the room feed, room detail, nearby rooms, and profile editing. Every
//! service reads with the current session token and funnels
//! authentication rejections into the session store's clearing call.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod around;
pub mod auth;
pub mod feeds;
pub mod profile;
pub mod rooms;

//! Platform capabilities for StayFinder
//!
//! This crate defines the device capability seams the application relies
//! on: foreground location and image selection. Each capability is a
//! trait so the UI shell supplies the real device integration while
//! tests use the generated mocks.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod images;
pub mod location;

pub use images::{ImagePicker, PickedImage};
pub use location::{LocationProvider, PermissionStatus, Position};

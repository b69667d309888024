//! Navigation structure for StayFinder
//!
//! This crate models the screen tree the application mounts: routes,
//! tabs, per-tab stacks, and the gate-driven switch between the
//! unauthenticated and authenticated groups. Rendering is out of scope;
//! a UI shell consumes these structures.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;

pub use navigation::{
    AppNavigator, NavigationStack, NavigationTab, Route, ScreenTree, StackEntry,
};

//! Storage layer for StayFinder
//!
//! This crate provides the local key-value store backing the persisted
//! session entries. It is the only durable state in the application.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;

pub use kv::{KvConfig, KvError, KvStore};

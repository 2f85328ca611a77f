//! Bookmark Manager Shared Library
//!
//! Request and response types shared by the backend and its API clients.

pub mod types;

pub use types::*;

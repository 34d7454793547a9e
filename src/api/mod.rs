//! REST API client module for the trip persistence backend.
//!
//! This module provides the `StoreClient` for listing and creating saved
//! trips and design templates. The backend treats both as opaque named JSON
//! blobs; see `models::saved` for the wire shapes.

pub mod client;
pub mod error;

pub use client::StoreClient;
pub use error::ApiError;

//! tripbrief - golf trip itinerary builder.
//!
//! Imports semi-structured spreadsheet templates into a normalized itinerary
//! document, renders preview HTML, and persists trips and reusable design
//! templates through a small REST key/value backend.

pub mod api;
pub mod app;
pub mod config;
pub mod drafts;
pub mod extract;
pub mod models;
pub mod render;
pub mod utils;

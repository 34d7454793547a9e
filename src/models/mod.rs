//! Data models for itinerary documents and the persistence wire format.
//!
//! - `Itinerary` and its parts: the normalized document produced by
//!   extraction and consumed by rendering and persistence
//! - `SavedRecord` / `NewRecord`: records exchanged with the trips/templates
//!   backend
//! - `Collection`: which backend table a record belongs to

pub mod document;
pub mod saved;

pub use document::{AirportMeeting, Itinerary, LocalMeeting, ScheduleDay, TeeTime};
pub use saved::{Collection, NewRecord, SavedRecord};

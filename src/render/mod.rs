//! Preview HTML rendering.
//!
//! Turns an `Itinerary` into a standalone HTML page: a header with the title
//! and travel period, then one section box per topic (meetings, tee times,
//! schedule, flights, accommodation, notes, company contact). Sections with
//! no data are omitted; meetings honor their `include` flag and schedule
//! entries their `includePreview` flag.

mod sections;

pub use sections::render_preview;

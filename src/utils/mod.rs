//! Utility functions for string and date display formatting.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{display_date_korean, format_phone, truncate_string};

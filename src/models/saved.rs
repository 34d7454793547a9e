use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The two backend collections. Both are plain key/value tables with the
/// same record shape; trips hold full itinerary documents, templates hold
/// design-only settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Trips,
    Templates,
}

impl Collection {
    /// Path segment under `/api/`
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Trips => "trips",
            Collection::Templates => "templates",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collection::Trips => write!(f, "trips"),
            Collection::Templates => write!(f, "templates"),
        }
    }
}

/// A record as returned by `GET /api/{collection}`, newest first.
/// `data` stays an opaque JSON blob: trips carry an `Itinerary`, templates a
/// design subset, and the store does not care which.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecord {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub data: serde_json::Value,
    #[serde(rename = "savedAt")]
    pub saved_at: String,
}

/// Body for `POST /api/{collection}`.
#[derive(Debug, Clone, Serialize)]
pub struct NewRecord {
    pub name: String,
    pub data: serde_json::Value,
    #[serde(rename = "savedAt")]
    pub saved_at: String,
}

impl NewRecord {
    pub fn new(name: &str, data: serde_json::Value) -> Self {
        Self {
            name: name.to_string(),
            data,
            saved_at: Utc::now().to_rfc3339(),
        }
    }
}

//! Local draft persistence.
//!
//! `import` runs once per spreadsheet and later commands (`preview`, `save`)
//! operate on the result, so the extracted document is kept as a draft file
//! under the user cache directory between invocations. One draft at a time;
//! importing again overwrites it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Itinerary;

const DRAFT_FILE: &str = "draft.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub itinerary: Itinerary,
    pub source_file: String,
    pub imported_at: DateTime<Utc>,
}

impl Draft {
    pub fn new(itinerary: Itinerary, source: &Path) -> Self {
        Self {
            itinerary,
            source_file: source.display().to_string(),
            imported_at: Utc::now(),
        }
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.imported_at).num_minutes()
    }

    pub fn age_display(&self) -> String {
        let minutes = self.age_minutes();
        if minutes < 1 {
            "just now".to_string()
        } else if minutes < 60 {
            format!("{}m ago", minutes)
        } else if minutes < 1440 {
            format!("{}h ago", minutes / 60)
        } else {
            format!("{}d ago", minutes / 1440)
        }
    }
}

pub struct DraftStore {
    dir: PathBuf,
}

impl DraftStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create draft directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn draft_path(&self) -> PathBuf {
        self.dir.join(DRAFT_FILE)
    }

    pub fn save(&self, draft: &Draft) -> Result<()> {
        let path = self.draft_path();
        let contents = serde_json::to_string_pretty(draft)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write draft to {}", path.display()))?;
        debug!(path = %path.display(), "draft saved");
        Ok(())
    }

    pub fn load(&self) -> Result<Option<Draft>> {
        let path = self.draft_path();
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read draft from {}", path.display()))?;

        let draft: Draft =
            serde_json::from_str(&contents).context("Failed to parse draft file")?;

        Ok(Some(draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft() -> Draft {
        Draft::new(Itinerary::default(), Path::new("trip.xlsx"))
    }

    #[test]
    fn test_age_display_just_now() {
        assert_eq!(draft().age_display(), "just now");
    }

    #[test]
    fn test_age_display_buckets() {
        let mut d = draft();
        d.imported_at = Utc::now() - Duration::minutes(5);
        assert_eq!(d.age_display(), "5m ago");
        d.imported_at = Utc::now() - Duration::minutes(130);
        assert_eq!(d.age_display(), "2h ago");
        d.imported_at = Utc::now() - Duration::days(3);
        assert_eq!(d.age_display(), "3d ago");
    }

    #[test]
    fn test_draft_round_trip_serialization() {
        let d = draft();
        let json = serde_json::to_string(&d).unwrap();
        let back: Draft = serde_json::from_str(&json).unwrap();
        assert_eq!(back.source_file, "trip.xlsx");
        assert_eq!(back.imported_at, d.imported_at);
    }
}

//! Application flows connecting extraction, rendering, drafts, and the
//! persistence backend. The CLI in `main.rs` is a thin layer over this.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::api::StoreClient;
use crate::config::Config;
use crate::drafts::{Draft, DraftStore};
use crate::extract::{extract, read_rows};
use crate::models::{Collection, Itinerary, NewRecord, SavedRecord};
use crate::render::render_preview;

pub struct App {
    config: Config,
    store: StoreClient,
    drafts: DraftStore,
}

impl App {
    pub fn new(server_flag: Option<&str>) -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        let server_url = config.resolve_server_url(server_flag);
        let store = StoreClient::new(&server_url)?;
        let drafts = DraftStore::new(config.draft_dir()?)?;
        Ok(Self {
            config,
            store,
            drafts,
        })
    }

    /// Read a spreadsheet, extract the itinerary, and keep it as the current
    /// draft.
    pub fn import(&self, path: &Path) -> Result<Itinerary> {
        let rows = read_rows(path)
            .with_context(|| format!("Failed to read spreadsheet {}", path.display()))?;
        let doc = extract(&rows)?;
        self.drafts.save(&Draft::new(doc.clone(), path))?;
        info!(file = %path.display(), "spreadsheet imported");
        Ok(doc)
    }

    /// The document a command operates on: an explicit JSON file when given,
    /// otherwise the current draft.
    pub fn load_document(&self, file: Option<&Path>) -> Result<Itinerary> {
        if let Some(path) = file {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read document {}", path.display()))?;
            return serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse document {}", path.display()));
        }
        match self.drafts.load()? {
            Some(draft) => {
                info!(
                    source = %draft.source_file,
                    age = %draft.age_display(),
                    "using current draft"
                );
                Ok(draft.itinerary)
            }
            None => bail!("No draft found. Run `tripbrief import <file.xlsx>` first."),
        }
    }

    /// Render the document to a preview HTML file.
    pub fn write_preview(&self, doc: &Itinerary, out: &Path) -> Result<()> {
        let html = render_preview(doc);
        std::fs::write(out, html)
            .with_context(|| format!("Failed to write preview to {}", out.display()))?;
        info!(out = %out.display(), "preview written");
        Ok(())
    }

    /// Save an itinerary under a name in the trips collection.
    pub async fn save_trip(&mut self, name: &str, doc: &Itinerary) -> Result<i64> {
        let data = serde_json::to_value(doc)?;
        let id = self
            .store
            .create(Collection::Trips, &NewRecord::new(name, data))
            .await?;
        self.config.last_trip_name = Some(name.to_string());
        // A failed config write should not undo a successful save
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "could not persist last trip name");
        }
        Ok(id)
    }

    /// Save a design-settings blob under a name in the templates collection.
    pub async fn save_template(&self, name: &str, design: serde_json::Value) -> Result<i64> {
        self.store
            .create(Collection::Templates, &NewRecord::new(name, design))
            .await
    }

    pub async fn list(&self, collection: Collection) -> Result<Vec<SavedRecord>> {
        self.store.list(collection).await
    }
}

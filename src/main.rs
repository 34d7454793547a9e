//! tripbrief CLI - build golf trip itineraries from spreadsheets.
//!
//! `import` converts a template spreadsheet into an itinerary draft,
//! `preview` renders the draft as HTML, `save`/`save-template` push to the
//! companion backend, and `trips`/`templates` list what is already saved.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tripbrief::app::App;
use tripbrief::models::{Collection, Itinerary, SavedRecord};
use tripbrief::utils::{display_date_korean, truncate_string};

#[derive(Parser)]
#[command(name = "tripbrief", version, about = "Golf trip itinerary builder")]
struct Cli {
    /// Backend URL (overrides TRIPBRIEF_SERVER and the config file)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import a trip template spreadsheet (.xlsx/.xls) into a draft
    Import {
        /// Spreadsheet to import
        file: PathBuf,
        /// Also write the extracted document as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Render the draft (or a document file) as preview HTML
    Preview {
        /// Document JSON to render instead of the draft
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output path
        #[arg(short, long, default_value = "preview.html")]
        out: PathBuf,
    },
    /// Save the draft (or a document file) as a named trip
    Save {
        /// Name to save the trip under
        #[arg(long)]
        name: String,
        /// Document JSON to save instead of the draft
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Save a design-settings JSON file as a named template
    SaveTemplate {
        /// Name to save the template under
        #[arg(long)]
        name: String,
        /// Design settings JSON file
        #[arg(long)]
        file: PathBuf,
    },
    /// List saved trips
    Trips,
    /// List saved design templates
    Templates,
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();
    let mut app = App::new(cli.server.as_deref())?;

    match cli.command {
        Command::Import { file, json } => {
            let doc = app.import(&file)?;
            print_summary(&doc);
            if let Some(path) = json {
                std::fs::write(&path, serde_json::to_string_pretty(&doc)?)?;
                println!("Document written to {}", path.display());
            }
        }
        Command::Preview { file, out } => {
            let doc = app.load_document(file.as_deref())?;
            app.write_preview(&doc, &out)?;
            println!("Preview written to {}", out.display());
        }
        Command::Save { name, file } => {
            let doc = app.load_document(file.as_deref())?;
            let id = app.save_trip(&name, &doc).await?;
            info!(id, name = %name, "trip saved");
            println!("Saved trip '{}' (id {})", name, id);
        }
        Command::SaveTemplate { name, file } => {
            let contents = std::fs::read_to_string(&file)?;
            let design: serde_json::Value = serde_json::from_str(&contents)?;
            let id = app.save_template(&name, design).await?;
            println!("Saved template '{}' (id {})", name, id);
        }
        Command::Trips => {
            print_records(&app.list(Collection::Trips).await?);
        }
        Command::Templates => {
            print_records(&app.list(Collection::Templates).await?);
        }
    }

    Ok(())
}

fn print_summary(doc: &Itinerary) {
    let title = if doc.title.is_empty() {
        "(untitled)"
    } else {
        doc.title.as_str()
    };
    println!("Imported: {}", title);
    if let Some(period) = doc.period() {
        println!(
            "  Period: {} ({})",
            period,
            display_date_korean(&doc.start_date)
        );
    }
    if !doc.accommodation.is_empty() {
        println!("  Stay:   {}", doc.accommodation);
    }
    println!("  Rounds: {}", doc.tee_times.len());
    for tee in &doc.tee_times {
        println!("    - {} {} {}", tee.date, tee.time, tee.course_name);
    }
    println!("  Days:   {}", doc.schedules.len());
    for schedule in &doc.schedules {
        println!(
            "    - {} {}",
            schedule.date,
            truncate_string(&schedule.title, 40)
        );
    }
}

fn print_records(records: &[SavedRecord]) {
    if records.is_empty() {
        println!("Nothing saved yet.");
        return;
    }
    for record in records {
        println!(
            "{:>5}  {}  {}",
            record.id,
            record.saved_at,
            truncate_string(&record.name, 50)
        );
    }
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line tool for converting profile PDFs to spreadsheets.
//!
//! ```text
//! dossier convert <input.pdf> [--output Output.xlsx]
//! dossier preview <input.pdf> [--limit 10]
//! dossier rows <input.pdf>
//! dossier serve
//! ```
//!
//! Running `dossier` with no subcommand enters interactive mode.

mod interactive;
mod preview;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dossier_convert::DEFAULT_OUTPUT;
use dossier_server::ServerConfig;
use dossier_server_models::ApiRows;

/// Rows shown by `preview` unless `--limit` says otherwise.
const DEFAULT_PREVIEW_ROWS: usize = 10;

#[derive(Parser)]
#[command(
    name = "dossier",
    about = "Extract profile fields from a narrative PDF into a spreadsheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PDF into a spreadsheet
    Convert {
        /// PDF to read
        input: PathBuf,
        /// Spreadsheet to write
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Print the first extracted rows as a table
    Preview {
        /// PDF to read
        input: PathBuf,
        /// Maximum number of rows to show
        #[arg(long, default_value_t = DEFAULT_PREVIEW_ROWS)]
        limit: usize,
    },
    /// Print every extracted row as JSON
    Rows {
        /// PDF to read
        input: PathBuf,
    },
    /// Start the HTTP server
    Serve,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return interactive::run();
    };

    match command {
        Commands::Convert { input, output } => convert(&input, &output)?,
        Commands::Preview { input, limit } => preview(&input, limit)?,
        Commands::Rows { input } => {
            let rows = dossier_convert::extract_file(&input)?;
            println!("{}", serde_json::to_string_pretty(&ApiRows::from(rows))?);
        }
        Commands::Serve => {
            log::info!("Starting server from the command line");
            actix_web::rt::System::new()
                .block_on(dossier_server::run_server(ServerConfig::from_env()))?;
        }
    }

    Ok(())
}

/// Converts `input` into a spreadsheet at `output` and reports the result.
fn convert(input: &Path, output: &Path) -> Result<(), dossier_convert::ConvertError> {
    log::info!("Converting {} -> {}", input.display(), output.display());
    let conversion = dossier_convert::convert_file(input, output)?;

    println!("Data extracted successfully!");
    println!("Output saved to: {}", output.display());
    println!("Total rows extracted: {}", conversion.rows.len());

    Ok(())
}

/// Prints the first `limit` rows extracted from `input`.
fn preview(input: &Path, limit: usize) -> Result<(), dossier_convert::ConvertError> {
    let rows = dossier_convert::extract_file(input)?;
    log::debug!("Previewing {limit} of {} row(s)", rows.len());

    if rows.is_empty() {
        println!("No fields matched in {}.", input.display());
        return Ok(());
    }

    print!("{}", preview::render(&rows, limit));
    Ok(())
}

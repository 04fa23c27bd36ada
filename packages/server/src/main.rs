#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web upload service for converting profile PDFs to spreadsheets.
//!
//! Reads `BIND_ADDR`, `PORT`, `MAX_UPLOAD_BYTES` and `SAMPLE_PDF` from the
//! environment and logs through `RUST_LOG`.

use dossier_server::{ServerConfig, run_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    run_server(ServerConfig::from_env()).await
}

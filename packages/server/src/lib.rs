#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web upload service for converting profile PDFs to spreadsheets.
//!
//! Clients `POST` the raw PDF bytes and get back either the `.xlsx`
//! workbook as a download or the extracted rows as JSON. Uploads are
//! converted entirely in memory on actix's blocking thread pool, one
//! independent conversion per request.
//!
//! Configuration comes from the environment, see [`ServerConfig`].

mod handlers;
pub mod interactive;

use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

/// Default upload limit: 16 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Default document served by `GET /api/demo`.
pub const DEFAULT_SAMPLE_PDF: &str = "Data Input.pdf";

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`).
    pub bind_addr: String,
    /// Port to listen on (`PORT`).
    pub port: u16,
    /// Largest accepted upload in bytes (`MAX_UPLOAD_BYTES`).
    pub max_upload_bytes: usize,
    /// PDF converted by the demo endpoint (`SAMPLE_PDF`).
    pub sample_pdf: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            sample_pdf: PathBuf::from(DEFAULT_SAMPLE_PDF),
        }
    }
}

impl ServerConfig {
    /// Reads settings from the environment, falling back to defaults for
    /// anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            max_upload_bytes: lookup("MAX_UPLOAD_BYTES")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
            sample_pdf: lookup("SAMPLE_PDF").map_or(defaults.sample_pdf, PathBuf::from),
        }
    }
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// PDF converted by the demo endpoint.
    pub sample_pdf: PathBuf,
}

/// Registers the API routes.
///
/// Split out from [`run_server`] so tests can mount the same routes on a
/// test service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/extract", web::post().to(handlers::extract))
            .route("/extract/rows", web::post().to(handlers::extract_rows))
            .route("/demo", web::get().to(handlers::demo)),
    );
}

/// Starts the dossier HTTP server.
///
/// This is a regular async function; the caller provides the actix
/// runtime (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let state = web::Data::new(AppState {
        sample_pdf: config.sample_pdf.clone(),
    });
    let max_upload_bytes = config.max_upload_bytes;

    log::info!(
        "Starting server on {}:{} (upload limit {} bytes)",
        config.bind_addr,
        config.port,
        max_upload_bytes
    );

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .configure(configure)
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await
}

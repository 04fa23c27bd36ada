#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the dossier server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the extraction row types to allow independent evolution of the API
//! contract.

use dossier_profile_models::{CellValue, Row};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealth {
    /// Whether the service is up.
    pub healthy: bool,
    /// Crate version of the server.
    pub version: String,
}

/// One extracted row as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRow {
    /// 1-based row number (the `#` column).
    pub index: usize,
    /// Field label.
    pub key: String,
    /// Typed value; `null` for narrative-only rows.
    pub value: Option<CellValue>,
    /// Annotation from the `Comments` column.
    pub comment: Option<String>,
}

impl From<Row> for ApiRow {
    fn from(row: Row) -> Self {
        Self {
            index: row.index,
            key: row.key,
            value: row.value,
            comment: row.comment,
        }
    }
}

/// Response body of the JSON extraction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRows {
    /// Number of rows extracted.
    pub row_count: usize,
    /// Rows in table order.
    pub rows: Vec<ApiRow>,
}

impl From<Vec<Row>> for ApiRows {
    fn from(rows: Vec<Row>) -> Self {
        Self {
            row_count: rows.len(),
            rows: rows.into_iter().map(ApiRow::from).collect(),
        }
    }
}

/// Error body returned with every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable description.
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

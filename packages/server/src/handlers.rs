//! HTTP handler functions for the dossier API.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use dossier_convert::ConvertError;
use dossier_profile_models::Row;
use dossier_server_models::{ApiError, ApiHealth, ApiRows};
use dossier_xlsx::XLSX_MIME_TYPE;

use crate::AppState;

/// Download name for converted uploads.
const UPLOAD_FILENAME: &str = "extracted_data.xlsx";

/// Download name for the bundled sample.
const DEMO_FILENAME: &str = "demo_output.xlsx";

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/extract`
///
/// Converts the uploaded PDF body and returns the workbook as a download.
pub async fn extract(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    if let Some(rejection) = reject_upload(&req, &body) {
        return rejection;
    }

    match convert(body).await {
        Ok((_, bytes)) => attachment(bytes, UPLOAD_FILENAME),
        Err(response) => response,
    }
}

/// `POST /api/extract/rows`
///
/// Converts the uploaded PDF body and returns the extracted rows as JSON.
pub async fn extract_rows(req: HttpRequest, body: web::Bytes) -> HttpResponse {
    if let Some(rejection) = reject_upload(&req, &body) {
        return rejection;
    }

    let result = web::block(move || dossier_convert::extract_bytes(&body)).await;

    match flatten(result) {
        Ok(rows) => HttpResponse::Ok().json(ApiRows::from(rows)),
        Err(response) => response,
    }
}

/// `GET /api/demo`
///
/// Converts the configured sample PDF.
pub async fn demo(state: web::Data<AppState>) -> HttpResponse {
    let path = state.sample_pdf.clone();

    let bytes = match web::block(move || std::fs::read(path)).await {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            log::error!(
                "Failed to read sample PDF {}: {e}",
                state.sample_pdf.display()
            );
            return HttpResponse::NotFound().json(ApiError::new("Sample document not available"));
        }
        Err(e) => {
            log::error!("Blocking task failed: {e}");
            return HttpResponse::InternalServerError().json(ApiError::new("Conversion failed"));
        }
    };

    match convert(web::Bytes::from(bytes)).await {
        Ok((_, bytes)) => attachment(bytes, DEMO_FILENAME),
        Err(response) => response,
    }
}

/// Runs a full conversion on the blocking pool.
async fn convert(pdf: web::Bytes) -> Result<(Vec<Row>, Vec<u8>), HttpResponse> {
    flatten(web::block(move || dossier_convert::convert_bytes(&pdf)).await)
}

fn flatten<T>(
    result: Result<Result<T, ConvertError>, actix_web::error::BlockingError>,
) -> Result<T, HttpResponse> {
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(error_response(&e)),
        Err(e) => {
            log::error!("Blocking task failed: {e}");
            Err(HttpResponse::InternalServerError().json(ApiError::new("Conversion failed")))
        }
    }
}

/// Rejects empty bodies and content types that cannot be a PDF.
fn reject_upload(req: &HttpRequest, body: &web::Bytes) -> Option<HttpResponse> {
    if body.is_empty() {
        return Some(HttpResponse::BadRequest().json(ApiError::new("No file uploaded")));
    }

    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(';').next().unwrap_or_default().trim().to_ascii_lowercase());

    match content_type.as_deref() {
        None | Some("application/pdf" | "application/octet-stream") => None,
        Some(other) => {
            log::debug!("Rejected upload with content type {other}");
            Some(
                HttpResponse::UnsupportedMediaType()
                    .json(ApiError::new("Invalid file type. Please upload a PDF file.")),
            )
        }
    }
}

fn error_response(e: &ConvertError) -> HttpResponse {
    match e {
        ConvertError::Read(_) | ConvertError::NotPdf(_) => {
            log::warn!("Rejected document: {e}");
            HttpResponse::UnprocessableEntity()
                .json(ApiError::new(format!("Error processing file: {e}")))
        }
        ConvertError::Write(_) => {
            log::error!("Failed to build spreadsheet: {e}");
            HttpResponse::InternalServerError().json(ApiError::new("Failed to build spreadsheet"))
        }
    }
}

fn attachment(bytes: Vec<u8>, filename: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(XLSX_MIME_TYPE)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(bytes)
}

use std::io::Write;

use axum::extract::Multipart;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Serialize;

use panex_ingest::PanExtraction;

use crate::template;
use crate::upload;

/// JSON shape of one extraction result.
#[derive(Debug, Serialize)]
pub struct ExtractJson {
    pub name: String,
    pub pan: String,
    /// Recoverable backend faults, as human-readable status lines.
    pub faults: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub error: String,
    pub faults: Vec<String>,
}

pub async fn index() -> Html<&'static str> {
    template::render_index()
}

/// `POST /extract` — run the pipeline and return the fields as JSON.
pub async fn extract(multipart: Multipart) -> Response {
    match run_pipeline(multipart).await {
        Ok(extraction) => Json(ExtractJson {
            name: extraction.record.name.as_str().to_string(),
            pan: extraction.record.pan.as_str().to_string(),
            faults: extraction.faults.iter().map(|f| f.to_string()).collect(),
        })
        .into_response(),
        Err(err) => err,
    }
}

/// `POST /extract/csv` — run the pipeline and return the CSV download.
///
/// This route owns the file naming and MIME type; no CSV is produced when
/// extraction is exhausted.
pub async fn extract_csv(multipart: Multipart) -> Response {
    match run_pipeline(multipart).await {
        Ok(extraction) => {
            let csv = panex_reporting::to_csv(&extraction.record);
            (
                [
                    (header::CONTENT_TYPE, "text/csv"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=\"pan_details.csv\"",
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => err,
    }
}

/// Accept the upload, stage it in a tempfile, and run the synchronous
/// pipeline off the async runtime.
async fn run_pipeline(multipart: Multipart) -> Result<PanExtraction, Response> {
    let upload = upload::parse_multipart(multipart)
        .await
        .map_err(bad_request)?;

    tracing::info!(filename = %upload.filename, bytes = upload.data.len(), "upload received");

    let result = tokio::task::spawn_blocking(move || {
        let mut tmp = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| format!("Failed to stage upload: {}", e))?;
        tmp.write_all(&upload.data)
            .map_err(|e| format!("Failed to stage upload: {}", e))?;
        Ok::<_, String>(panex_ingest::extract_pan_details(tmp.path()))
    })
    .await
    .map_err(|e| internal_error(format!("Extraction task failed: {}", e)))?
    .map_err(internal_error)?;

    result.map_err(|err| {
        let faults = err.faults().iter().map(|f| f.to_string()).collect();
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorJson {
                error: "Text extraction failed. Please try another PDF or check the file format."
                    .to_string(),
                faults,
            }),
        )
            .into_response()
    })
}

fn bad_request(msg: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorJson {
            error: msg,
            faults: vec![],
        }),
    )
        .into_response()
}

fn internal_error(msg: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorJson {
            error: msg,
            faults: vec![],
        }),
    )
        .into_response()
}

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, warn};
use workbench_core::{CustomerInteraction, CustomerInteractionNew, Page, SearchRequestDto};

use super::error::ApiError;
use super::AppState;

const UPLOAD_FIELD: &str = "file";

pub async fn index() -> &'static str {
    "workbench customer interaction service"
}

pub async fn health() -> &'static str {
    "ok"
}

/// Accepts either a multipart file of delimited text or a JSON array of records.
pub async fn upload(
    State(state): State<AppState>,
    request: Request,
) -> Result<StatusCode, ApiError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &state).await?;
        upload_file(&state, multipart).await
    } else if content_type.starts_with("application/json") {
        let Json(records) =
            Json::<Vec<CustomerInteractionNew>>::from_request(request, &state).await?;
        upload_records(&state, records).await
    } else {
        warn!(content_type = %content_type, "unsupported upload content type");
        Err(ApiError::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected multipart/form-data or application/json",
        ))
    }
}

async fn upload_file(state: &AppState, mut multipart: Multipart) -> Result<StatusCode, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let data = field.bytes().await?;
        debug!(bytes = data.len(), "received upload");
        state
            .run(move |service| service.ingest_from_text(data.as_ref()))
            .await?;
        return Ok(StatusCode::CREATED);
    }
    Err(ApiError::bad_request(format!(
        "missing multipart field `{UPLOAD_FIELD}`"
    )))
}

async fn upload_records(
    state: &AppState,
    records: Vec<CustomerInteractionNew>,
) -> Result<StatusCode, ApiError> {
    state
        .run(move |service| service.ingest_structured(records))
        .await?;
    Ok(StatusCode::CREATED)
}

pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequestDto>, JsonRejection>,
) -> Result<Json<Page<CustomerInteraction>>, ApiError> {
    let Json(request) = payload?;
    let filter = request.filter();
    let page = state
        .run(move |service| service.search(&filter, request.page_number, request.page_size))
        .await?;
    Ok(Json(page))
}

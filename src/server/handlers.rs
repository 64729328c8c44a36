// HTTP handlers - map requests onto ConversionService and errors onto status codes

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Map, Value};
use std::sync::Arc;

use crate::mapping::{MappingEntry, StoreError};
use crate::service::{ConversionService, ConvertError, InitStatus};

type ServiceState = State<Arc<ConversionService>>;

/// Error response: a status code plus `{"error": message}`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Request body was not the JSON shape the endpoint expects
    #[error("Invalid request body: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Convert(ConvertError::InvalidInput(_)) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Convert(ConvertError::NotInitialized | ConvertError::InitFailed(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Store(StoreError::EmptyPhrase) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::PersistenceError(_) | StoreError::LoadError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Store(StoreError::PersistenceError(_)) => format!(
                "{}; the change is active but will not survive a restart",
                self
            ),
            _ => self.to_string(),
        };
        if status.is_server_error() {
            crate::error!("Request failed: {}", message);
        } else {
            crate::debug!("Request rejected: {}", message);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn body_or_reject(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// `{"phrase": "replacement", ...}` -> pairs, rejecting non-string replacements
fn parse_pairs(body: Value) -> Result<Vec<(String, String)>, ApiError> {
    let Value::Object(fields) = body else {
        return Err(ApiError::BadRequest(
            "expected an object of phrase/replacement pairs".to_string(),
        ));
    };
    fields
        .into_iter()
        .map(|(phrase, value)| match value {
            Value::String(replacement) => Ok((phrase, replacement)),
            other => Err(ApiError::BadRequest(format!(
                "replacement for '{}' must be a string, got {}",
                phrase, other
            ))),
        })
        .collect()
}

fn entries_json(entries: Vec<MappingEntry>) -> Json<Value> {
    let map: Map<String, Value> = entries
        .into_iter()
        .map(|e| (e.phrase, Value::String(e.replacement)))
        .collect();
    Json(Value::Object(map))
}

/// GET /health
pub async fn health(State(service): ServiceState) -> impl IntoResponse {
    let status = service.status();
    let code = match status {
        InitStatus::Ready => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    };
    let mut body = serde_json::to_value(&status).unwrap_or_else(|_| json!({}));
    if let Value::Object(fields) = &mut body {
        fields.insert(
            "startedAt".to_string(),
            Value::String(service.started_at().to_rfc3339()),
        );
    }
    (code, Json(body))
}

/// GET /help
pub async fn help() -> Json<Value> {
    Json(json!({
        "description": "Converts American and British English spelling to New Zealand English",
        "endpoints": {
            "GET /health": "Initialization status",
            "POST /convert": "Body {\"text\": string} or {\"data\": any JSON}; returns {\"converted\": ...}",
            "GET /corrections": "List persisted corrections",
            "POST /corrections": "Add corrections: {\"phrase\": \"replacement\", ...}",
            "DELETE /corrections": "Remove every correction",
            "DELETE /corrections/{phrase}": "Remove one correction",
            "GET /custom-mappings": "List memory-only custom mappings",
            "POST /custom-mappings": "Add custom mappings: {\"phrase\": \"replacement\", ...}",
            "DELETE /custom-mappings": "Remove every custom mapping",
            "DELETE /custom-mappings/{phrase}": "Remove one custom mapping"
        },
        "example": {
            "request": {"text": "The organization will analyze the color data."},
            "response": {"converted": "The organisation will analyse the colour data."}
        }
    }))
}

/// POST /convert
pub async fn convert(
    State(service): ServiceState,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let body = body_or_reject(body)?;
    Ok(Json(service.convert_request(&body)?))
}

/// GET /corrections
pub async fn list_corrections(State(service): ServiceState) -> Result<Json<Value>, ApiError> {
    Ok(entries_json(service.engine()?.corrections.list()))
}

/// POST /corrections
pub async fn add_corrections(
    State(service): ServiceState,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let pairs = parse_pairs(body_or_reject(body)?)?;
    let corrections = Arc::clone(&service.engine()?.corrections);
    // Persistence touches the disk, keep it off the async workers
    let added = tokio::task::spawn_blocking(move || corrections.add(pairs))
        .await
        .map_err(|e| StoreError::PersistenceError(e.to_string()))??;
    Ok(Json(json!({ "added": added })))
}

/// DELETE /corrections
pub async fn clear_corrections(State(service): ServiceState) -> Result<StatusCode, ApiError> {
    let corrections = Arc::clone(&service.engine()?.corrections);
    tokio::task::spawn_blocking(move || corrections.clear())
        .await
        .map_err(|e| StoreError::PersistenceError(e.to_string()))??;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /corrections/{phrase}
pub async fn remove_correction(
    State(service): ServiceState,
    Path(phrase): Path<String>,
) -> Result<StatusCode, ApiError> {
    let corrections = Arc::clone(&service.engine()?.corrections);
    tokio::task::spawn_blocking(move || corrections.remove(&phrase))
        .await
        .map_err(|e| StoreError::PersistenceError(e.to_string()))??;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /custom-mappings
pub async fn list_custom_mappings(State(service): ServiceState) -> Result<Json<Value>, ApiError> {
    Ok(entries_json(service.engine()?.custom_mappings.list()))
}

/// POST /custom-mappings
pub async fn add_custom_mappings(
    State(service): ServiceState,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let pairs = parse_pairs(body_or_reject(body)?)?;
    let added = service.engine()?.custom_mappings.add(pairs)?;
    Ok(Json(json!({ "added": added })))
}

/// DELETE /custom-mappings
pub async fn clear_custom_mappings(State(service): ServiceState) -> Result<StatusCode, ApiError> {
    service.engine()?.custom_mappings.clear();
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /custom-mappings/{phrase}
pub async fn remove_custom_mapping(
    State(service): ServiceState,
    Path(phrase): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.engine()?.custom_mappings.remove(&phrase)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "handlers_test.rs"]
mod tests;

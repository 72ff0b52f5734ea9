//! API error type and HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use platforge_archive::ArchiveError;
use platforge_templates::TemplateError;
use serde_json::json;
use thiserror::Error;

/// Errors a request handler can surface to the client.
///
/// NotFound stays distinct so a bad template name maps to 404 rather than
/// being folded into the generic generation failure. Archive failures are
/// infrastructure problems and map to 500, not 400.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Archiving failed: {0}")]
    Archive(#[from] ArchiveError),
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            other => ApiError::Generation(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Generation(_) => StatusCode::BAD_REQUEST,
            ApiError::Archive(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = TemplateError::NotFound {
            family: "terraform".to_string(),
            name: "nope".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::NotFound(_)));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_template_errors_map_to_400() {
        let err: ApiError = TemplateError::DuplicateOutput {
            family: "helm".to_string(),
            name: "basic".to_string(),
            path: "Chart.yaml".to_string(),
        }
        .into();
        match &err {
            ApiError::Generation(msg) => assert!(msg.contains("Chart.yaml")),
            other => panic!("expected generation error, got {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

//! Request handlers and error mapping for the recommendation endpoints.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::AppState;

// =============================================================================
// REQUEST BODIES
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyGoalsRequest {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapAssistRequest {
    pub user_id: i64,
    pub topic: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteAssistRequest {
    pub user_id: i64,
    pub content: String,
    pub title: Option<String>,
    /// Accepted for client compatibility; not used by prompt construction.
    #[serde(default)]
    pub desktop_id: Option<i64>,
}

// =============================================================================
// AUTH TOKEN EXTRACTION
// =============================================================================

/// Extract the bearer token from the `Authorization` header.
///
/// The token is forwarded opaquely to the upstream service; verification is
/// the identity provider's job. A missing or malformed header fails before
/// any upstream call.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let header = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Expected a bearer token".to_string()))?;

    if token.is_empty() {
        return Err(ApiError::Unauthorized("Empty bearer token".to_string()));
    }
    Ok(token.to_string())
}

// =============================================================================
// HANDLERS
// =============================================================================

pub async fn daily_goals(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<DailyGoalsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = bearer_token(&headers)?;
    info!(user_id = body.user_id, "Daily goals requested");

    let response = state
        .service
        .generate_daily_goals(body.user_id, &token)
        .await?;
    Ok(Json(response))
}

pub async fn roadmap_assist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<RoadmapAssistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = bearer_token(&headers)?;
    info!(user_id = body.user_id, topic = %body.topic, "Roadmap assistance requested");

    let response = state
        .service
        .assist_roadmap_creation(
            body.user_id,
            &body.topic,
            body.description.as_deref(),
            &token,
        )
        .await?;
    Ok(Json(response))
}

pub async fn note_assist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<NoteAssistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let token = bearer_token(&headers)?;
    info!(user_id = body.user_id, "Note assistance requested");

    let response = state
        .service
        .assist_note_creation(body.user_id, &body.content, body.title.as_deref(), &token)
        .await?;
    Ok(Json(response))
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn service_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "mentor-api",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            format!("POST {}/goals/daily", mentor_core::defaults::API_PREFIX),
            format!("POST {}/roadmap/assist", mentor_core::defaults::API_PREFIX),
            format!("POST {}/note/assist", mentor_core::defaults::API_PREFIX),
            "GET /health",
        ],
    }))
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// Client-visible error with a machine-readable code.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    BadRequest(String),
    UpstreamUnavailable(String),
    UpstreamQuery(String),
    LlmUnavailable(String),
    MalformedLlmOutput(String),
    Internal(String),
}

impl From<mentor_core::Error> for ApiError {
    fn from(err: mentor_core::Error) -> Self {
        use mentor_core::Error;
        match err {
            Error::Unauthorized(_) | Error::Forbidden(_) => {
                ApiError::Unauthorized("Upstream rejected the provided token".to_string())
            }
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::Unavailable(msg) | Error::Request(msg) => ApiError::UpstreamUnavailable(msg),
            Error::MalformedQuery(msg) => ApiError::UpstreamQuery(msg),
            Error::Inference(msg) => ApiError::LlmUnavailable(msg),
            Error::MalformedOutput(msg) => ApiError::MalformedLlmOutput(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        // Internal detail is logged here, never returned in the body.
        let (status, code, message) = match self {
            ApiError::Unauthorized(msg) => {
                warn!(error = %msg, "Request rejected as unauthorized");
                (StatusCode::UNAUTHORIZED, "unauthorized", msg)
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg),
            ApiError::UpstreamUnavailable(msg) => {
                warn!(error = %msg, "Upstream unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_unavailable",
                    "Upstream service unavailable".to_string(),
                )
            }
            ApiError::UpstreamQuery(msg) => {
                error!(error = %msg, "Upstream query failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_query",
                    "Upstream query failed".to_string(),
                )
            }
            ApiError::LlmUnavailable(msg) => {
                warn!(error = %msg, "LLM call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "llm_unavailable",
                    "Language model unavailable".to_string(),
                )
            }
            ApiError::MalformedLlmOutput(msg) => {
                error!(error = %msg, "LLM output could not be parsed");
                (
                    StatusCode::BAD_GATEWAY,
                    "malformed_llm_output",
                    "Language model returned an unusable response".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        let headers = headers_with_auth("Bearer abc123");
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let err = bearer_token(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_non_bearer_scheme_is_unauthorized() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        let err = bearer_token(&headers).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_empty_token_is_unauthorized() {
        let headers = headers_with_auth("Bearer ");
        let err = bearer_token(&headers).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_request_bodies_use_camel_case() {
        let body: NoteAssistRequest = serde_json::from_str(
            r#"{"userId": 7, "content": "c", "title": "t", "desktopId": 3}"#,
        )
        .unwrap();
        assert_eq!(body.user_id, 7);
        assert_eq!(body.desktop_id, Some(3));

        let body: RoadmapAssistRequest =
            serde_json::from_str(r#"{"userId": 7, "topic": "Algebra"}"#).unwrap();
        assert_eq!(body.topic, "Algebra");
        assert!(body.description.is_none());
    }

    #[test]
    fn test_error_mapping_statuses() {
        use mentor_core::Error;

        let cases: Vec<(Error, StatusCode)> = vec![
            (
                Error::Unauthorized("bad token".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                Error::InvalidInput("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::Unavailable("down".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                Error::MalformedQuery("bad field".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                Error::Inference("llm down".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                Error::MalformedOutput("not json".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                Error::Config("missing key".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}

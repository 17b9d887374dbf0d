//! GraphQL client for the upstream study-data service.
//!
//! All user data (notes, roadmaps, desktops) lives in a separate backend
//! reached over a single GraphQL query. The caller's bearer token is passed
//! through unchanged; this service holds no upstream credentials of its own.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use mentor_core::{defaults, ContextSource, Error, Result, UserContext, UserStats};

use crate::stats::derive_stats;

/// One query fetches everything the recommendation prompts need. Unknown
/// fields in the reply are ignored during deserialization.
const USER_CONTEXT_QUERY: &str = r#"
query GetUserStudyContext($userId: Int!) {
    notes(userId: $userId) {
        id
        title
        content
        createdAt
        updatedAt
        tags {
            tag {
                id
                name
            }
        }
    }
    roadmaps(userId: $userId) {
        id
        title
        description
        steps {
            id
            title
            description
            order
            isCompleted
            createdAt
        }
    }
    desktops(userId: $userId) {
        id
        name
        description
    }
}
"#;

/// Client for the upstream GraphQL endpoint.
pub struct UpstreamClient {
    client: Client,
    graphql_url: String,
}

impl UpstreamClient {
    /// Create a client for the given GraphQL endpoint.
    pub fn new(graphql_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let graphql_url = graphql_url.into();
        info!(url = %graphql_url, timeout_secs = timeout_seconds, "Upstream client ready");

        Ok(Self {
            client,
            graphql_url,
        })
    }

    /// Build a client from `UPSTREAM_GRAPHQL_URL` and `CONTEXT_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("UPSTREAM_GRAPHQL_URL")
            .unwrap_or_else(|_| defaults::UPSTREAM_GRAPHQL_URL.to_string());
        let timeout = std::env::var("CONTEXT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults::CONTEXT_TIMEOUT_SECS);
        Self::new(url, timeout)
    }

    /// Fetch context and derive aggregate statistics from it.
    pub async fn fetch_user_stats(&self, user_id: i64, auth_token: &str) -> Result<UserStats> {
        let context = self.fetch_user_context(user_id, auth_token).await?;
        Ok(derive_stats(&context))
    }
}

#[async_trait]
impl ContextSource for UpstreamClient {
    async fn fetch_user_context(&self, user_id: i64, auth_token: &str) -> Result<UserContext> {
        let start = Instant::now();
        debug!(user_id, "Fetching user context");

        let response = self
            .client
            .post(&self.graphql_url)
            .header("Authorization", format!("Bearer {}", auth_token))
            .header("Content-Type", "application/json")
            .json(&json!({
                "query": USER_CONTEXT_QUERY,
                "variables": {"userId": user_id}
            }))
            .send()
            .await
            .map_err(|e| Error::Unavailable(format!("Context fetch failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(user_id, status = %status, "Upstream rejected caller token");
            return Err(Error::Unauthorized(format!(
                "Upstream returned {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(Error::Unavailable(format!(
                "Upstream returned {}",
                status
            )));
        }

        let body: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| Error::Unavailable(format!("Failed to parse upstream body: {}", e)))?;

        if let Some(errors) = body.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            warn!(user_id, errors = ?messages, "Upstream query errors");
            return Err(Error::MalformedQuery(messages.join("; ")));
        }

        let context = body.data.unwrap_or_default();
        debug!(
            user_id,
            notes = context.notes.len(),
            roadmaps = context.roadmaps.len(),
            desktops = context.desktops.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "User context fetched"
        );
        Ok(context)
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<UserContext>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

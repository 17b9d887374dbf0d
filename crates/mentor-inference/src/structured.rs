//! Schema-guided structured JSON generation.
//!
//! LLM output is not guaranteed to be well-formed JSON even under "JSON
//! mode" instructions, so parsing is two-tiered: direct parse first, then a
//! scan for the first greedy `{...}` substring. This module is the sole
//! place untrusted generative text becomes structured data consumed
//! downstream — on unrecoverable input it returns
//! [`Error::MalformedOutput`], never a silent default.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use mentor_core::{Error, GenerationRequest, LlmBackend, Result};

/// Greedy single-match object scan, dot matches newlines.
static JSON_OBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("valid regex"));

/// Generate a structured JSON response from the backend.
///
/// When a `schema` is supplied and the backend supports native JSON mode,
/// the schema description is appended to the system prompt and JSON-object
/// mode is requested. Otherwise a plain "respond with valid JSON only"
/// instruction is appended to the user prompt with no enforced mode.
pub async fn generate_structured(
    backend: &dyn LlmBackend,
    prompt: &str,
    system: Option<&str>,
    schema: Option<&JsonValue>,
) -> Result<JsonValue> {
    let request = match schema {
        Some(schema) if backend.supports_json_mode() => {
            let system_with_schema = format!(
                "{}\n\nRespond in valid JSON matching this schema: {}",
                system.unwrap_or_default(),
                schema
            );
            GenerationRequest::new(prompt)
                .with_system(system_with_schema)
                .with_json_mode(true)
        }
        _ => {
            let json_prompt = format!("{}\n\nRespond with valid JSON only.", prompt);
            let request = GenerationRequest::new(json_prompt);
            match system {
                Some(system) => request.with_system(system),
                None => request,
            }
        }
    };

    let text = backend.generate(&request).await?;
    parse_structured_text(&text)
}

/// Parse LLM text into a JSON value, falling back to brace extraction.
pub fn parse_structured_text(text: &str) -> Result<JsonValue> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(parse_err) => {
            debug!(
                response_len = text.len(),
                error = %parse_err,
                "Direct JSON parse failed, attempting brace extraction"
            );
            let Some(candidate) = extract_json_object(text) else {
                warn!(response_len = text.len(), "No JSON object found in model output");
                return Err(Error::MalformedOutput(
                    "Failed to parse JSON response".to_string(),
                ));
            };
            serde_json::from_str(candidate).map_err(|e| {
                warn!(error = %e, "Extracted JSON candidate failed to parse");
                Error::MalformedOutput("Failed to parse JSON response".to_string())
            })
        }
    }
}

/// Find the first greedy `{...}` substring in raw model output.
pub fn extract_json_object(text: &str) -> Option<&str> {
    JSON_OBJECT_RE.find(text).map(|m| m.as_str())
}

//! Wire DTOs for the assistant chat endpoint.
//!
//! DESIGN
//! ======
//! These types mirror the remote service's JSON schema. Response collections
//! default to empty so partial payloads from older service builds still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A cited reference returned alongside an assistant reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Human-readable title of the cited page.
    pub title: String,
    /// Full URL of the cited page.
    pub url: String,
    /// Shortened URL, when the service produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

impl Source {
    /// Text to show for the link: the title, or the URL when the title is blank.
    pub fn label(&self) -> &str {
        if self.title.trim().is_empty() { &self.url } else { &self.title }
    }
}

/// Body of `POST {base}/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    /// Upper bound on search queries the assistant may generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_search_queries: Option<u32>,
    /// Upper bound on search/reflect iterations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_search_loops: Option<u32>,
}

/// Successful reply from the assistant service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Markdown-formatted reply text.
    pub message: String,
    /// Thread the service attributed this reply to.
    pub thread_id: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    /// Server-side processing time in seconds.
    #[serde(default)]
    pub processing_time: Option<f64>,
    #[serde(default)]
    pub search_queries_used: Vec<String>,
    /// True when the assistant asked a clarifying question instead of answering.
    #[serde(default)]
    pub is_clarification: bool,
}

/// Error body the service returns with 4xx/5xx statuses.
///
/// `detail` is a string for handled errors and a list of
/// `{loc, msg, type}` objects for request validation failures.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Most specific human-readable text in the body, if any.
    pub fn reason(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(detail_text)
            .or_else(|| self.error.clone())
            .filter(|s| !s.trim().is_empty())
    }
}

fn detail_text(detail: &serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str).or_else(|| item.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

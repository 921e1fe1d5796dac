//! HTTP client for the remote assistant chat endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `send_message` returns `ChatApiError::Unavailable` since
//! the request is only meaningful from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `ChatApiError` instead of panics; the chat view turns
//! it into an assistant bubble so failures stay inside the conversation.
//!
//! THREAD IDENTITY
//! ===============
//! One thread identifier is generated lazily per page load and attached to
//! every request until `reset_thread` replaces it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::{Mutex, PoisonError};

use super::types::{ChatRequest, ChatResponse, ErrorResponse};
use crate::util::thread_id;

/// Default base URL of the assistant API when none is configured at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";
/// Search query budget sent with every request.
pub const MAX_SEARCH_QUERIES: u32 = 3;
/// Search loop budget sent with every request.
pub const MAX_SEARCH_LOOPS: u32 = 2;

static THREAD_ID: Mutex<Option<String>> = Mutex::new(None);

/// Failures surfaced by [`send_message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatApiError {
    /// The request never reached the server (DNS, refused connection, CORS).
    #[error("cannot reach the assistant server; check that it is running")]
    Unreachable,

    /// The server answered with a non-success status.
    #[error("{}", status_message(*status, status_text, body))]
    Status { status: u16, status_text: String, body: String },

    /// The outgoing request body could not be encoded.
    #[error("failed to encode chat request: {0}")]
    Encode(String),

    /// The success body was not a valid chat response.
    #[error("unexpected response from the assistant server: {0}")]
    Decode(String),

    /// Requests can only be issued from the browser.
    #[error("chat requests are only available in the browser")]
    Unavailable,
}

impl ChatApiError {
    /// Text shown in the assistant bubble that reports this failure.
    pub fn user_message(&self) -> String {
        let reason = match self {
            Self::Status { body, .. } => serde_json::from_str::<ErrorResponse>(body)
                .ok()
                .and_then(|e| e.reason())
                .unwrap_or_else(|| self.to_string()),
            other => other.to_string(),
        };
        format!("Sorry, something went wrong while contacting the assistant.\n\n{reason}")
    }
}

fn status_message(status: u16, status_text: &str, body: &str) -> String {
    if body.is_empty() {
        format!("HTTP {status}: {status_text}")
    } else {
        format!("HTTP {status}: {status_text}\n{body}")
    }
}

/// Base URL of the assistant API, fixed at build time by `ADVISOR_API_BASE_URL`.
pub fn api_url() -> String {
    normalize_base_url(option_env!("ADVISOR_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL.to_owned() } else { trimmed.to_owned() }
}

fn chat_endpoint(base: &str) -> String {
    format!("{base}/chat")
}

/// Build the request body for `message` on `thread_id`.
pub fn build_request(message: &str, thread_id: &str) -> ChatRequest {
    ChatRequest {
        message: message.to_owned(),
        thread_id: Some(thread_id.to_owned()),
        max_search_queries: Some(MAX_SEARCH_QUERIES),
        max_search_loops: Some(MAX_SEARCH_LOOPS),
    }
}

/// Current session thread identifier, generated on first use.
pub fn thread_id() -> String {
    let mut slot = THREAD_ID.lock().unwrap_or_else(PoisonError::into_inner);
    slot.get_or_insert_with(thread_id::generate).clone()
}

/// Replace the session thread identifier with a fresh one and return it.
pub fn reset_thread() -> String {
    let next = thread_id::generate();
    *THREAD_ID.lock().unwrap_or_else(PoisonError::into_inner) = Some(next.clone());
    log::info!("chat thread reset: thread_id={next}");
    next
}

/// Send `message` to `POST {api_url}/chat` on the current thread.
///
/// # Errors
///
/// Returns [`ChatApiError`] when the server is unreachable, answers with a
/// non-success status, returns an undecodable body, or when called outside
/// the browser.
pub async fn send_message(message: &str) -> Result<ChatResponse, ChatApiError> {
    let request = build_request(message, &thread_id());
    let url = chat_endpoint(&api_url());

    #[cfg(feature = "hydrate")]
    {
        log::debug!("chat request start: url={url} thread_id={:?}", request.thread_id);

        let resp = gloo_net::http::Request::post(&url)
            .json(&request)
            .map_err(|e| ChatApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                log::error!("chat request failed: {e}");
                ChatApiError::Unreachable
            })?;

        log::debug!("chat response status: {} {}", resp.status(), resp.status_text());

        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            let err = ChatApiError::Status { status: resp.status(), status_text: resp.status_text(), body };
            log::warn!("chat request rejected: {err}");
            return Err(err);
        }

        let data: ChatResponse = resp.json().await.map_err(|e| {
            log::error!("chat response decode failed: {e}");
            ChatApiError::Decode(e.to_string())
        })?;
        log::info!(
            "chat reply received: thread_id={} sources={} clarification={}",
            data.thread_id,
            data.sources.len(),
            data.is_clarification
        );
        Ok(data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, url);
        Err(ChatApiError::Unavailable)
    }
}

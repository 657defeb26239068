//! HTTP API Client
//!
//! Functions for communicating with the economic tracker backend.

use gloo_net::http::Request;

use crate::model::DashboardPayload;

/// Default API base URL for local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL.
///
/// Resolution order: a `localStorage` override (so a deployed build can be
/// repointed without rebuilding), then the `ECON_API_URL` value baked in at
/// compile time, then the development default.
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("econ_api_url").ok().flatten());

    let url = stored
        .or_else(|| option_env!("ECON_API_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Response body of `POST /ask`. `sources_used` and `confidence` are sent
/// by the current backend but not guaranteed; a bare `{answer}` still
/// deserializes.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub sources_used: Vec<String>,
    #[serde(default)]
    pub confidence: Option<String>,
}

#[derive(serde::Serialize)]
struct AskRequest {
    question: String,
}

// ============ API Functions ============

/// Fetch the aggregate dashboard payload.
pub async fn fetch_dashboard() -> Result<DashboardPayload, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/dashboard", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a free-text question to the answering service.
pub async fn ask_question(question: &str) -> Result<AskResponse, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/ask", api_base))
        .json(&AskRequest {
            question: question.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: HTTP {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

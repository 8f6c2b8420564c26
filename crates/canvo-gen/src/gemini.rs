//! Gemini Generative Language API client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::backend::GenerativeBackend;
use crate::error::BackendError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// Explicitly constructed and injected into [`crate::CanvasGenerator`];
/// there is no module-scope client instance.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client with default model, base URL, and a 30 s timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_timeout(api_key, std::time::Duration::from_secs(30))
    }

    /// Create a client with an explicit whole-request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn with_timeout(api_key: impl Into<String>, timeout: std::time::Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("canvo/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the generation model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (tests, proxies).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, BackendError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let data: GenerateContentResponse = resp.json().await?;
        extract_text(data)
    }
}

/// Check an HTTP response for error conditions, classifying overload.
///
/// Returns the response unchanged on success. A 503 status, a Google error
/// body with status `UNAVAILABLE`/`RESOURCE_EXHAUSTED`, or an "overloaded"
/// error message classify as [`BackendError::Overloaded`]; any other
/// non-success status becomes [`BackendError::Api`].
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let code = status.as_u16();
    let body = resp.text().await.unwrap_or_default();
    let (message, api_status) = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => (parsed.error.message, parsed.error.status),
        Err(_) => (body, String::new()),
    };

    let overloaded = code == 503
        || matches!(api_status.as_str(), "UNAVAILABLE" | "RESOURCE_EXHAUSTED")
        || message.to_ascii_lowercase().contains("overloaded");

    if overloaded {
        Err(BackendError::Overloaded {
            status: code,
            message,
        })
    } else {
        Err(BackendError::Api {
            status: code,
            message,
        })
    }
}

/// Pull the first candidate's text out of a `generateContent` response.
fn extract_text(data: GenerateContentResponse) -> Result<String, BackendError> {
    let text: String = data
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(BackendError::Empty);
    }
    Ok(text)
}

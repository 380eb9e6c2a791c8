use crate::{errors::AnalysisError, providers::ai::AiProvider, types::GenerationConfig};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{error, warn};

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    text: String,
}

#[derive(Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

// --- Gemini Provider implementation ---

/// A provider for interacting with the Google Gemini API.
///
/// The credential is injected at construction and passed as the `key` query
/// parameter on each call. The provider never reads the environment.
#[derive(Clone)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    ///
    /// A `None` or blank key is allowed here so the application can start
    /// unconfigured; `complete` refuses to do any I/O until a key exists.
    pub fn new(api_url: String, api_key: Option<String>) -> Result<Self, AnalysisError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(|e| AnalysisError::Unknown(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    /// Performs exactly one completion round trip against the Gemini API.
    async fn complete(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, AnalysisError> {
        let api_key = self.api_key.as_deref().ok_or(AnalysisError::MissingApiKey)?;

        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: *config,
        };

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!("Request to Gemini API failed: {e}");
                AnalysisError::Transport {
                    status: e.status().map(|s| s.as_u16()),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the provider's own error message; fall back to the raw
            // body, then to the status reason.
            let message = serde_json::from_str::<GeminiErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| {
                    if body.trim().is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("unknown provider error")
                            .to_string()
                    } else {
                        body
                    }
                });
            error!(status = status.as_u16(), %message, "Gemini API returned an error");
            return Err(AnalysisError::Transport {
                status: Some(status.as_u16()),
                message,
            });
        }

        let gemini_response: GeminiResponse =
            response.json().await.map_err(|e| AnalysisError::Transport {
                status: Some(status.as_u16()),
                message: format!("failed to deserialize Gemini response: {e}"),
            })?;

        let text = gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .unwrap_or_default();

        if text.trim().is_empty() {
            warn!("Gemini returned a successful response with no text");
            return Err(AnalysisError::EmptyCompletion);
        }

        Ok(text.to_string())
    }
}

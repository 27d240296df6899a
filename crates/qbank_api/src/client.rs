//! HTTP client for the question generation endpoint.

use crate::ApiConfig;
use qbank_core::GenerateQuestionRequest;
use qbank_error::{ApiError, ApiErrorKind};
use tracing::instrument;

/// A response as received, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers in arrival order
    pub headers: Vec<(String, String)>,
    /// Raw body text
    pub body: String,
}

impl ApiResponse {
    /// Whether the service answered `200 OK`.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Client for the question generation service
#[derive(Debug, Clone)]
pub struct GenerationClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl GenerationClient {
    /// Create a new client. The configured timeout applies to every request.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        tracing::debug!("Creating generation client");
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ApiError::new(ApiErrorKind::Configuration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        Ok(Self { config, client })
    }

    /// Get the API configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a generation request.
    ///
    /// Any HTTP status is returned as a response; only transport failures
    /// are errors.
    #[instrument(skip(self, request), fields(topic_id = %request.topic_id, question_type = %request.question_type))]
    pub async fn generate_question(
        &self,
        request: &GenerateQuestionRequest,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.config.generate_url();
        tracing::debug!("Sending generation request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                if e.is_timeout() {
                    ApiError::new(ApiErrorKind::Timeout(e.to_string()))
                } else {
                    ApiError::new(ApiErrorKind::Http(e.to_string()))
                }
            })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            ApiError::new(ApiErrorKind::Body(e.to_string()))
        })?;

        tracing::debug!(status, size = body.len(), "Response received");
        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

//! PostgREST client for the Supabase REST API.

use crate::{DatabaseConfig, DatabaseResult, QuestionStore};
use qbank_error::{DatabaseError, DatabaseErrorKind};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl PostgrestError {
    fn render(&self) -> Option<String> {
        let message = self.message.as_deref()?;
        let mut text = match &self.code {
            Some(code) => format!("[{}] {}", code, message),
            None => message.to_string(),
        };
        if let Some(details) = &self.details {
            text.push_str(&format!(" (details: {})", details));
        }
        if let Some(hint) = &self.hint {
            text.push_str(&format!(" (hint: {})", hint));
        }
        Some(text)
    }
}

/// Client for the Supabase PostgREST API.
#[derive(Debug, Clone)]
pub struct RestClient {
    config: DatabaseConfig,
    client: reqwest::Client,
}

impl RestClient {
    /// Create a new REST client.
    #[instrument(skip(config), fields(url = %config.url))]
    pub fn new(config: DatabaseConfig) -> DatabaseResult<Self> {
        tracing::debug!("Creating database REST client");
        let client = reqwest::Client::builder().build().map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Configuration(format!(
                "Failed to build HTTP client: {}",
                e
            )))
        })?;
        Ok(Self { config, client })
    }

    /// Get the connection configuration
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.config.rest_base(), path);
        self.client
            .request(method, url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    /// Call a remote procedure with JSON parameters.
    ///
    /// An empty response body yields `Value::Null`.
    #[instrument(skip(self, params))]
    pub async fn rpc(&self, function: &str, params: &Value) -> DatabaseResult<Value> {
        tracing::debug!("Calling remote procedure");
        let response = self
            .request(reqwest::Method::POST, &format!("rpc/{}", function))
            .json(params)
            .send()
            .await
            .map_err(request_failed)?;

        let body = read_success_body(response).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Deserialization(format!(
                "Failed to parse rpc result: {}",
                e
            )))
        })
    }

    /// Insert a row and return the representation of the inserted rows.
    #[instrument(skip(self, row))]
    pub async fn insert(&self, table: &str, row: &Value) -> DatabaseResult<Vec<Value>> {
        tracing::debug!("Inserting row");
        let response = self
            .request(reqwest::Method::POST, table)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .map_err(request_failed)?;

        let body = read_success_body(response).await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&body).map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Deserialization(format!(
                "Failed to parse inserted rows: {}",
                e
            )))
        })
    }

    /// Delete rows where `column` equals `value`.
    #[instrument(skip(self))]
    pub async fn delete(&self, table: &str, column: &str, value: &str) -> DatabaseResult<()> {
        tracing::debug!("Deleting rows");
        let response = self
            .request(reqwest::Method::DELETE, table)
            .query(&[(column, format!("eq.{}", value))])
            .send()
            .await
            .map_err(request_failed)?;

        read_success_body(response).await?;
        Ok(())
    }
}

fn request_failed(e: reqwest::Error) -> DatabaseError {
    tracing::error!("Database request failed: {}", e);
    DatabaseError::new(DatabaseErrorKind::Request(e.to_string()))
}

/// Read the body of a response, turning non-success statuses into API errors.
async fn read_success_body(response: reqwest::Response) -> DatabaseResult<String> {
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        DatabaseError::new(DatabaseErrorKind::Deserialization(format!(
            "Failed to read response body: {}",
            e
        )))
    })?;

    if status.is_success() {
        return Ok(body);
    }

    let message = serde_json::from_str::<PostgrestError>(&body)
        .ok()
        .and_then(|e| e.render())
        .unwrap_or(body);
    tracing::error!(status = status.as_u16(), %message, "Database returned error");
    Err(DatabaseError::new(DatabaseErrorKind::Api {
        status: status.as_u16(),
        message,
    }))
}

#[async_trait::async_trait]
impl QuestionStore for RestClient {
    async fn execute_sql(&self, sql: &str) -> DatabaseResult<Value> {
        let params = serde_json::json!({ "sql": sql });
        self.rpc(&self.config.sql_function, &params).await
    }

    async fn insert_row(&self, table: &str, row: &Value) -> DatabaseResult<Vec<Value>> {
        self.insert(table, row).await
    }

    async fn delete_eq(&self, table: &str, column: &str, value: &str) -> DatabaseResult<()> {
        self.delete(table, column, value).await
    }
}

//! HTTP boundary of the client.
//!
//! [`NotesApi`] is the seam the store depends on; [`NotesClient`] implements
//! it over HTTP with [`reqwest`], logging every request and response and
//! normalizing failures into [`ClientError`].

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::model::{CreateNoteData, MessageResponse, Note, UpdateNoteData};

/// Remote operations offered by the notes API.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// All notes, newest first.
    async fn list_notes(&self) -> ClientResult<Vec<Note>>;

    async fn create_note(&self, data: &CreateNoteData) -> ClientResult<Note>;

    async fn update_note(&self, id: &str, data: &UpdateNoteData) -> ClientResult<Note>;

    async fn delete_note(&self, id: &str) -> ClientResult<()>;

    /// Every distinct tag, sorted.
    async fn list_tags(&self) -> ClientResult<Vec<String>>;

    /// Static liveness message from `GET /`.
    async fn health_check(&self) -> ClientResult<MessageResponse>;
}

/// Error body returned by the server on failure.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the notes API.
#[derive(Debug, Clone)]
pub struct NotesClient {
    client: reqwest::Client,
    base_url: String,
}

impl NotesClient {
    /// Create a client with the configured base URL and request timeout.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and decode a JSON success body.
    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(method = %method, path, "Making request");

        let mut builder = self
            .client
            .request(method.clone(), format!("{}{}", self.base_url, path));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            tracing::error!(method = %method, path, error = %err, "Request failed without a response");
            ClientError::Connection(err.to_string())
        })?;

        let status = response.status();
        tracing::info!(method = %method, path, status = status.as_u16(), "Response received");

        let bytes = response.bytes().await.map_err(|err| {
            tracing::error!(method = %method, path, error = %err, "Failed to read response body");
            ClientError::Connection(err.to_string())
        })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("Server error: {}", status.as_u16()));
            tracing::error!(method = %method, path, status = status.as_u16(), %message, "Server returned an error");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::error!(method = %method, path, error = %err, "Failed to decode response body");
            ClientError::InvalidResponse(err.to_string())
        })
    }
}

#[async_trait]
impl NotesApi for NotesClient {
    async fn list_notes(&self) -> ClientResult<Vec<Note>> {
        self.request::<(), _>(Method::GET, "/notes", None).await
    }

    async fn create_note(&self, data: &CreateNoteData) -> ClientResult<Note> {
        self.request(Method::POST, "/notes", Some(data)).await
    }

    async fn update_note(&self, id: &str, data: &UpdateNoteData) -> ClientResult<Note> {
        self.request(Method::PUT, &format!("/notes/{id}"), Some(data))
            .await
    }

    async fn delete_note(&self, id: &str) -> ClientResult<()> {
        let _: MessageResponse = self
            .request::<(), _>(Method::DELETE, &format!("/notes/{id}"), None)
            .await?;
        Ok(())
    }

    async fn list_tags(&self) -> ClientResult<Vec<String>> {
        self.request::<(), _>(Method::GET, "/tags", None).await
    }

    async fn health_check(&self) -> ClientResult<MessageResponse> {
        self.request::<(), _>(Method::GET, "/", None).await
    }
}

//! Todo HTTP API client
//!
//! The remote collection only supports listing and creating tasks. Completion,
//! priority and deletion never leave the client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;
use crate::task::Task;
use crate::Result;

/// Response body wrapper: `{ "data": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Body of `POST <base>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub task: String,
}

/// Interface to the remote todo collection
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetch the full task collection
    async fn list(&self) -> Result<Vec<Task>>;

    /// Create a task with the given title, returning the server's record
    async fn create(&self, title: &str) -> Result<Task>;
}

/// `TodoApi` over HTTP with JSON bodies
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> Result<Vec<Task>> {
        debug!("GET {}", self.base_url);

        let resp = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| Error::Remote(format!("Failed to fetch tasks: {}", e)))?;

        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status().as_u16(),
            });
        }

        let body: DataEnvelope<Vec<Task>> = resp.json().await?;
        Ok(body.data)
    }

    async fn create(&self, title: &str) -> Result<Task> {
        debug!("POST {}", self.base_url);

        let resp = self
            .client
            .post(&self.base_url)
            .json(&CreateTaskRequest {
                task: title.to_string(),
            })
            .send()
            .await
            .map_err(|e| Error::Remote(format!("Failed to create task: {}", e)))?;

        if !resp.status().is_success() {
            return Err(Error::Status {
                status: resp.status().as_u16(),
            });
        }

        let body: DataEnvelope<Task> = resp.json().await?;
        Ok(body.data)
    }
}

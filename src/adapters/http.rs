use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::domain::ports::Transport;
use crate::utils::error::{ApiError, Result};

/// reqwest-backed `Transport`. JSON in, JSON out; `post` and `put` send
/// their body as `application/json`. Cloning shares the underlying
/// connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    async fn read_json(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let url = response.url().to_string();
        tracing::debug!("API response status: {} for {}", status, url);

        if !status.is_success() {
            return Err(ApiError::StatusError {
                status: status.as_u16(),
                url,
            });
        }

        let text = response.text().await?;
        // Mutation endpoints may legitimately return an empty body.
        if text.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        self.read_json(response).await
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value> {
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(&body).send().await?;
        self.read_json(response).await
    }

    async fn put(&self, url: &str, body: Value) -> Result<Value> {
        tracing::debug!("PUT {}", url);
        let response = self.client.put(url).json(&body).send().await?;
        self.read_json(response).await
    }

    async fn delete(&self, url: &str) -> Result<Value> {
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        self.read_json(response).await
    }
}

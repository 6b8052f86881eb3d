use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// HTTP-shaped transport capability. Implementations fail with an `ApiError`
/// when the remote service is unreachable, returns a non-success status, or
/// produces a body that is not valid JSON.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value>;
    async fn post(&self, url: &str, body: Value) -> Result<Value>;
    async fn put(&self, url: &str, body: Value) -> Result<Value>;
    async fn delete(&self, url: &str) -> Result<Value>;
}

/// Sink for short user-facing status messages. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn add(&self, message: &str);
}

use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// Source of one raw JSON response body. The HTTP client sits behind this
/// so the engine can be exercised against a stub.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch_body(&self) -> Result<String>;
}

use crate::core::{ConfigProvider, Fetch};
use crate::utils::error::{CrewError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// One GET against the configured endpoint. The client is built once with
/// the configured timeout; the program performs a single request per run,
/// so there is no pooling or reuse to manage.
pub struct HttpFetcher<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpFetcher<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl<C: ConfigProvider> Fetch for HttpFetcher<C> {
    async fn fetch_body(&self) -> Result<String> {
        tracing::debug!("Making API request to: {}", self.config.endpoint());
        let response = self.client.get(self.config.endpoint()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.as_u16() != 200 {
            return Err(CrewError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Err(CrewError::EmptyBodyError);
        }

        Ok(body)
    }
}

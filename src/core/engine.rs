use crate::core::{mapper, Craft, Fetch};
use crate::utils::error::Result;

/// Drives one fetch/parse/map cycle and hands back the mapped craft.
pub struct CrewEngine<F: Fetch> {
    fetcher: F,
}

impl<F: Fetch> CrewEngine<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn run(&self) -> Result<Craft> {
        tracing::info!("Fetching crew data...");
        let body = self.fetcher.fetch_body().await?;
        tracing::info!("Fetched {} bytes", body.len());

        tracing::info!("Mapping JSON to craft model...");
        let value: serde_json::Value = serde_json::from_str(&body)?;
        let craft = mapper::map_craft(&value)?;
        tracing::info!("Mapped {} crew members", craft.crew.len());

        Ok(craft)
    }
}

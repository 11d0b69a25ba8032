pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{engine::CrewEngine, fetcher::HttpFetcher};
pub use domain::model::{Craft, CrewMember};
pub use utils::error::{CrewError, Result};

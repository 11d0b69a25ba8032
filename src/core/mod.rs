pub mod engine;
pub mod fetcher;
pub mod mapper;

pub use crate::domain::model::{Craft, CrewMember};
pub use crate::domain::ports::{ConfigProvider, Fetch};
pub use crate::utils::error::Result;

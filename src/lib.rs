pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::vision::GoogleVisionOcr;
pub use crate::config::ServiceConfig;
pub use crate::core::{engine::OcrEngine, extractor};
pub use crate::domain::model::CardRecord;
pub use crate::utils::error::{OcrError, Result};

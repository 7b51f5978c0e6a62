pub mod engine;
pub mod extractor;

pub use crate::domain::model::CardRecord;
pub use crate::domain::ports::{ConfigProvider, OcrProvider};
pub use crate::utils::error::Result;
pub use engine::OcrEngine;

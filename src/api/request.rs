//! OCR request types and validation

use serde::{Deserialize, Serialize};

use crate::utils::error::{OcrError, Result};
use crate::utils::validation::validate_url;

/// Request for card OCR processing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrRequest {
    /// Publicly reachable URI of the card image
    #[serde(default)]
    pub image_uri: Option<String>,
}

impl OcrRequest {
    /// Validate the OCR request
    pub fn validate(&self) -> Result<()> {
        let uri = self.image_uri.as_deref().unwrap_or("");
        if uri.is_empty() {
            return Err(OcrError::ValidationError {
                message: "imageUri is required".to_string(),
            });
        }

        validate_url("imageUri", uri)
    }
}

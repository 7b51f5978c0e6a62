use crate::domain::ports::{ConfigProvider, OcrProvider};
use crate::utils::error::{OcrError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Google Cloud Vision 的標準 annotate 端點
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

const TEXT_DETECTION: &str = "TEXT_DETECTION";

#[derive(Debug, Serialize)]
struct VisionRequest {
    requests: Vec<AnnotateRequest>,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest {
    image: Image,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct Image {
    source: ImageSource,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageSource {
    image_uri: String,
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    feature_type: String,
}

#[derive(Debug, Deserialize)]
struct VisionResponse {
    #[serde(default)]
    responses: Vec<AnnotateResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnotateResponse {
    #[serde(default)]
    text_annotations: Vec<TextAnnotation>,
}

#[derive(Debug, Deserialize)]
struct TextAnnotation {
    #[serde(default)]
    description: String,
}

impl VisionRequest {
    fn text_detection(image_uri: &str) -> Self {
        Self {
            requests: vec![AnnotateRequest {
                image: Image {
                    source: ImageSource {
                        image_uri: image_uri.to_string(),
                    },
                },
                features: vec![Feature {
                    feature_type: TEXT_DETECTION.to_string(),
                }],
            }],
        }
    }
}

/// OCR backend speaking the Google Cloud Vision `images:annotate` protocol.
pub struct GoogleVisionOcr<C: ConfigProvider> {
    pub(crate) config: C,
    pub(crate) client: Client,
}

impl<C: ConfigProvider> GoogleVisionOcr<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> OcrProvider for GoogleVisionOcr<C> {
    async fn recognize(&self, image_uri: &str) -> Result<String> {
        // API key 以查詢參數傳遞,這是 Vision annotate 端點的慣例
        let url = format!("{}?key={}", self.config.vision_endpoint(), self.config.api_key());
        let request = VisionRequest::text_detection(image_uri);

        tracing::debug!("Making Vision API request to: {}", self.config.vision_endpoint());
        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(self.config.timeout_seconds()))
            .json(&request)
            .send()
            .await?;

        tracing::debug!("Vision API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(OcrError::UpstreamError {
                message: format!("Vision API returned status {}", response.status()),
            });
        }

        let body = response.text().await?;
        let vision: VisionResponse = serde_json::from_str(&body)?;

        // 第一個 annotation 是整張圖的全文,其餘是逐字框
        let description = vision
            .responses
            .first()
            .and_then(|r| r.text_annotations.first())
            .map(|a| a.description.clone())
            .unwrap_or_default();

        if description.is_empty() {
            tracing::warn!("No text detected in image");
        }

        Ok(description)
    }
}

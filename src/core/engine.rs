use crate::core::extractor;
use crate::domain::model::CardRecord;
use crate::domain::ports::OcrProvider;
use crate::utils::error::Result;

/// Orchestrates one OCR pass: recognize the image, then parse the text.
pub struct OcrEngine<P: OcrProvider> {
    provider: P,
}

impl<P: OcrProvider> OcrEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn process(&self, image_uri: &str) -> Result<CardRecord> {
        // Recognize
        tracing::info!("🚀 Recognizing text from image: {}", image_uri);
        let text = self.provider.recognize(image_uri).await?;
        tracing::debug!("📊 OCR returned {} characters", text.len());

        // Extract
        let record = extractor::extract(&text);
        tracing::info!(
            "✅ Extraction complete: {}/7 fields populated",
            record.populated_fields()
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::OcrError;
    use async_trait::async_trait;

    struct FixedTextOcr {
        text: String,
    }

    #[async_trait]
    impl OcrProvider for FixedTextOcr {
        async fn recognize(&self, _image_uri: &str) -> Result<String> {
            Ok(self.text.clone())
        }
    }

    struct FailingOcr;

    #[async_trait]
    impl OcrProvider for FailingOcr {
        async fn recognize(&self, _image_uri: &str) -> Result<String> {
            Err(OcrError::UpstreamError {
                message: "vision unavailable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_process_parses_recognized_text() {
        let provider = FixedTextOcr {
            text: "เลขประจำตัวประชาชน 1 2345 67890 12 3\nเกิดวันที่ 5 January 1990".to_string(),
        };
        let engine = OcrEngine::new(provider);

        let record = engine.process("https://example.com/card.jpg").await.unwrap();

        assert_eq!(record.id_card_number.as_deref(), Some("1234567890123"));
        assert_eq!(record.date_of_birth.as_deref(), Some("5 January 1990"));
    }

    #[tokio::test]
    async fn test_process_empty_text_yields_empty_record() {
        let provider = FixedTextOcr {
            text: String::new(),
        };
        let engine = OcrEngine::new(provider);

        let record = engine.process("https://example.com/blank.jpg").await.unwrap();

        assert!(record.is_empty());
    }

    #[tokio::test]
    async fn test_process_propagates_provider_error() {
        let engine = OcrEngine::new(FailingOcr);

        let result = engine.process("https://example.com/card.jpg").await;

        assert!(matches!(result, Err(OcrError::UpstreamError { .. })));
    }
}

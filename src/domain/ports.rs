use crate::utils::error::Result;
use async_trait::async_trait;

/// OCR 後端 - 給定一個可公開取得的影像 URI，回傳辨識出的全文
#[async_trait]
pub trait OcrProvider: Send + Sync {
    async fn recognize(&self, image_uri: &str) -> Result<String>;
}

/// 設定的抽象層,讓核心不用管設定從哪來 (環境變數、CLI、測試固定值)
pub trait ConfigProvider: Send + Sync {
    fn vision_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use idcard_ocr::api::server::router;
use idcard_ocr::{GoogleVisionOcr, OcrEngine, ServiceConfig};
use tower::ServiceExt;

fn test_config(server: &MockServer) -> ServiceConfig {
    ServiceConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_key: "integration-key".to_string(),
        vision_endpoint: format!("{}/v1/images:annotate", server.base_url()),
        timeout_seconds: 5,
    }
}

fn card_service(server: &MockServer) -> axum::Router {
    router(OcrEngine::new(GoogleVisionOcr::new(test_config(server))))
}

fn ocr_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/ocr")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// 完整流程:HTTP 請求 → Vision mock → 解析後的卡片欄位
#[tokio::test]
async fn test_ocr_end_to_end() -> Result<()> {
    let description = "\
บัตรประจำตัวประชาชน Thai National ID Card
เลขประจำตัวประชาชน 1 2345 67890 12 3
ชื่อตัวและชื่อสกุล Name Mr Somchai Jaidee
เกิดวันที่ 5 January 1990
ที่อยู่ 99/1 หมู่ 2 ต.ในเมือง
อ.เมือง จ.ขอนแก่น 40000
วันออกบัตร 1 March 2015
วันบัตรหมดอายุ 1 March 2025";

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/images:annotate")
            .query_param("key", "integration-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "responses": [{
                    "textAnnotations": [{"locale": "th", "description": description}]
                }]
            }));
    });

    let app = card_service(&server);
    let response = app
        .oneshot(ocr_request(
            r#"{"imageUri":"https://example.com/card.jpg"}"#,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await?;

    api_mock.assert();
    assert_eq!(json["idCardNumber"], "1234567890123");
    assert_eq!(json["name"], "Somchai");
    assert_eq!(json["lastName"], "Jaidee");
    assert_eq!(json["dateOfBirth"], "5 January 1990");
    assert_eq!(json["address"], "ที่อยู่ 99/1 หมู่ 2 ต.ในเมือง อ.เมือง จ.ขอนแก่น 40000");
    assert_eq!(json["dateOfIssue"], "1 March 2015");
    assert_eq!(json["dateOfExpiry"], "1 March 2025");

    Ok(())
}

/// Vision 沒偵測到文字時回傳全空記錄,而不是錯誤
#[tokio::test]
async fn test_ocr_with_blank_image_returns_empty_record() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"responses": [{}]}));
    });

    let app = card_service(&server);
    let response = app
        .oneshot(ocr_request(
            r#"{"imageUri":"https://example.com/blank.jpg"}"#,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await?;

    let object = json.as_object().expect("response must be a JSON object");
    assert_eq!(object.len(), 7);
    assert!(object.values().all(|v| v.is_null()));

    Ok(())
}

#[tokio::test]
async fn test_ocr_missing_image_uri_is_rejected() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(200).json_body(serde_json::json!({"responses": []}));
    });

    let app = card_service(&server);
    let response = app.oneshot(ocr_request("{}")).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    // 驗證失敗時不應該呼叫 Vision
    api_mock.assert_hits(0);

    Ok(())
}

#[tokio::test]
async fn test_ocr_upstream_failure_maps_to_bad_gateway() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(500)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": {"message": "backend exploded"}}));
    });

    let app = card_service(&server);
    let response = app
        .oneshot(ocr_request(
            r#"{"imageUri":"https://example.com/card.jpg"}"#,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}

#[tokio::test]
async fn test_ocr_garbage_vision_body_maps_to_bad_gateway() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(200).body("<html>definitely not json</html>");
    });

    let app = card_service(&server);
    let response = app
        .oneshot(ocr_request(
            r#"{"imageUri":"https://example.com/card.jpg"}"#,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}

#[tokio::test]
async fn test_health_endpoint_reports_healthy() -> Result<()> {
    let server = MockServer::start();
    let app = card_service(&server);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await?;
    assert_eq!(json["status"], "healthy");

    Ok(())
}

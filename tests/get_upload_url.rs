mod common;
use common::login_client;
use leiapix::{AnimationRequest, LeiaError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_upload_url_passes_query_parameters() {
    let server = MockServer::start().await;
    let client = login_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/get-upload-url"))
        .and(query_param(
            "correlationId",
            "11111111-1111-4111-8111-111111111111",
        ))
        .and(query_param("fileName", "disparity.jpg"))
        .and(query_param("mediaType", "image/jpeg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://storage.example.com/upload/disparity.jpg?sig=abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let upload_url = client
        .get_upload_url(
            "11111111-1111-4111-8111-111111111111",
            "disparity.jpg",
            "image/jpeg",
        )
        .await
        .unwrap();

    assert_eq!(
        upload_url,
        "https://storage.example.com/upload/disparity.jpg?sig=abc"
    );
}

#[tokio::test]
async fn test_upload_url_feeds_animation_disparity_input() {
    let server = MockServer::start().await;
    let client = login_client(&server).await;
    let upload_url = "https://storage.example.com/upload/disparity.jpg?sig=abc";

    Mock::given(method("GET"))
        .and(path("/api/v1/get-upload-url"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "url": upload_url })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v1/animation"))
        .and(body_json(json!({
            "correlationId": "22222222-2222-4222-8222-222222222222",
            "inputImageUrl": "https://example.com/image.jpg",
            "inputDisparityUrl": upload_url,
            "animationLength": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resultPresignedUrl": "https://storage.example.com/animation.mp4"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provisioned_url = client
        .get_upload_url(
            "11111111-1111-4111-8111-111111111111",
            "disparity.jpg",
            "image/jpeg",
        )
        .await
        .unwrap();

    let animation = client
        .generate_animation(&AnimationRequest {
            correlation_id: "22222222-2222-4222-8222-222222222222",
            input_image_url: "https://example.com/image.jpg",
            input_disparity_url: Some(&provisioned_url),
            result_presigned_url: None,
            animation_length: Some(5),
        })
        .await
        .unwrap();

    assert_eq!(
        animation.result_presigned_url.as_deref(),
        Some("https://storage.example.com/animation.mp4")
    );
}

#[tokio::test]
async fn test_get_upload_url_error_carries_body() {
    let server = MockServer::start().await;
    let client = login_client(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/get-upload-url"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "storage quota exceeded"
        })))
        .mount(&server)
        .await;

    let err = client
        .get_upload_url(
            "11111111-1111-4111-8111-111111111111",
            "animation.mp4",
            "video/mp4",
        )
        .await
        .unwrap_err();

    match err {
        LeiaError::Provider { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body["message"], "storage quota exceeded");
        }
        other => panic!("expected provider error, got: {other}"),
    }
}

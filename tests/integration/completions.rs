//! Integration tests for completions

use super::*;
use serde_json::json;
use opentrain::prelude::*;
use wiremock::Mock;
use wiremock::matchers::{body_partial_json, method, path};

fn completion(text: &str) -> serde_json::Value {
    json!({
        "id": "cmpl-integration-123",
        "object": "text_completion",
        "created": 1589478378,
        "model": "curie:ft-acmeco-2021-03-03-21-44-20",
        "choices": [{
            "text": text,
            "index": 0,
            "logprobs": null,
            "finish_reason": "length"
        }],
        "usage": {"prompt_tokens": 4, "completion_tokens": 1, "total_tokens": 5}
    })
}

#[tokio::test]
async fn test_predict_from_fine_tune_id() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    mock_with_auth("/fine-tunes/ft-1", "GET")
        .respond_with(success_response(fine_tune(
            "ft-1",
            "succeeded",
            Some("curie:ft-acmeco-2021-03-03-21-44-20"),
        )))
        .mount(&mock_server)
        .await;
    mock_with_auth("/completions", "POST")
        .and(body_partial_json(json!({
            "model": "curie:ft-acmeco-2021-03-03-21-44-20",
            "prompt": "Great movie ->",
            "temperature": 0.0,
            "max_tokens": 1
        })))
        .respond_with(success_response(completion(" pos")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let predictor = Predictor::new(client, None, Some("ft-1")).await.unwrap();

    assert_eq!(predictor.predict_one("Great movie ->").await.unwrap(), " pos");
}

#[tokio::test]
async fn test_inference_not_ready() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/fine-tunes/ft-1"))
        .respond_with(success_response(fine_tune("ft-1", "running", None)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let result = Inference::from_fine_tune_id(client, "ft-1").await;

    assert!(matches!(result, Err(OpenTrainError::NotReady { .. })));
}

#[tokio::test]
async fn test_completion_authentication_error() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/completions"))
        .respond_with(error_response(401, "Incorrect API key provided", "invalid_request_error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let result = Inference::new(client, "ada")
        .call("Hello", CompletionOptions::default())
        .await;

    assert!(result.unwrap_err().is_authentication_error());
}

#[tokio::test]
async fn test_completion_rate_limited() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/completions"))
        .respond_with(
            error_response(429, "Rate limit reached", "requests").insert_header("retry-after", "20"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let result = Inference::new(client, "ada")
        .call("Hello", CompletionOptions::default().with_temperature(0.5))
        .await;

    assert!(matches!(result, Err(OpenTrainError::RateLimit(_))));
}

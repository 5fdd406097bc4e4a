//! Integration tests for dataset handles

use super::*;
use serde_json::json;
use opentrain::dataset::{Dataset, PromptCompletion};
use opentrain::errors::{OpenTrainError, UploadError};
use wiremock::{Mock, ResponseTemplate};
use wiremock::matchers::{header, method, path};

#[tokio::test]
async fn test_dataset_upload_from_records() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    mock_with_auth("/files", "POST")
        .and(header("OpenAI-Organization", "org-42"))
        .respond_with(success_response(file_object("file-XjGxS3KTG0uNmNOK362iJua3", "sentiment.jsonl")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let records = vec![
        PromptCompletion::new("Great movie ->", " pos"),
        PromptCompletion::new("Awful plot ->", " neg"),
    ];

    let dataset = Dataset::from_records(client, &records, Some("sentiment"), Some("org-42".to_string()))
        .await
        .unwrap();

    assert_eq!(dataset.id(), "file-XjGxS3KTG0uNmNOK362iJua3");
    assert!(opentrain::dataset::validate(&cache.path().join("sentiment.jsonl")));

    let requests = mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"purpose\""));
    assert!(body.contains("fine-tune"));
    assert!(body.contains("filename=\"sentiment.jsonl\""));
    assert!(body.contains("{\"prompt\":\"Awful plot ->\",\"completion\":\" neg\"}"));
}

#[tokio::test]
async fn test_dataset_upload_rejected() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/files"))
        .respond_with(error_response(400, "Invalid file format", "invalid_request_error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let result = Dataset::from_records(client, &[PromptCompletion::new("A", "B")], None, None).await;

    assert!(matches!(
        result,
        Err(OpenTrainError::Upload(UploadError::Rejected { .. }))
    ));
}

#[tokio::test]
async fn test_list_datasets() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    mock_with_auth("/files", "GET")
        .respond_with(success_response(json!({
            "object": "list",
            "data": [
                file_object("file-1", "train.jsonl"),
                file_object("file-2", "eval.jsonl")
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let datasets = Dataset::list_datasets(client, None).await.unwrap();

    let ids: Vec<&str> = datasets.iter().map(Dataset::id).collect();
    assert_eq!(ids, vec!["file-1", "file-2"]);
    assert_eq!(datasets[1].info().await.unwrap().filename, "eval.jsonl");
}

#[tokio::test]
async fn test_dataset_info_is_memoized() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    mock_with_auth("/files/file-1", "GET")
        .respond_with(success_response(file_object("file-1", "train.jsonl")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let dataset = Dataset::new(client, "file-1", None);

    assert_eq!(dataset.info().await.unwrap().bytes, 140);
    assert_eq!(dataset.info().await.unwrap().purpose, "fine-tune");
}

#[tokio::test]
async fn test_dataset_delete_retries_conflict() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    mock_with_auth("/files/file-1", "DELETE")
        .respond_with(error_response(409, "File is still processing", "invalid_request_error"))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    mock_with_auth("/files/file-1", "DELETE")
        .respond_with(success_response(json!({
            "id": "file-1",
            "object": "file",
            "deleted": true
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let deleted = Dataset::new(client, "file-1", None).delete().await.unwrap();

    assert!(deleted);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_dataset_delete_gives_up() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    Mock::given(method("DELETE"))
        .and(path("/files/file-1"))
        .respond_with(error_response(503, "Service unavailable", "server_error"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let deleted = Dataset::new(client, "file-1", None).delete().await.unwrap();

    assert!(!deleted);
}

#[tokio::test]
async fn test_dataset_download_to_file() {
    let mock_server = setup_mock_server().await;
    let cache = tempfile::tempdir().unwrap();

    mock_with_auth("/files/file-1/content", "GET")
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{\"prompt\":\"A\",\"completion\":\"B\"}\n", "application/octet-stream"),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, cache.path());
    let target = cache.path().join("downloads").join("file-1.jsonl");
    Dataset::new(client, "file-1", None).to_file(&target).await.unwrap();

    assert!(opentrain::dataset::validate(&target));
}

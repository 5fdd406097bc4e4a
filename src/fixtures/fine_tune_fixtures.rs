//! Fine-tune fixtures

use serde_json::json;

/// A job that has just been queued
pub fn fine_tune_response() -> serde_json::Value {
    fine_tune_with("ft-AF1WoRqd3aJAHsqc9NY7iL8F", "pending", None)
}

/// A finished job that produced a model
pub fn succeeded_fine_tune_response() -> serde_json::Value {
    fine_tune_with(
        "ft-AF1WoRqd3aJAHsqc9NY7iL8F",
        "succeeded",
        Some("curie:ft-acmeco-2021-03-03-21-44-20"),
    )
}

pub fn fine_tune_with(id: &str, status: &str, fine_tuned_model: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "object": "fine-tune",
        "model": "curie",
        "created_at": 1614807352,
        "updated_at": 1614807352,
        "events": [
            {
                "object": "fine-tune-event",
                "created_at": 1614807352,
                "level": "info",
                "message": "Job enqueued. Waiting for jobs ahead to complete. Queue number: 0."
            }
        ],
        "fine_tuned_model": fine_tuned_model,
        "hyperparams": {
            "batch_size": 4,
            "learning_rate_multiplier": 0.1,
            "n_epochs": 4,
            "prompt_loss_weight": 0.1
        },
        "organization_id": "org-123",
        "result_files": [],
        "status": status,
        "validation_files": [],
        "training_files": [
            {
                "id": "file-abc123",
                "object": "file",
                "bytes": 1547276,
                "created_at": 1610062281,
                "filename": "my-data-train.jsonl",
                "purpose": "fine-tune"
            }
        ]
    })
}

pub fn list_fine_tunes_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [
            fine_tune_with("ft-1", "succeeded", Some("ada:ft-personal-2023-01-01")),
            fine_tune_with("ft-2", "running", None),
            fine_tune_with("ft-3", "failed", None),
            fine_tune_with("ft-4", "cancelled", Some("babbage:ft-personal-2023-02-02"))
        ]
    })
}

pub fn fine_tune_events() -> Vec<serde_json::Value> {
    vec![
        json!({
            "object": "fine-tune-event",
            "created_at": 1614807352,
            "level": "info",
            "message": "Job enqueued. Waiting for jobs ahead to complete. Queue number: 0."
        }),
        json!({
            "object": "fine-tune-event",
            "created_at": 1614807356,
            "level": "info",
            "message": "Job started."
        }),
        json!({
            "object": "fine-tune-event",
            "created_at": 1614807861,
            "level": "info",
            "message": "Uploaded snapshot: curie:ft-acmeco-2021-03-03-21-44-20."
        }),
        json!({
            "object": "fine-tune-event",
            "created_at": 1614807864,
            "level": "info",
            "message": "Job succeeded."
        }),
    ]
}

use crate::client::OpenTrainClient;
use crate::errors::OpenTrainResult;
use crate::services::fine_tunes::FineTuneStatus;

/// Names of models produced by the caller's fine-tunes, optionally only
/// those whose job succeeded. Jobs without a model are skipped.
pub async fn list_fine_tunes(
    client: &dyn OpenTrainClient,
    just_succeeded: bool,
) -> OpenTrainResult<Vec<String>> {
    let jobs = client.fine_tunes().list(None).await?;

    Ok(jobs
        .data
        .into_iter()
        .filter(|job| !just_succeeded || job.status == FineTuneStatus::Succeeded)
        .filter_map(|job| job.fine_tuned_model)
        .collect())
}

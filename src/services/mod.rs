pub mod completions;
pub mod files;
pub mod fine_tunes;

use crate::auth::{apply_organization, AuthManager};
use crate::errors::OpenTrainResult;
use http::HeaderMap;
use serde::de::DeserializeOwned;

/// Headers for one call, scoped to `organization` when given.
pub(crate) async fn request_headers(
    auth_manager: &dyn AuthManager,
    organization: Option<&str>,
) -> OpenTrainResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    if let Some(org_id) = organization {
        apply_organization(&mut headers, org_id)?;
    }
    auth_manager.apply_auth(&mut headers).await?;
    Ok(headers)
}

pub(crate) fn decode<T: DeserializeOwned>(value: serde_json::Value) -> OpenTrainResult<T> {
    serde_json::from_value(value).map_err(Into::into)
}

use crate::domain::version::RELEASE_KEY_PREFIX;
use crate::domain::{Release, select_latest};
use crate::error::AppError;
use crate::storage::{ObjectStorage, StorageError};
use crate::utils::state::AppState;
use crate::utils::url::download_url;
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use std::sync::Arc;

/// Upper bound on objects fetched per request. Listings are not paginated.
pub const LIST_LIMIT: usize = 720;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LatestRelease {
    pub file_name: String,
    pub download_url: String,
}

impl LatestRelease {
    pub fn new(release: Release, download_base_url: &str) -> Self {
        LatestRelease {
            download_url: download_url(download_base_url, &release.key),
            file_name: release.key,
        }
    }
}

/// Lists the release prefix once and picks the newest version among the
/// returned keys.
pub async fn find_latest_release(
    storage: &dyn ObjectStorage,
) -> Result<Option<Release>, StorageError> {
    let objects = storage.list_objects(RELEASE_KEY_PREFIX, LIST_LIMIT).await?;
    tracing::debug!("listed {} candidate objects", objects.len());
    Ok(select_latest(objects.into_iter().map(|object| object.key)))
}

/// Answers every request, whatever its path or method.
pub async fn latest_release_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LatestRelease>, AppError> {
    let release = find_latest_release(state.storage.as_ref())
        .await?
        .ok_or_else(|| AppError::NoVersionsFound(RELEASE_KEY_PREFIX.to_string()))?;
    tracing::info!("latest release is {} ({})", release.version, release.key);
    Ok(Json(LatestRelease::new(
        release,
        &state.config.download_base_url,
    )))
}

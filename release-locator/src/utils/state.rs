use crate::config::{Config, StorageType};
use crate::storage::ObjectStorage;
use crate::storage::driver::filesystem::FilesystemStorage;
use crate::storage::driver::s3::{S3Config, S3Storage};
use std::sync::Arc;

/// Shared, read-only request context. Nothing in here is mutated after
/// startup.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn ObjectStorage>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> Self {
        let storage_backend: Arc<dyn ObjectStorage> = match config.storage_typ {
            StorageType::S3 => Arc::new(
                S3Storage::new(&S3Config {
                    bucket: config.bucket.clone(),
                    region: config.region.clone(),
                    endpoint: config.endpoint.clone(),
                })
                .await,
            ),
            StorageType::Filesystem => Arc::new(FilesystemStorage::new(&config.root_dir)),
        };
        AppState::with_storage(config, storage_backend)
    }

    pub fn with_storage(config: Config, storage: Arc<dyn ObjectStorage>) -> Self {
        AppState {
            storage,
            config: Arc::new(config),
        }
    }
}

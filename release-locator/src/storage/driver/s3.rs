//! S3 driver built on aws-sdk-s3. Works against any S3-compatible service,
//! including Cloudflare R2 when `endpoint` points at the account endpoint.

use crate::storage::{ObjectStorage, ObjectSummary, StorageError};

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;

/// S3 backend options. Credentials come from the default AWS provider chain.
#[derive(Debug, Clone)]
pub struct S3Config {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint, e.g. `https://<account>.r2.cloudflarestorage.com`.
    pub endpoint: Option<String>,
}

pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl S3Storage {
    pub async fn new(config: &S3Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        // Path-style addressing for custom endpoints
        let builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        let s3_config = if config.endpoint.is_some() {
            builder.force_path_style(true).build()
        } else {
            builder.build()
        };

        S3Storage::from_client(Client::from_conf(s3_config), config.bucket.clone())
    }

    pub fn from_client(client: Client, bucket: impl Into<String>) -> Self {
        S3Storage {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn list_objects(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<ObjectSummary>, StorageError> {
        let max_keys = i32::try_from(limit).unwrap_or(i32::MAX);
        let output = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .max_keys(max_keys)
            .send()
            .await
            .map_err(|e| StorageError::Backend(DisplayErrorContext(&e).to_string()))?;

        let objects: Vec<ObjectSummary> = output
            .contents()
            .iter()
            .filter_map(|object| object.key())
            .map(ObjectSummary::new)
            .collect();
        tracing::debug!(
            "listed {} objects under `{prefix}` in bucket {}",
            objects.len(),
            self.bucket
        );
        Ok(objects)
    }
}

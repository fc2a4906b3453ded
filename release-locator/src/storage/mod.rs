use thiserror::Error;

pub mod driver;

/// A stored object as reported by a listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub key: String,
}

impl ObjectSummary {
    pub fn new(key: impl Into<String>) -> Self {
        ObjectSummary { key: key.into() }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("object listing failed: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only view of the bucket holding release artifacts.
#[async_trait::async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Lists at most `limit` objects whose keys start with `prefix`.
    ///
    /// No ordering is guaranteed. A failed call yields no partial results.
    async fn list_objects(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<ObjectSummary>, StorageError>;
}

#[cfg(test)]
pub(crate) mod mock;

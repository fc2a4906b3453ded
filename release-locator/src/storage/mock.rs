use std::sync::Mutex;

use crate::storage::{ObjectStorage, ObjectSummary, StorageError};

/// In-memory bucket that records every listing call.
pub(crate) struct MockStorage {
    keys: Vec<String>,
    fail: bool,
    calls: Mutex<Vec<(String, usize)>>,
}

impl MockStorage {
    pub(crate) fn with_keys(keys: &[&str]) -> Self {
        MockStorage {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            fail: false,
            calls: Mutex::new(vec![]),
        }
    }

    pub(crate) fn failing() -> Self {
        MockStorage {
            fail: true,
            ..MockStorage::with_keys(&[])
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ObjectStorage for MockStorage {
    async fn list_objects(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<ObjectSummary>, StorageError> {
        self.calls.lock().unwrap().push((prefix.to_string(), limit));
        if self.fail {
            return Err(StorageError::Backend("connection reset by peer".into()));
        }
        // unfiltered, so tests can mix in keys from outside the prefix
        Ok(self
            .keys
            .iter()
            .take(limit)
            .map(|k| ObjectSummary::new(k.as_str()))
            .collect())
    }
}

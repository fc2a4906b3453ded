use std::path::PathBuf;

use crate::storage::{ObjectStorage, ObjectSummary, StorageError};

use tokio::fs::{metadata, read_dir};

/// Serves a local directory as if it were a bucket.
///
/// Every regular file below `root` is an object; its key is the path relative
/// to `root` with `/` separators, e.g. `<root>/builds/a.zip` has key
/// `builds/a.zip`. Symlinks to files are listed under the link's own name;
/// symlinked directories are not descended into, and dangling links are
/// skipped.
pub struct FilesystemStorage {
    root: PathBuf,
}

impl FilesystemStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FilesystemStorage { root: root.into() }
    }

    async fn walk_keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = vec![];
        let mut pending = vec![(self.root.clone(), String::new())];
        while let Some((dir, key_prefix)) = pending.pop() {
            let mut entries = read_dir(&dir).await?;
            while let Some(entry) = entries.next_entry().await? {
                let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
                    tracing::warn!("skipping non UTF-8 path {}", entry.path().display());
                    continue;
                };
                let key = format!("{key_prefix}{file_name}");
                let file_type = entry.file_type().await?;
                if file_type.is_dir() {
                    pending.push((entry.path(), format!("{key}/")));
                } else if file_type.is_file() {
                    keys.push(key);
                } else if file_type.is_symlink() {
                    match metadata(entry.path()).await {
                        Ok(target) if target.is_file() => keys.push(key),
                        Ok(_) => tracing::debug!("not following directory link `{key}`"),
                        Err(e) => tracing::warn!("skipping dangling link `{key}`: {e}"),
                    }
                }
            }
        }
        Ok(keys)
    }
}

#[async_trait::async_trait]
impl ObjectStorage for FilesystemStorage {
    async fn list_objects(
        &self,
        prefix: &str,
        limit: usize,
    ) -> Result<Vec<ObjectSummary>, StorageError> {
        let mut keys: Vec<String> = self
            .walk_keys()
            .await?
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .collect();
        // bucket listings come back in key order
        keys.sort();
        keys.truncate(limit);
        tracing::debug!(
            "listed {} objects under `{prefix}` in {}",
            keys.len(),
            self.root.display()
        );
        Ok(keys.into_iter().map(ObjectSummary::new).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &std::path::Path, key: &str) {
        let path = root.join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"artifact").unwrap();
    }

    fn keys(objects: Vec<ObjectSummary>) -> Vec<String> {
        objects.into_iter().map(|o| o.key).collect()
    }

    #[tokio::test]
    async fn test_list_by_prefix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "nodebox-dashboard-v1.0.0.zip");
        touch(dir.path(), "nodebox-dashboard-v0.9.0.zip");
        touch(dir.path(), "README.md");
        touch(dir.path(), "builds/nodebox-dashboard-v9.9.9.zip");
        fs::create_dir_all(dir.path().join("nodebox-dashboard-vempty")).unwrap();

        let storage = FilesystemStorage::new(dir.path());
        let listed = storage
            .list_objects("nodebox-dashboard-v", 720)
            .await
            .unwrap();
        assert_eq!(
            keys(listed),
            vec![
                "nodebox-dashboard-v0.9.0.zip".to_string(),
                "nodebox-dashboard-v1.0.0.zip".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_nested_keys_use_slashes() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "builds/nightly/a.zip");

        let storage = FilesystemStorage::new(dir.path());
        let listed = storage.list_objects("builds/", 10).await.unwrap();
        assert_eq!(keys(listed), vec!["builds/nightly/a.zip".to_string()]);
    }

    #[tokio::test]
    async fn test_limit_is_respected() {
        let dir = tempfile::tempdir().unwrap();
        for patch in 0..5 {
            touch(dir.path(), &format!("nodebox-dashboard-v1.0.{patch}"));
        }

        let storage = FilesystemStorage::new(dir.path());
        let listed = storage.list_objects("nodebox-dashboard-v", 3).await.unwrap();
        assert_eq!(listed.len(), 3);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinked_files_are_listed() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "store/build-42.zip");
        touch(dir.path(), "store/nested/a.zip");
        symlink(
            dir.path().join("store/build-42.zip"),
            dir.path().join("nodebox-dashboard-v2.0.0.zip"),
        )
        .unwrap();
        symlink(
            dir.path().join("store/nested"),
            dir.path().join("nodebox-dashboard-vdir"),
        )
        .unwrap();
        symlink(
            dir.path().join("store/missing.zip"),
            dir.path().join("nodebox-dashboard-v3.0.0.zip"),
        )
        .unwrap();

        let storage = FilesystemStorage::new(dir.path());
        let listed = storage
            .list_objects("nodebox-dashboard-v", 720)
            .await
            .unwrap();
        assert_eq!(keys(listed), vec!["nodebox-dashboard-v2.0.0.zip".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FilesystemStorage::new(dir.path().join("does-not-exist"));
        let result = storage.list_objects("nodebox-dashboard-v", 720).await;
        assert!(matches!(result, Err(StorageError::Io(_))));
    }
}

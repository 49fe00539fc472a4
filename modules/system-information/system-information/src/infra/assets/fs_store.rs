use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::domain::repo::{AssetStore, StoredAsset};

/// Asset store writing blobs under a root directory, one file per
/// logical name. Storing the same name again overwrites the previous
/// blob, which matches the logo lifecycle: only the latest upload is
/// ever served.
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn store_one(&self, name: &str, bytes: &[u8]) -> anyhow::Result<StoredAsset> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.root.join(name);
        tokio::fs::write(&path, bytes).await?;

        debug!(path = %path.display(), size = bytes.len(), "stored asset");

        Ok(StoredAsset {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            size: bytes.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_blob_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path());

        let asset = store.store_one("product_logo", b"png bytes").await.unwrap();

        assert_eq!(asset.name, "product_logo");
        assert_eq!(asset.size, 9);

        let written = tokio::fs::read(dir.path().join("product_logo"))
            .await
            .unwrap();
        assert_eq!(written, b"png bytes");
    }

    #[tokio::test]
    async fn storing_again_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsAssetStore::new(dir.path());

        store.store_one("product_logo", b"first").await.unwrap();
        store.store_one("product_logo", b"second").await.unwrap();

        let written = tokio::fs::read(dir.path().join("product_logo"))
            .await
            .unwrap();
        assert_eq!(written, b"second");
    }
}

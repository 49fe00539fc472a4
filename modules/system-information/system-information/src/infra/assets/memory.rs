use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::domain::repo::{AssetStore, StoredAsset};

/// Asset store backed by process memory, recording every store call.
///
/// Used by the test suite and by embedded deployments without a blob
/// backend.
#[derive(Default)]
pub struct InMemoryAssetStore {
    stored: Mutex<Vec<(String, Vec<u8>)>>,
}

impl InMemoryAssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(name, bytes)` pair stored so far, in call order.
    #[must_use]
    pub fn stored(&self) -> Vec<(String, Vec<u8>)> {
        self.stored.lock().clone()
    }
}

#[async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn store_one(&self, name: &str, bytes: &[u8]) -> anyhow::Result<StoredAsset> {
        let size = bytes.len() as u64;
        self.stored.lock().push((name.to_owned(), bytes.to_vec()));

        Ok(StoredAsset {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            size,
        })
    }
}

use async_trait::async_trait;
use uuid::Uuid;

/// Persisted key-value settings store consumed by this module.
///
/// The store is owned by the surrounding application; this module only
/// reads and conditionally overwrites specific keys.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<serde_json::Value>>;

    /// Write every entry as a single atomic unit: either all entries are
    /// persisted or the store is left exactly as it was. Keys not in
    /// `changes` are never touched.
    async fn apply(&self, changes: &[(String, serde_json::Value)]) -> anyhow::Result<()>;
}

/// Handle returned by the asset store for one stored blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
}

/// Binary asset storage backend consumed by the logo persister.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn store_one(&self, name: &str, bytes: &[u8]) -> anyhow::Result<StoredAsset>;
}

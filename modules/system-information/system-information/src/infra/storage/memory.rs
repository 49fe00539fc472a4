use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use crate::domain::repo::SettingsStore;

/// Settings store backed by process memory.
///
/// Used by the test suite and by embedded deployments that keep settings
/// in the host application's own persistence. The write lock is held for
/// the whole batch, so `apply` is atomic with respect to readers.
#[derive(Default)]
pub struct InMemorySettingsStore {
    values: RwLock<BTreeMap<String, Value>>,
}

impl InMemorySettingsStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a single setting, bypassing the batch contract. Intended for
    /// wiring up externally-owned flags such as `system_online_service`.
    pub fn seed(&self, key: impl Into<String>, value: Value) {
        self.values.write().insert(key.into(), value);
    }

    /// Snapshot of every stored setting.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.values.read().clone()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Value>> {
        Ok(self.values.read().get(key).cloned())
    }

    async fn apply(&self, changes: &[(String, Value)]) -> anyhow::Result<()> {
        let mut values = self.values.write();
        for (key, value) in changes {
            values.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}

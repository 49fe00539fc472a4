use system_information_sdk::SystemInformationError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Settings store error: {0}")]
    SettingsStore(#[source] anyhow::Error),

    #[error("Asset store error: {0}")]
    AssetStore(#[source] anyhow::Error),
}

impl DomainError {
    pub fn settings_store(e: impl Into<anyhow::Error>) -> Self {
        Self::SettingsStore(e.into())
    }

    pub fn asset_store(e: impl Into<anyhow::Error>) -> Self {
        Self::AssetStore(e.into())
    }
}

impl From<DomainError> for SystemInformationError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::SettingsStore(source) | DomainError::AssetStore(source) => {
                Self::storage(source.to_string())
            }
        }
    }
}

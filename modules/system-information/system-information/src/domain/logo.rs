use std::sync::Arc;

use time::OffsetDateTime;
use tracing::debug;

use super::error::DomainError;
use super::repo::AssetStore;

/// Logical asset name of the unmodified uploaded logo.
pub const LOGO_ORIGINAL: &str = "product_logo";
/// Logical asset name of the resized/normalized variant.
pub const LOGO_RESIZED: &str = "product_logo_resized";

/// Produces the resized/normalized logo variant.
///
/// Actual image scaling belongs to the deployment's imaging backend;
/// this module only orchestrates the two stores around it.
pub trait LogoResizer: Send + Sync {
    fn resize(&self, bytes: &[u8]) -> anyhow::Result<Vec<u8>>;
}

/// Resizer for deployments without an imaging backend: the resized
/// variant is the original, byte for byte.
pub struct PassthroughResizer;

impl LogoResizer for PassthroughResizer {
    fn resize(&self, bytes: &[u8]) -> anyhow::Result<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}

/// Persists the product logo in two variants through the asset store.
pub struct ProductLogo {
    assets: Arc<dyn AssetStore>,
    resizer: Arc<dyn LogoResizer>,
}

impl ProductLogo {
    pub fn new(assets: Arc<dyn AssetStore>, resizer: Arc<dyn LogoResizer>) -> Self {
        Self { assets, resizer }
    }

    /// Stores the original and the resized variant, failing as a unit if
    /// either store fails. Returns the epoch-seconds stamp consumers use
    /// as the `product_logo` cache-busting version.
    pub async fn store(&self, raw: &[u8]) -> Result<i64, DomainError> {
        let resized = self.resizer.resize(raw).map_err(DomainError::asset_store)?;

        let original = self
            .assets
            .store_one(LOGO_ORIGINAL, raw)
            .await
            .map_err(DomainError::asset_store)?;
        let variant = self
            .assets
            .store_one(LOGO_RESIZED, &resized)
            .await
            .map_err(DomainError::asset_store)?;

        debug!(
            original_id = %original.id,
            resized_id = %variant.id,
            "stored product logo variants"
        );

        Ok(OffsetDateTime::now_utc().unix_timestamp())
    }
}

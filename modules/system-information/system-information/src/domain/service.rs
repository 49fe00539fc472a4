use std::sync::Arc;

use serde_json::Value;
use system_information_sdk::models::{ExecutionResult, SystemInformationInput};
use tracing::{debug, info, instrument};

use super::error::DomainError;
use super::fields::SettingKeys;
use super::logo::ProductLogo;
use super::repo::SettingsStore;
use super::url::decompose;
use super::validate;
use crate::config::SystemInformationConfig;

/// Coordinates one system-information batch: validate every field, then
/// apply the eligible settings as a single atomic write.
pub struct Service {
    settings: Arc<dyn SettingsStore>,
    logo: ProductLogo,
    config: SystemInformationConfig,
}

impl Service {
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        logo: ProductLogo,
        config: SystemInformationConfig,
    ) -> Self {
        Self {
            settings,
            logo,
            config,
        }
    }

    /// Executes the batch.
    ///
    /// `Ok` with `success == false` carries every validation error found
    /// and guarantees zero mutation. `Err` means a store failed while
    /// saving an otherwise valid batch; the settings store is left
    /// untouched in that case as well, because the logo variants are
    /// persisted before the single atomic settings write.
    #[instrument(skip(self, input), fields(has_logo = input.logo.is_some()))]
    pub async fn execute(
        &self,
        input: &SystemInformationInput,
    ) -> Result<ExecutionResult, DomainError> {
        let validated = validate::validate(input, &self.config);
        if !validated.errors.is_empty() {
            debug!(
                errors = validated.errors.len(),
                "rejecting system information batch"
            );
            return Ok(ExecutionResult::rejected(validated.errors));
        }

        let online_service = self.online_service().await?;

        let mut changes: Vec<(String, Value)> = Vec::new();

        if let Some(organization) = &input.organization {
            changes.push((
                SettingKeys::ORGANIZATION.to_owned(),
                Value::from(organization.as_str()),
            ));
        }
        if let Some(locale) = &input.locale_default {
            changes.push((
                SettingKeys::LOCALE_DEFAULT.to_owned(),
                Value::from(locale.as_str()),
            ));
        }
        if let Some(timezone) = &input.timezone_default {
            changes.push((
                SettingKeys::TIMEZONE_DEFAULT.to_owned(),
                Value::from(timezone.as_str()),
            ));
        }

        // An online-managed installation's public address is controlled
        // externally: the URL must still validate, but its decomposition
        // is withheld from the apply set.
        if let Some(parsed) = &validated.url {
            if online_service {
                debug!("online-managed installation, withholding http_type and fqdn");
            } else {
                let parts = decompose(parsed);
                changes.push((SettingKeys::HTTP_TYPE.to_owned(), Value::from(parts.http_type)));
                changes.push((SettingKeys::FQDN.to_owned(), Value::from(parts.fqdn)));
            }
        }

        // Asset stores are not transactional, so the logo variants go out
        // first; the stamp then rides in the atomic settings write and a
        // failure on either side leaves every setting unchanged.
        if let Some(logo) = &input.logo {
            let stamp = self.logo.store(logo).await?;
            changes.push((SettingKeys::PRODUCT_LOGO.to_owned(), Value::from(stamp)));
        }

        self.settings
            .apply(&changes)
            .await
            .map_err(DomainError::settings_store)?;

        info!(settings = changes.len(), "applied system information batch");

        Ok(ExecutionResult::applied(changes.into_iter().collect()))
    }

    async fn online_service(&self) -> Result<bool, DomainError> {
        let value = self
            .settings
            .get(SettingKeys::SYSTEM_ONLINE_SERVICE)
            .await
            .map_err(DomainError::settings_store)?;

        Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
    }
}

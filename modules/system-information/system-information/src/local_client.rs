use std::sync::Arc;

use async_trait::async_trait;
use system_information_sdk::{
    ExecutionResult, SystemInformationApi, SystemInformationError, SystemInformationInput,
};

use crate::domain::service::Service;

/// In-process implementation of [`SystemInformationApi`] over the domain
/// service, for consumers living in the same process.
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SystemInformationApi for LocalClient {
    async fn set_system_information(
        &self,
        input: &SystemInformationInput,
    ) -> Result<ExecutionResult, SystemInformationError> {
        self.service.execute(input).await.map_err(Into::into)
    }
}

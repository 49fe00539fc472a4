//! `SystemInformationApi` trait definition.

use async_trait::async_trait;

use crate::errors::SystemInformationError;
use crate::models::{ExecutionResult, SystemInformationInput};

/// Public API trait for the system-information module.
///
/// Applies a batch of system-identity settings as a single all-or-nothing
/// operation. An `Ok` result with `success == false` means the input was
/// rejected by validation and nothing changed; an `Err` means the stores
/// could not save an otherwise valid batch.
#[async_trait]
pub trait SystemInformationApi: Send + Sync {
    async fn set_system_information(
        &self,
        input: &SystemInformationInput,
    ) -> Result<ExecutionResult, SystemInformationError>;
}

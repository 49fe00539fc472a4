//! System-Information Module Implementation
//!
//! The public API is defined in `system-information-sdk` and re-exported here.

pub use system_information_sdk::{
    ExecutionResult, Field, SystemInformationApi, SystemInformationError, SystemInformationInput,
    ValidationError,
};

pub mod local_client;
pub use local_client::LocalClient;

#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

//! Public contract of the system-information module.
//!
//! Transport-agnostic types and the API trait consumed by other modules
//! and by the setup entry points.

pub mod api;
pub mod errors;
pub mod models;

pub use api::SystemInformationApi;
pub use errors::SystemInformationError;
pub use models::{ExecutionResult, Field, SystemInformationInput, ValidationError};

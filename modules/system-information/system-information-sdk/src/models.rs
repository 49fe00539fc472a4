//! Public models for the system-information module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the module and its consumers. The entry point (HTTP, GraphQL,
//! CLI setup wizard) maps its own payloads onto these types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single batch of system-identity settings submitted by an administrator.
///
/// All fields are optional at the type level so that missing required
/// fields surface as validation errors instead of deserialization
/// failures; `organization` and `url` are required for the batch to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemInformationInput {
    pub organization: Option<String>,
    pub url: Option<String>,
    pub locale_default: Option<String>,
    pub timezone_default: Option<String>,
    /// Raw logo image bytes. Stored in two variants when present.
    pub logo: Option<Vec<u8>>,
}

/// Fields of [`SystemInformationInput`] that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Organization,
    Url,
    Logo,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Organization => "organization",
            Self::Url => "url",
            Self::Logo => "logo",
        };
        f.write_str(name)
    }
}

/// A user-correctable problem with one field of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Outcome of executing a batch.
///
/// `errors` is non-empty iff the batch was rejected; `updated_settings`
/// is non-empty iff it was applied. Use [`ExecutionResult::applied`] and
/// [`ExecutionResult::rejected`] to keep the two in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    pub errors: Vec<ValidationError>,
    pub updated_settings: BTreeMap<String, serde_json::Value>,
}

impl ExecutionResult {
    #[must_use]
    pub fn applied(updated_settings: BTreeMap<String, serde_json::Value>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            updated_settings,
        }
    }

    #[must_use]
    pub fn rejected(errors: Vec<ValidationError>) -> Self {
        Self {
            success: false,
            errors,
            updated_settings: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }
}

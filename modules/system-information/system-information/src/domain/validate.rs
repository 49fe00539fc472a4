//! Per-field validators for the system-information batch.
//!
//! Validators are pure functions of the input: each produces zero or one
//! [`ValidationError`] and never touches storage. The coordinator runs
//! all of them and collects every error so the caller can correct the
//! whole batch in one round trip.

use system_information_sdk::models::{Field, SystemInformationInput, ValidationError};
use url::Url;

use crate::config::SystemInformationConfig;

pub const MSG_REQUIRED: &str = "is required";
pub const MSG_URL_INVALID: &str = "should look like this: https://zammad.example.com";
pub const MSG_LOGO_TOO_LARGE: &str = "is too large";

/// Outcome of running every field validator against one batch.
#[derive(Debug)]
pub struct Validated {
    pub errors: Vec<ValidationError>,
    /// Parsed public URL; present iff the URL field validated.
    pub url: Option<Url>,
}

/// Runs all field validators, accumulating every error.
///
/// Locale and timezone are opaque pass-through settings and have no
/// validator.
pub fn validate(input: &SystemInformationInput, config: &SystemInformationConfig) -> Validated {
    let mut errors = Vec::new();

    if let Some(e) = validate_organization(input.organization.as_deref()) {
        errors.push(e);
    }

    let url = match validate_url(input.url.as_deref()) {
        Ok(url) => Some(url),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    if let Some(e) = validate_logo(input.logo.as_deref(), config.max_logo_bytes) {
        errors.push(e);
    }

    Validated { errors, url }
}

fn validate_organization(organization: Option<&str>) -> Option<ValidationError> {
    match organization {
        Some(value) if !value.trim().is_empty() => None,
        _ => Some(ValidationError::new(Field::Organization, MSG_REQUIRED)),
    }
}

fn validate_url(url: Option<&str>) -> Result<Url, ValidationError> {
    let invalid = || ValidationError::new(Field::Url, MSG_URL_INVALID);

    let raw = url.ok_or_else(invalid)?;
    let parsed = Url::parse(raw).map_err(|_| invalid())?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid());
    }
    if parsed.host_str().is_none() {
        return Err(invalid());
    }

    Ok(parsed)
}

fn validate_logo(logo: Option<&[u8]>, max_logo_bytes: usize) -> Option<ValidationError> {
    match logo {
        Some(bytes) if bytes.len() > max_logo_bytes => {
            Some(ValidationError::new(Field::Logo, MSG_LOGO_TOO_LARGE))
        }
        _ => None,
    }
}

use url::Url;

/// The two settings derived from the configured public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub http_type: String,
    pub fqdn: String,
}

/// Splits a validated URL into its `http_type` and `fqdn` settings.
///
/// Only called with a URL the validator has already accepted, so a host
/// is guaranteed to be present; this function never reports a user error.
/// The port and path are dropped, the scheme is lower-cased.
pub fn decompose(url: &Url) -> UrlParts {
    UrlParts {
        http_type: url.scheme().to_ascii_lowercase(),
        fqdn: url.host_str().map(str::to_owned).unwrap_or_default(),
    }
}

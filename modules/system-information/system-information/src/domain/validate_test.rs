#[cfg(test)]
mod tests {
    use super::super::url::decompose;
    use super::super::validate::{MSG_REQUIRED, MSG_URL_INVALID, validate};
    use crate::config::SystemInformationConfig;
    use system_information_sdk::models::{Field, SystemInformationInput};

    fn input(organization: Option<&str>, url: Option<&str>) -> SystemInformationInput {
        SystemInformationInput {
            organization: organization.map(str::to_owned),
            url: url.map(str::to_owned),
            ..SystemInformationInput::default()
        }
    }

    fn config() -> SystemInformationConfig {
        SystemInformationConfig::default()
    }

    #[test]
    fn accepts_a_complete_batch() {
        let validated = validate(&input(Some("Sample"), Some("http://example.com")), &config());

        assert!(validated.errors.is_empty());
        assert!(validated.url.is_some());
    }

    #[test]
    fn reports_whitespace_organization_as_missing() {
        let validated = validate(&input(Some("  \t"), Some("http://example.com")), &config());

        assert_eq!(validated.errors.len(), 1);
        assert_eq!(validated.errors[0].field, Field::Organization);
        assert_eq!(validated.errors[0].message, MSG_REQUIRED);
    }

    #[test]
    fn keeps_surrounding_whitespace_out_of_the_check_only() {
        // " Sample " is valid; trimming is for the blank check, the value
        // itself is applied as given.
        let validated = validate(&input(Some(" Sample "), Some("http://example.com")), &config());

        assert!(validated.errors.is_empty());
    }

    #[test]
    fn reports_every_missing_required_field() {
        let validated = validate(&input(None, None), &config());

        let fields: Vec<_> = validated.errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&Field::Organization));
        assert!(fields.contains(&Field::Url));
    }

    #[test]
    fn rejects_a_relative_url() {
        let validated = validate(&input(Some("Sample"), Some("meh")), &config());

        assert_eq!(validated.errors.len(), 1);
        assert_eq!(validated.errors[0].field, Field::Url);
        assert_eq!(validated.errors[0].message, MSG_URL_INVALID);
        assert!(validated.url.is_none());
    }

    #[test]
    fn rejects_a_non_http_scheme() {
        let validated = validate(&input(Some("Sample"), Some("ftp://example.com")), &config());

        assert_eq!(validated.errors.len(), 1);
        assert_eq!(validated.errors[0].field, Field::Url);
    }

    #[test]
    fn accepts_https_with_port_and_path() {
        let validated = validate(
            &input(Some("Sample"), Some("https://example.com:3000/setup")),
            &config(),
        );

        assert!(validated.errors.is_empty());
        let parts = decompose(&validated.url.unwrap());
        assert_eq!(parts.http_type, "https");
        assert_eq!(parts.fqdn, "example.com");
    }

    #[test]
    fn decompose_lower_cases_the_derived_settings() {
        let validated = validate(&input(Some("Sample"), Some("HTTP://EXAMPLE.com")), &config());

        let parts = decompose(&validated.url.unwrap());
        assert_eq!(parts.http_type, "http");
        assert_eq!(parts.fqdn, "example.com");
    }

    #[test]
    fn locale_and_timezone_are_opaque() {
        let batch = SystemInformationInput {
            locale_default: Some("definitely-not-a-locale".to_owned()),
            timezone_default: Some("Nowhere/Void".to_owned()),
            ..input(Some("Sample"), Some("http://example.com"))
        };

        assert!(validate(&batch, &config()).errors.is_empty());
    }

    #[test]
    fn rejects_logo_over_the_configured_limit() {
        let batch = SystemInformationInput {
            logo: Some(vec![0u8; 11]),
            ..input(Some("Sample"), Some("http://example.com"))
        };
        let small = SystemInformationConfig { max_logo_bytes: 10 };

        let validated = validate(&batch, &small);

        assert_eq!(validated.errors.len(), 1);
        assert_eq!(validated.errors[0].field, Field::Logo);
    }

    #[test]
    fn accepts_logo_at_the_limit() {
        let batch = SystemInformationInput {
            logo: Some(vec![0u8; 10]),
            ..input(Some("Sample"), Some("http://example.com"))
        };
        let small = SystemInformationConfig { max_logo_bytes: 10 };

        assert!(validate(&batch, &small).errors.is_empty());
    }
}

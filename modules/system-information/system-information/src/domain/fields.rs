/// Stable keys of the settings this module reads and writes.
pub struct SettingKeys;

impl SettingKeys {
    pub const ORGANIZATION: &'static str = "organization";
    pub const LOCALE_DEFAULT: &'static str = "locale_default";
    pub const TIMEZONE_DEFAULT: &'static str = "timezone_default";
    pub const HTTP_TYPE: &'static str = "http_type";
    pub const FQDN: &'static str = "fqdn";
    pub const PRODUCT_LOGO: &'static str = "product_logo";
    /// Owned by the hosting platform; read-only for this module. When true,
    /// the installation's public address is managed externally and the
    /// URL-derived settings are withheld from the apply set.
    pub const SYSTEM_ONLINE_SERVICE: &'static str = "system_online_service";
}

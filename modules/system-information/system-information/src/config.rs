use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SystemInformationConfig {
    /// Largest accepted logo upload. Oversized logos are rejected during
    /// validation, before anything is stored.
    #[serde(default = "default_max_logo_bytes")]
    pub max_logo_bytes: usize,
}

impl Default for SystemInformationConfig {
    fn default() -> Self {
        Self {
            max_logo_bytes: default_max_logo_bytes(),
        }
    }
}

fn default_max_logo_bytes() -> usize {
    5 * 1024 * 1024
}

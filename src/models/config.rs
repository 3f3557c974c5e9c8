use serde::Deserialize;

use crate::domain::relay::FormKind;

/// Configuration options of the web application.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Directory holding the tera templates.
    pub templates_dir: String,
    /// Directory served under `/assets`.
    pub static_dir: String,
    /// Key material for signing flash message cookies, at least 64 bytes.
    #[serde(default)]
    pub secret: String,
    /// Catalog JSON to load instead of the embedded one.
    #[serde(default)]
    pub catalog_path: Option<String>,
    pub relay: RelayConfig,
}

/// Settings of the third-party form relay.
#[derive(Clone, Debug, Deserialize)]
pub struct RelayConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub access_keys: AccessKeys,
}

/// Relay access key used by each form.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AccessKeys {
    pub contact: String,
    pub host_event: String,
    pub registration: String,
    pub youth_spotlight: String,
}

impl AccessKeys {
    pub fn for_form(&self, kind: FormKind) -> &str {
        match kind {
            FormKind::Contact => &self.contact,
            FormKind::HostEvent => &self.host_event,
            FormKind::Registration => &self.registration,
            FormKind::YouthSpotlight => &self.youth_spotlight,
        }
    }
}

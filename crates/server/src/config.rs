use shared_types::{AccessPolicy, FeatureFlags, PortalConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();
static POLICY: OnceLock<AccessPolicy> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect.
///
/// If the file is missing or unparseable, every feature flag is off and the
/// access section keeps the clinic defaults.
pub fn load_portal_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_portal_config(&contents);
            tracing::info!(
                features = ?config.features,
                missing_role = ?config.access.missing_role,
                "Loaded {CONFIG_PATH}"
            );
            config
        }
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} not found ({e}), using defaults");
            PortalConfig::default()
        }
    });
}

/// Parse config text, falling back to defaults on a malformed file.
pub fn parse_portal_config(contents: &str) -> PortalConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse {CONFIG_PATH}: {e}, using defaults");
        PortalConfig::default()
    })
}

/// The loaded configuration, or defaults before `load_portal_config()`.
pub fn portal_config() -> &'static PortalConfig {
    static DEFAULT: OnceLock<PortalConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(PortalConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &portal_config().features
}

/// The access policy built from the `[access]` section.
pub fn access_policy() -> &'static AccessPolicy {
    POLICY.get_or_init(|| AccessPolicy::from_settings(&portal_config().access))
}

use serde::Deserialize;

fn default_app_name() -> String {
    "EcoSellersHub".to_string()
}

fn default_storage_key() -> String {
    "user".to_string()
}

fn default_auth_delay_ms() -> u32 {
    1000
}

fn default_promo_prefix() -> String {
    "ECO".to_string()
}

fn default_promo_suffix_len() -> usize {
    5
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// localStorage key holding the signed-in session
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Simulated round trip of login and signup
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u32,
    #[serde(default = "default_promo_prefix")]
    pub promo_prefix: String,
    #[serde(default = "default_promo_suffix_len")]
    pub promo_suffix_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            storage_key: default_storage_key(),
            auth_delay_ms: default_auth_delay_ms(),
            promo_prefix: default_promo_prefix(),
            promo_suffix_len: default_promo_suffix_len(),
        }
    }
}

impl Config {
    /// Parses a JSON config, falling back to defaults for anything missing
    /// or malformed.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("invalid config, using defaults: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_json(r#"{"authDelayMs": 0, "appName": "Demo"}"#);

        assert_eq!(config.auth_delay_ms, 0);
        assert_eq!(config.app_name, "Demo");
        assert_eq!(config.storage_key, "user");
        assert_eq!(config.promo_prefix, "ECO");
        assert_eq!(config.promo_suffix_len, 5);
    }

    #[test]
    fn test_malformed_config_is_default() {
        assert_eq!(Config::from_json("{not json"), Config::default());
    }
}

//! Inspector configuration

use core_kernel::Currency;
use serde::Deserialize;

/// Inspector configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Log level
    pub log_level: String,
    /// Currency the headline amount is rendered in
    pub currency: Currency,
    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            currency: Currency::USD,
            pretty: true,
        }
    }
}

impl InspectConfig {
    /// Loads configuration from `PREVIEW_*` environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("PREVIEW").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InspectConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.currency, Currency::USD);
        assert!(config.pretty);
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: InspectConfig = config::Config::builder()
            .set_override("currency", "EUR")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.log_level, "info");
        assert!(config.pretty);
    }
}

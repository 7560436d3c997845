//! Site configuration.
//!
//! Loaded from an optional TOML file and then overridden by command-line
//! flags in the launcher. Every field has a default, so an empty file (or
//! no file) is a valid configuration.
//!
//! ```toml
//! [site]
//! locale = "ur"
//!
//! [contact]
//! endpoint = "https://api.example.com/contact"
//! timeout_secs = 10
//! simulated_delay_ms = 1500
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, ConfigResult};
use crate::i18n::Locale;

/// Delay of the simulated contact submission.
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;
/// Request timeout of the HTTP contact transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Locale the site opens in
    pub locale: Locale,
    /// Window title
    pub title: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            title: "PakTechnology".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// HTTP endpoint for submissions; `None` simulates delivery
    pub endpoint: Option<Url>,
    pub timeout_secs: u64,
    pub simulated_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!("Loaded site config from {}", path.display());
        Ok(config)
    }

    /// Override the contact endpoint from a raw string.
    pub fn with_endpoint(mut self, raw: &str) -> ConfigResult<Self> {
        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint(format!("{raw}: {e}")))?;
        self.contact.endpoint = Some(url);
        self.validate()?;
        Ok(self)
    }

    /// Override the start-up locale from a locale code.
    pub fn with_locale(mut self, code: &str) -> ConfigResult<Self> {
        self.site.locale =
            Locale::from_code(code).ok_or_else(|| ConfigError::UnsupportedLocale(code.to_string()))?;
        Ok(self)
    }

    pub fn with_simulated_delay_ms(mut self, delay_ms: u64) -> Self {
        self.contact.simulated_delay_ms = delay_ms;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(endpoint) = &self.contact.endpoint {
            if !matches!(endpoint.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidEndpoint(format!(
                    "{endpoint}: scheme must be http or https"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.contact.simulated_delay_ms, DEFAULT_SIMULATED_DELAY_MS);
        assert_eq!(config.site.locale, Locale::English);
    }

    #[test]
    fn parses_sections() {
        let config = SiteConfig::from_toml_str(
            r#"
            [site]
            locale = "ur"

            [contact]
            endpoint = "https://api.example.com/contact"
            timeout_secs = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.site.locale, Locale::Urdu);
        assert_eq!(config.contact.timeout_secs, 3);
        assert_eq!(
            config.contact.endpoint.as_ref().map(Url::as_str),
            Some("https://api.example.com/contact")
        );
        assert_eq!(config.contact.simulated_delay_ms, DEFAULT_SIMULATED_DELAY_MS);
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let err = SiteConfig::default()
            .with_endpoint("ftp://example.com/contact")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint(_)));

        let err = SiteConfig::default().with_endpoint("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint(_)));
    }

    #[test]
    fn rejects_unknown_locale() {
        assert!(matches!(
            SiteConfig::default().with_locale("fr"),
            Err(ConfigError::UnsupportedLocale(_))
        ));
        assert_eq!(
            SiteConfig::default().with_locale("ur").unwrap().site.locale,
            Locale::Urdu
        );
    }

    #[test]
    fn unknown_locale_in_file_is_parse_error() {
        let err = SiteConfig::from_toml_str("[site]\nlocale = \"xx\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn from_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "[contact]\nsimulated_delay_ms = 0\n").unwrap();
        let config = SiteConfig::from_file(&path).unwrap();
        assert_eq!(config.contact.simulated_delay_ms, 0);

        let missing = SiteConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io(_)));
    }
}

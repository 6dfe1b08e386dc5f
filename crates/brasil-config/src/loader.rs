use std::path::Path;

use secrecy::SecretString;

use crate::{Config, TRANSPARENCY_API_KEY_ENV};

impl Config {
    /// Load configuration from an optional TOML file
    ///
    /// Without a path the built-in defaults are used. Either way the
    /// transparency API key falls back to `TRANSPARENCY_API_KEY` when the
    /// file does not provide one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, placeholder expansion
    /// fails, TOML parsing fails, or validation fails
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
                Self::parse(&raw)?
            }
            None => Self::default(),
        };

        config.apply_environment();
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration text, expanding `{{ env.VAR }}` placeholders first
    ///
    /// # Errors
    ///
    /// Returns an error if expansion or TOML parsing fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))
    }

    /// Fill values the file left unset from the process environment
    pub fn apply_environment(&mut self) {
        if self.sources.transparencia.api_key().is_some() {
            return;
        }

        match std::env::var(TRANSPARENCY_API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => {
                self.sources.transparencia.api_key = Some(SecretString::from(key));
            }
            _ => {
                tracing::debug!("{TRANSPARENCY_API_KEY_ENV} not set");
            }
        }
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is zero or an upstream URL is not
    /// an absolute `http`/`https` URL
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.http.timeout.is_zero() {
            anyhow::bail!("http.timeout must be greater than zero");
        }

        if self.http.user_agent.trim().is_empty() {
            anyhow::bail!("http.user_agent must not be empty");
        }

        for (field, url) in self.sources.urls() {
            if !matches!(url.scheme(), "http" | "https") {
                anyhow::bail!("{field} must be an http or https URL, got '{url}'");
            }
            if url.cannot_be_a_base() || url.host_str().is_none() {
                anyhow::bail!("{field} must be an absolute URL with a host, got '{url}'");
            }
        }

        Ok(())
    }
}

//! Programmatic configuration builder for integration tests

use std::time::Duration;

use brasil_config::Config;
use secrecy::SecretString;
use url::Url;

/// Builder for configurations pointing every source at a mock upstream
pub struct ConfigBuilder {
    config: Config,
    base: String,
}

impl ConfigBuilder {
    pub fn new(base_url: &str) -> Self {
        let mut builder = Self {
            config: Config::default(),
            base: base_url.to_owned(),
        };

        let sources = &mut builder.config.sources;
        sources.transparencia.base_url = url(base_url, "/transparencia");
        sources.ibge.localidades_url = url(base_url, "/localidades");
        sources.ibge.agregados_url = url(base_url, "/agregados");
        sources.cnpj.base_url = url(base_url, "/cnpj");
        sources.bcb.sgs_url = url(base_url, "/sgs/bcdata.sgs");
        sources.bcb.olinda_url = url(base_url, "/olinda");
        sources.pncp.base_url = url(base_url, "/pncp");

        builder
    }

    pub fn with_api_key(mut self, key: &str) -> Self {
        self.config.sources.transparencia.api_key = Some(SecretString::from(key.to_owned()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.http.timeout = timeout;
        self
    }

    /// Point the SGS series at the endpoint that always answers 503
    pub fn with_sgs_in_maintenance(mut self) -> Self {
        self.config.sources.bcb.sgs_url = url(&self.base, "/maintenance/bcdata.sgs");
        self
    }

    /// Point IBGE at the endpoint that stalls
    pub fn with_slow_ibge(mut self) -> Self {
        self.config.sources.ibge.localidades_url = url(&self.base, "/slow");
        self
    }

    pub fn with_server_name(mut self, name: &str) -> Self {
        self.config.server.name = name.to_owned();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

fn url(base: &str, path: &str) -> Url {
    Url::parse(&format!("{base}{path}")).expect("valid URL")
}

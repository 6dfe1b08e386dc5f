use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

/// Upstream settings for every data source
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    #[serde(default)]
    pub transparencia: TransparenciaConfig,
    #[serde(default)]
    pub ibge: IbgeConfig,
    #[serde(default)]
    pub cnpj: CnpjConfig,
    #[serde(default)]
    pub bcb: BcbConfig,
    #[serde(default)]
    pub pncp: PncpConfig,
}

impl SourcesConfig {
    /// Every configured upstream URL, labelled for error messages
    pub fn urls(&self) -> [(&'static str, &Url); 7] {
        [
            ("sources.transparencia.base_url", &self.transparencia.base_url),
            ("sources.ibge.localidades_url", &self.ibge.localidades_url),
            ("sources.ibge.agregados_url", &self.ibge.agregados_url),
            ("sources.cnpj.base_url", &self.cnpj.base_url),
            ("sources.bcb.sgs_url", &self.bcb.sgs_url),
            ("sources.bcb.olinda_url", &self.bcb.olinda_url),
            ("sources.pncp.base_url", &self.pncp.base_url),
        ]
    }
}

/// Portal da Transparência
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransparenciaConfig {
    #[serde(default = "default_transparencia_url")]
    pub base_url: Url,
    /// Key sent in the `chave-api-dados` header
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

impl TransparenciaConfig {
    /// Configured key, treating an empty string as absent
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref().filter(|key| !key.expose_secret().trim().is_empty())
    }
}

impl Default for TransparenciaConfig {
    fn default() -> Self {
        Self {
            base_url: default_transparencia_url(),
            api_key: None,
        }
    }
}

/// IBGE localities and aggregates
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IbgeConfig {
    #[serde(default = "default_ibge_localidades_url")]
    pub localidades_url: Url,
    #[serde(default = "default_ibge_agregados_url")]
    pub agregados_url: Url,
}

impl Default for IbgeConfig {
    fn default() -> Self {
        Self {
            localidades_url: default_ibge_localidades_url(),
            agregados_url: default_ibge_agregados_url(),
        }
    }
}

/// Minha Receita company registry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CnpjConfig {
    #[serde(default = "default_cnpj_url")]
    pub base_url: Url,
}

impl Default for CnpjConfig {
    fn default() -> Self {
        Self {
            base_url: default_cnpj_url(),
        }
    }
}

/// Banco Central: SGS time series and the Olinda OData services
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BcbConfig {
    /// Series endpoint prefix; the series code is appended as `.{code}`
    #[serde(default = "default_bcb_sgs_url")]
    pub sgs_url: Url,
    #[serde(default = "default_bcb_olinda_url")]
    pub olinda_url: Url,
}

impl Default for BcbConfig {
    fn default() -> Self {
        Self {
            sgs_url: default_bcb_sgs_url(),
            olinda_url: default_bcb_olinda_url(),
        }
    }
}

/// Portal Nacional de Contratações Públicas
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PncpConfig {
    #[serde(default = "default_pncp_url")]
    pub base_url: Url,
}

impl Default for PncpConfig {
    fn default() -> Self {
        Self {
            base_url: default_pncp_url(),
        }
    }
}

fn known_url(raw: &'static str) -> Url {
    Url::parse(raw).expect("built-in upstream URL must be valid")
}

fn default_transparencia_url() -> Url {
    known_url("https://api.portaldatransparencia.gov.br/api-de-dados")
}

fn default_ibge_localidades_url() -> Url {
    known_url("https://servicodados.ibge.gov.br/api/v1/localidades")
}

fn default_ibge_agregados_url() -> Url {
    known_url("https://servicodados.ibge.gov.br/api/v3/agregados")
}

fn default_cnpj_url() -> Url {
    known_url("https://minhareceita.org")
}

fn default_bcb_sgs_url() -> Url {
    known_url("https://api.bcb.gov.br/dados/serie/bcdata.sgs")
}

fn default_bcb_olinda_url() -> Url {
    known_url("https://olinda.bcb.gov.br/olinda/servico")
}

fn default_pncp_url() -> Url {
    known_url("https://pncp.gov.br/api/consulta/v1")
}

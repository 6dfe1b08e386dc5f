use brasil_config::{CnpjConfig, HttpConfig};
use brasil_core::{QueryParams, Result, Source, SourceClient, SourceError, decode, endpoint_url, ident};
use url::Url;

use crate::types::{Company, CompanyResponse};

/// Normalize a CNPJ to `XX.XXX.XXX/XXXX-XX`
///
/// Any punctuation in the input is ignored; exactly 14 digits must remain.
pub fn format_cnpj(input: &str) -> Result<String> {
    let d = ident::require_digits(input, 14, "CNPJ")?;
    Ok(format!("{}.{}.{}/{}-{}", &d[0..2], &d[2..5], &d[5..8], &d[8..12], &d[12..14]))
}

/// Client for the Minha Receita company registry
#[derive(Debug, Clone)]
pub struct CnpjClient {
    http: SourceClient,
    base_url: Url,
}

impl CnpjClient {
    pub fn new(config: &CnpjConfig, http: &HttpConfig) -> Result<Self> {
        let client = SourceClient::builder(Source::MinhaReceita)
            .timeout(http.timeout)
            .user_agent(http.user_agent.clone())
            .build()?;

        Ok(Self {
            http: client,
            base_url: config.base_url.clone(),
        })
    }

    /// Registration data for one company
    ///
    /// A 404 from the registry becomes [`SourceError::NotFound`].
    pub async fn get_cnpj(&self, cnpj: &str) -> Result<CompanyResponse> {
        let formatted = format_cnpj(cnpj)?;
        tracing::debug!(cnpj = %formatted, "looking up company");
        let url = endpoint_url(self.base_url.as_str(), &format!("/{formatted}"), &QueryParams::new())?;

        let body = self.http.get(url).await.map_err(|e| match e {
            SourceError::Upstream { status: 404, .. } => SourceError::NotFound {
                entity: "CNPJ",
                id: formatted.clone(),
            },
            other => other,
        })?;

        let company: Company = decode(&body)?;

        Ok(CompanyResponse {
            company,
            source: Source::MinhaReceita,
        })
    }
}

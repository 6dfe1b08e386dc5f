use brasil_config::{HttpConfig, TransparenciaConfig};
use brasil_core::{
    PageSizeRange, Paging, QueryParams, Result, Source, SourceClient, SourceError, dates, endpoint_url, ident,
    non_blank,
};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    orgaos::{DEFAULT_ORGAO, orgao_name},
    types::{
        Contract, ContractsResponse, Convenio, ConveniosResponse, Remuneracao, RemuneracaoResponse, SanctionedCompany,
        SanctionsResponse, Servidor, ServidoresResponse,
    },
};

/// Header carrying the Portal da Transparência key
pub const API_KEY_HEADER: &str = "chave-api-dados";

/// The portal serves between 1 and 500 records per page
pub const PAGE_SIZE: PageSizeRange = PageSizeRange::new(1, 500, 100);

/// State searched for agreements when none is given
pub const DEFAULT_UF: &str = "MG";

/// Client for the Portal da Transparência data API
#[derive(Debug, Clone)]
pub struct TransparenciaClient {
    http: SourceClient,
    base_url: Url,
    has_key: bool,
}

impl TransparenciaClient {
    /// Build the client, attaching the API key header when a key is configured
    pub fn new(config: &TransparenciaConfig, http: &HttpConfig) -> Result<Self> {
        let mut builder = SourceClient::builder(Source::PortalTransparencia)
            .timeout(http.timeout)
            .user_agent(http.user_agent.clone());

        let key = config.api_key();
        if let Some(key) = key {
            builder = builder.secret_header(API_KEY_HEADER, key.expose_secret())?;
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
            has_key: key.is_some(),
        })
    }

    /// Whether requests carry an API key
    pub const fn has_api_key(&self) -> bool {
        self.has_key
    }

    /// Contracts signed by a federal organization
    pub async fn search_contracts(
        &self,
        orgao_code: Option<&str>,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<ContractsResponse> {
        let orgao = non_blank(orgao_code).unwrap_or(DEFAULT_ORGAO).to_owned();
        let paging = Paging::resolve(page, page_size, PAGE_SIZE);

        let params = QueryParams::new()
            .set("codigoOrgao", &orgao)
            .set("pagina", paging.page)
            .set("tamanhoPagina", paging.page_size);
        let contratos: Vec<Contract> = self.fetch("/contratos", &params).await?;

        Ok(ContractsResponse {
            total: contratos.len(),
            contratos,
            pagina: paging.page,
            tamanho_pagina: paging.page_size,
            orgao_nome: orgao_name(&orgao),
            orgao_consultado: orgao,
            source: Source::PortalTransparencia,
        })
    }

    /// Public servants whose name matches `nome`
    pub async fn search_servidores(
        &self,
        nome: &str,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<ServidoresResponse> {
        let nome = non_blank(Some(nome)).ok_or_else(|| SourceError::validation("nome is required"))?;
        let paging = Paging::resolve(page, page_size, PAGE_SIZE);

        let params = QueryParams::new()
            .set("nome", nome)
            .set("pagina", paging.page)
            .set("tamanhoPagina", paging.page_size);
        let servidores: Vec<Servidor> = self.fetch("/servidores", &params).await?;

        Ok(ServidoresResponse {
            total: servidores.len(),
            servidores,
            pagina: paging.page,
            tamanho_pagina: paging.page_size,
            source: Source::PortalTransparencia,
        })
    }

    /// Pay records of a servant for one month (`MM/YYYY`, previous month by default)
    pub async fn get_remuneracao(&self, cpf: &str, mes_ano: Option<&str>) -> Result<RemuneracaoResponse> {
        if cpf.trim().is_empty() {
            return Err(SourceError::validation("cpf is required"));
        }
        let cpf = ident::require_digits(cpf, 11, "CPF")?;
        let mes_ano = non_blank(mes_ano).map_or_else(
            || dates::previous_month(dates::today()).strftime("%m/%Y").to_string(),
            ToOwned::to_owned,
        );

        let params = QueryParams::new().set("mesAno", &mes_ano);
        let remuneracao: Vec<Remuneracao> = self
            .fetch(&format!("/servidores/{cpf}/remuneracao"), &params)
            .await?;

        Ok(RemuneracaoResponse {
            cpf,
            remuneracao,
            mes_ano,
            source: Source::PortalTransparencia,
        })
    }

    /// Federal transfer agreements with a state
    pub async fn search_convenios(
        &self,
        uf: Option<&str>,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<ConveniosResponse> {
        let uf = non_blank(uf).unwrap_or(DEFAULT_UF).to_owned();
        let paging = Paging::resolve(page, page_size, PAGE_SIZE);

        let params = QueryParams::new()
            .set("uf", &uf)
            .set("pagina", paging.page)
            .set("tamanhoPagina", paging.page_size);
        let convenios: Vec<Convenio> = self.fetch("/convenios", &params).await?;

        Ok(ConveniosResponse {
            total: convenios.len(),
            convenios,
            pagina: paging.page,
            tamanho_pagina: paging.page_size,
            uf,
            source: Source::PortalTransparencia,
        })
    }

    /// Companies in the CEIS sanctions register, optionally for one CNPJ
    pub async fn search_ceis(
        &self,
        cnpj: Option<&str>,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<SanctionsResponse> {
        let paging = Paging::resolve(page, page_size, PAGE_SIZE);

        let params = QueryParams::new()
            .set_opt("cnpj", cnpj)
            .set("pagina", paging.page)
            .set("tamanhoPagina", paging.page_size);
        let empresas: Vec<SanctionedCompany> = self.fetch("/ceis", &params).await?;

        Ok(SanctionsResponse {
            total: empresas.len(),
            empresas,
            pagina: paging.page,
            tamanho_pagina: paging.page_size,
            source: Source::PortalTransparencia,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, params: &QueryParams) -> Result<T> {
        let url = endpoint_url(self.base_url.as_str(), path, params)?;
        if !self.has_key {
            tracing::debug!(path, "calling Portal da Transparência without an API key");
        }
        self.http.get_json(url).await
    }
}

use std::sync::LazyLock;

use brasil_config::{HttpConfig, PncpConfig};
use brasil_core::{PageSizeRange, Paging, QueryParams, Result, Source, SourceClient, SourceError, endpoint_url, non_blank};
use indexmap::IndexMap;
use url::Url;

use crate::{
    modality::{MODALITIES, resolve_modality},
    types::{
        ContractPublication, ContractSearch, ContractsResponse, Page, PriceRegistration, PriceRegistrationSearch,
        PriceRegistrationsResponse,
    },
};

/// PNCP accepts between 10 and 500 records per page
pub const PAGE_SIZE: PageSizeRange = PageSizeRange::new(10, 500, 50);

/// Client for the PNCP consultation API
#[derive(Debug, Clone)]
pub struct PncpClient {
    http: SourceClient,
    base_url: Url,
}

impl PncpClient {
    pub fn new(config: &PncpConfig, http: &HttpConfig) -> Result<Self> {
        let client = SourceClient::builder(Source::Pncp)
            .timeout(http.timeout)
            .user_agent(http.user_agent.clone())
            .build()?;

        Ok(Self {
            http: client,
            base_url: config.base_url.clone(),
        })
    }

    /// Search procurement notices published in a date window
    ///
    /// GET `/contratacoes/publicacao`
    pub async fn search_contracts(&self, search: &ContractSearch) -> Result<ContractsResponse> {
        let (url, paging) = self.contracts_url(search)?;
        tracing::debug!(page = paging.page, page_size = paging.page_size, "searching PNCP notices");

        let page: Page<ContractPublication> = self.http.get_json(url).await?;

        Ok(ContractsResponse {
            contracts: page.data.unwrap_or_default(),
            total: page.total_registros.unwrap_or_default(),
            page: paging.page,
            page_size: paging.page_size,
            source: Source::Pncp,
        })
    }

    /// Search price registration records
    ///
    /// GET `/atas-registro-preco`
    pub async fn search_price_registrations(&self, search: &PriceRegistrationSearch) -> Result<PriceRegistrationsResponse> {
        let (url, paging) = self.price_registrations_url(search)?;

        let page: Page<PriceRegistration> = self.http.get_json(url).await?;
        let registrations = page.data.unwrap_or_default();

        Ok(PriceRegistrationsResponse {
            total: registrations.len(),
            registrations,
            page: paging.page,
            page_size: paging.page_size,
            source: Source::Pncp,
        })
    }

    /// Modality name to code table
    pub fn list_modalities(&self) -> &'static IndexMap<&'static str, u32> {
        LazyLock::force(&MODALITIES)
    }

    /// Request URL and effective paging for a notice search
    pub fn contracts_url(&self, search: &ContractSearch) -> Result<(Url, Paging)> {
        let start_date = required(&search.start_date, "start_date")?;
        let end_date = required(&search.end_date, "end_date")?;
        let paging = Paging::resolve(search.page, search.page_size, PAGE_SIZE);

        let params = QueryParams::new()
            .set("dataInicial", start_date)
            .set("dataFinal", end_date)
            .set("codigoModalidadeContratacao", resolve_modality(search.modality))
            .set("tamanhoPagina", paging.page_size)
            .set("pagina", paging.page)
            .set_opt("uf", search.state.as_deref());

        let url = endpoint_url(self.base_url.as_str(), "/contratacoes/publicacao", &params)?;
        Ok((url, paging))
    }

    /// Request URL and effective paging for a price registration search
    pub fn price_registrations_url(&self, search: &PriceRegistrationSearch) -> Result<(Url, Paging)> {
        let paging = Paging::resolve(search.page, search.page_size, PAGE_SIZE);

        let params = QueryParams::new()
            .set("tamanhoPagina", paging.page_size)
            .set("pagina", paging.page)
            .set_opt("uf", search.state.as_deref());

        let url = endpoint_url(self.base_url.as_str(), "/atas-registro-preco", &params)?;
        Ok((url, paging))
    }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str> {
    non_blank(Some(value)).ok_or_else(|| SourceError::validation(format!("{field} is required")))
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(base_url: &str) -> PncpClient {
        let config = PncpConfig {
            base_url: Url::parse(base_url).unwrap(),
        };
        PncpClient::new(&config, &HttpConfig::default()).unwrap()
    }

    fn search() -> ContractSearch {
        ContractSearch {
            start_date: "20240101".to_owned(),
            end_date: "20240131".to_owned(),
            ..ContractSearch::default()
        }
    }

    #[test]
    fn contracts_url_applies_defaults_and_omits_state() {
        let client = client("https://pncp.gov.br/api/consulta/v1");
        let (url, paging) = client.contracts_url(&search()).unwrap();

        assert_eq!(paging, Paging { page: 1, page_size: 50 });
        assert_eq!(url.path(), "/api/consulta/v1/contratacoes/publicacao");
        assert_eq!(
            url.query(),
            Some("dataInicial=20240101&dataFinal=20240131&codigoModalidadeContratacao=6&tamanhoPagina=50&pagina=1")
        );
    }

    #[test]
    fn page_size_is_clamped_into_range() {
        let client = client("https://pncp.gov.br/api/consulta/v1");

        let small = ContractSearch {
            page_size: Some(5),
            ..search()
        };
        assert_eq!(client.contracts_url(&small).unwrap().1.page_size, 10);

        let large = ContractSearch {
            page_size: Some(10_000),
            ..search()
        };
        assert_eq!(client.contracts_url(&large).unwrap().1.page_size, 500);
    }

    #[test]
    fn missing_dates_fail_before_any_request() {
        let client = client("https://pncp.gov.br/api/consulta/v1");
        let err = client
            .contracts_url(&ContractSearch {
                end_date: "20240131".to_owned(),
                ..ContractSearch::default()
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "start_date is required");
    }

    #[tokio::test]
    async fn search_contracts_reports_upstream_total() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/contratacoes/publicacao"))
            .and(query_param("codigoModalidadeContratacao", "1"))
            .and(query_param("uf", "SP"))
            .and(query_param("pagina", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {"numeroControlePNCP": "00394460000141-1-000001/2024", "objetoCompra": "Aquisição de papel", "valorTotalEstimado": 1200.5},
                    {"numeroControlePNCP": "00394460000141-1-000002/2024", "modalidadeId": 1}
                ],
                "totalRegistros": 1375,
                "totalPaginas": 28,
                "numeroPagina": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server.uri())
            .search_contracts(&ContractSearch {
                modality: Some(1),
                state: Some("SP".to_owned()),
                page: Some(2),
                ..search()
            })
            .await
            .unwrap();

        assert_eq!(response.contracts.len(), 2);
        assert_eq!(response.total, 1375);
        assert_eq!(response.page, 2);
        assert_eq!(response.source, Source::Pncp);
        assert_eq!(response.contracts[0].objeto_compra.as_deref(), Some("Aquisição de papel"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["source"], "pncp_api");
        assert_eq!(json["contracts"][1]["numeroControlePNCP"], "00394460000141-1-000002/2024");
        assert!(json["contracts"][1].get("objetoCompra").is_none());
    }

    #[tokio::test]
    async fn price_registrations_count_the_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/atas-registro-preco"))
            .and(query_param("tamanhoPagina", "10"))
            .and(query_param_is_missing("uf"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"numeroAta": "1/2024"}, {"numeroAta": "2/2024"}, {"numeroAta": "3/2024"}],
                "totalRegistros": 900
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server.uri())
            .search_price_registrations(&PriceRegistrationSearch {
                state: Some(String::new()),
                page: None,
                page_size: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(response.total, 3);
        assert_eq!(response.page_size, 10);
    }

    #[tokio::test]
    async fn upstream_error_is_passed_through() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("{\"message\":\"erro interno\"}"))
            .mount(&server)
            .await;

        let err = client(&server.uri()).search_contracts(&search()).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("erro interno"));
    }

    #[test]
    fn modalities_are_exposed() {
        let client = client("https://pncp.gov.br/api/consulta/v1");
        assert_eq!(client.list_modalities()["credenciamento"], 8);
    }
}

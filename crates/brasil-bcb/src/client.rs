use brasil_config::{BcbConfig, HttpConfig};
use brasil_core::{QueryParams, Result, Source, SourceClient, dates, endpoint_url, non_blank};
use serde_json::{Map, Value};
use url::Url;

use crate::{
    series::series_code,
    types::{DataPoint, ExchangeRate, ExchangeRateResponse, IndicatorResponse, ODataList, PixStatsResponse},
};

/// Observations returned when the caller does not ask for a count
pub const DEFAULT_LAST_N: u32 = 30;

/// Currency quoted when none is given
pub const DEFAULT_CURRENCY: &str = "USD";

const PTAX_PATH: &str = "/PTAX/versao/v1/odata/CotacaoMoedaDia(moeda=@moeda,dataCotacao=@dataCotacao)";
const PIX_PATH: &str = "/Pix_DadosAbertos/versao/v1/odata/EstatisticasTransacoesPix(Database=@Database)";

/// Client for the Banco Central SGS series and Olinda OData services
#[derive(Debug, Clone)]
pub struct BcbClient {
    http: SourceClient,
    sgs_url: Url,
    olinda_url: Url,
}

impl BcbClient {
    pub fn new(config: &BcbConfig, http: &HttpConfig) -> Result<Self> {
        let client = SourceClient::builder(Source::Bcb)
            .timeout(http.timeout)
            .user_agent(http.user_agent.clone())
            .build()?;

        Ok(Self {
            http: client,
            sgs_url: config.sgs_url.clone(),
            olinda_url: config.olinda_url.clone(),
        })
    }

    /// Last `last_n` observations of a named indicator
    ///
    /// Unknown names fail before any request is made.
    pub async fn get_indicator(&self, indicator: &str, last_n: Option<i64>) -> Result<IndicatorResponse> {
        let url = self.indicator_url(indicator, last_n)?;
        tracing::debug!(indicator, "fetching SGS series");

        let data: Vec<DataPoint> = self.http.get_json(url).await?;

        Ok(IndicatorResponse {
            indicator: indicator.to_owned(),
            total: data.len(),
            data,
            source: Source::Bcb,
        })
    }

    pub async fn get_selic(&self, last_n: Option<i64>) -> Result<IndicatorResponse> {
        self.get_indicator("selic", last_n).await
    }

    pub async fn get_ipca(&self, last_n: Option<i64>) -> Result<IndicatorResponse> {
        self.get_indicator("ipca", last_n).await
    }

    /// PTAX quotations for a currency on a given day
    ///
    /// `date` is `MM-DD-YYYY`; today is used when absent.
    pub async fn get_exchange_rate(&self, currency: Option<&str>, date: Option<&str>) -> Result<ExchangeRateResponse> {
        let currency = non_blank(currency).unwrap_or(DEFAULT_CURRENCY).to_owned();
        let date = non_blank(date).map_or_else(
            || dates::today().strftime("%m-%d-%Y").to_string(),
            ToOwned::to_owned,
        );

        let url = self.exchange_rate_url(&currency, &date)?;
        let list: ODataList<ExchangeRate> = self.http.get_json(url).await?;
        let rates = list.value.unwrap_or_default();

        Ok(ExchangeRateResponse {
            currency,
            date,
            total: rates.len(),
            rates,
            source: Source::Bcb,
        })
    }

    /// PIX transaction statistics for a reference month (`YYYYMM`)
    ///
    /// Defaults to the month before the current one, the latest with
    /// published data.
    pub async fn get_pix_stats(&self, database: Option<&str>) -> Result<PixStatsResponse> {
        let database = non_blank(database).map_or_else(
            || dates::previous_month(dates::today()).strftime("%Y%m").to_string(),
            ToOwned::to_owned,
        );

        let url = self.pix_stats_url(&database)?;
        let stats: Map<String, Value> = self.http.get_json(url).await?;

        Ok(PixStatsResponse {
            database,
            stats,
            source: Source::Bcb,
        })
    }

    pub fn indicator_url(&self, indicator: &str, last_n: Option<i64>) -> Result<Url> {
        let code = series_code(indicator)?;
        let last_n = last_n
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(DEFAULT_LAST_N);

        let params = QueryParams::new().set("formato", "json");
        endpoint_url(
            self.sgs_url.as_str(),
            &format!(".{code}/dados/ultimos/{last_n}"),
            &params,
        )
    }

    pub fn exchange_rate_url(&self, currency: &str, date: &str) -> Result<Url> {
        let params = QueryParams::new()
            .set("@moeda", format!("'{currency}'"))
            .set("@dataCotacao", format!("'{date}'"))
            .set("$format", "json");

        endpoint_url(self.olinda_url.as_str(), PTAX_PATH, &params)
    }

    pub fn pix_stats_url(&self, database: &str) -> Result<Url> {
        let params = QueryParams::new()
            .set("@Database", format!("'{database}'"))
            .set("$format", "json");

        endpoint_url(self.olinda_url.as_str(), PIX_PATH, &params)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(base: &str) -> BcbClient {
        let config = BcbConfig {
            sgs_url: Url::parse(&format!("{base}/dados/serie/bcdata.sgs")).unwrap(),
            olinda_url: Url::parse(&format!("{base}/olinda/servico")).unwrap(),
        };
        BcbClient::new(&config, &HttpConfig::default()).unwrap()
    }

    #[test]
    fn indicator_url_uses_series_code_and_default_count() {
        let client = client("https://api.bcb.gov.br");

        let url = client.indicator_url("selic", None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.bcb.gov.br/dados/serie/bcdata.sgs.11/dados/ultimos/30?formato=json"
        );

        let url = client.indicator_url("igpm", Some(-4)).unwrap();
        assert!(url.path().ends_with("bcdata.sgs.189/dados/ultimos/30"));
    }

    #[tokio::test]
    async fn unknown_indicator_never_reaches_the_network() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server.uri()).get_indicator("inpc", Some(5)).await.unwrap_err();
        assert_eq!(err.kind(), "validation_error");
        assert!(err.to_string().contains("selic, selic_monthly, ipca, igpm, cdi"));
    }

    #[tokio::test]
    async fn ipca_returns_requested_points() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/dados/serie/bcdata.sgs.433/dados/ultimos/12"))
            .and(query_param("formato", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"data": "01/01/2024", "valor": "0.42"},
                {"data": "01/02/2024", "valor": "0.83"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server.uri()).get_ipca(Some(12)).await.unwrap();

        assert_eq!(response.indicator, "ipca");
        assert_eq!(response.total, 2);
        assert_eq!(
            response.data[1],
            DataPoint {
                data: "01/02/2024".to_owned(),
                valor: "0.83".to_owned()
            }
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["source"], "bcb_api");
    }

    #[tokio::test]
    async fn exchange_rate_sends_odata_parameters() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/olinda/servico{PTAX_PATH}")))
            .and(query_param("@moeda", "'EUR'"))
            .and(query_param("@dataCotacao", "'03-15-2024'"))
            .and(query_param("$format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "@odata.context": "https://olinda.bcb.gov.br/olinda/servico/PTAX/versao/v1/odata$metadata",
                "value": [{
                    "paridadeCompra": 1.0,
                    "cotacaoCompra": 5.4312,
                    "cotacaoVenda": 5.4321,
                    "dataHoraCotacao": "2024-03-15 13:04:27.36",
                    "tipoBoletim": "Fechamento PTAX"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server.uri())
            .get_exchange_rate(Some("EUR"), Some("03-15-2024"))
            .await
            .unwrap();

        assert_eq!(response.currency, "EUR");
        assert_eq!(response.date, "03-15-2024");
        assert_eq!(response.total, 1);
        assert_eq!(response.rates[0].cotacao_venda, Some(5.4321));
        assert_eq!(response.rates[0].tipo_boletim.as_deref(), Some("Fechamento PTAX"));
    }

    #[test]
    fn exchange_rate_defaults_to_dollar_today() {
        let client = client("https://olinda.bcb.gov.br");
        let today = dates::today().strftime("%m-%d-%Y").to_string();

        let url = client.exchange_rate_url(DEFAULT_CURRENCY, &today).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(pairs[0], ("@moeda".to_owned(), "'USD'".to_owned()));
        assert_eq!(pairs[1], ("@dataCotacao".to_owned(), format!("'{today}'")));
        assert_eq!(today.len(), 10);
    }

    #[tokio::test]
    async fn pix_stats_pass_through_the_raw_object() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/olinda/servico{PIX_PATH}")))
            .and(query_param("@Database", "'202403'"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [{"AnoMes": 202403, "VlPagadorPF": 1.5e11}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server.uri()).get_pix_stats(Some("202403")).await.unwrap();

        assert_eq!(response.database, "202403");
        assert_eq!(response.stats["value"][0]["AnoMes"], 202_403);
    }

    #[tokio::test]
    async fn malformed_series_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>manutenção</html>"))
            .mount(&server)
            .await;

        let err = client(&server.uri()).get_selic(None).await.unwrap_err();
        assert_eq!(err.kind(), "decode_error");
    }
}

use brasil_config::{HttpConfig, IbgeConfig};
use brasil_core::{QueryParams, Result, Source, SourceClient, endpoint_url, non_blank};
use serde_json::Value;
use url::Url;

use crate::{
    population::{POPULATION_AGGREGATE, POPULATION_VARIABLE, extract_population},
    types::{MunicipalitiesResponse, Municipality, PopulationResponse, State, StatesResponse},
};

/// Client for the IBGE localities and aggregates services
#[derive(Debug, Clone)]
pub struct IbgeClient {
    http: SourceClient,
    localidades_url: Url,
    agregados_url: Url,
}

impl IbgeClient {
    pub fn new(config: &IbgeConfig, http: &HttpConfig) -> Result<Self> {
        let client = SourceClient::builder(Source::Ibge)
            .timeout(http.timeout)
            .user_agent(http.user_agent.clone())
            .build()?;

        Ok(Self {
            http: client,
            localidades_url: config.localidades_url.clone(),
            agregados_url: config.agregados_url.clone(),
        })
    }

    /// All 27 federative units, ordered by name
    pub async fn get_states(&self) -> Result<StatesResponse> {
        let url = endpoint_url(self.localidades_url.as_str(), "/estados", &by_name())?;
        let states: Vec<State> = self.http.get_json(url).await?;

        Ok(StatesResponse {
            total: states.len(),
            states,
            source: Source::Ibge,
        })
    }

    /// Municipalities of one state (IBGE id or abbreviation), or of the whole country
    pub async fn get_municipalities(&self, state_id: Option<&str>) -> Result<MunicipalitiesResponse> {
        let state_id = non_blank(state_id);
        let path = state_id.map_or_else(|| "/municipios".to_owned(), |id| format!("/estados/{id}/municipios"));

        let url = endpoint_url(self.localidades_url.as_str(), &path, &by_name())?;
        let municipalities: Vec<Municipality> = self.http.get_json(url).await?;

        Ok(MunicipalitiesResponse {
            total: municipalities.len(),
            municipalities,
            state_id: state_id.map(ToOwned::to_owned),
            source: Source::Ibge,
        })
    }

    /// Population estimates for the last six periods
    ///
    /// `location_id` is a municipality code; the national total is used when absent.
    pub async fn get_population(&self, location_id: Option<&str>) -> Result<PopulationResponse> {
        let url = self.population_url(location_id)?;
        let tree: Value = self.http.get_json(url).await?;

        let data = extract_population(&tree);
        tracing::debug!(rows = data.len(), "population series extracted");

        Ok(PopulationResponse {
            total: data.len(),
            data,
            source: Source::Ibge,
        })
    }

    pub fn population_url(&self, location_id: Option<&str>) -> Result<Url> {
        let localidades = non_blank(location_id).map_or_else(|| "N1[all]".to_owned(), |id| format!("N6[{id}]"));
        let params = QueryParams::new().set("localidades", localidades);

        endpoint_url(
            self.agregados_url.as_str(),
            &format!("/{POPULATION_AGGREGATE}/periodos/-6/variaveis/{POPULATION_VARIABLE}"),
            &params,
        )
    }
}

fn by_name() -> QueryParams {
    QueryParams::new().set("orderBy", "nome")
}

//! Tool argument types
//!
//! Each struct doubles as the tool's JSON input schema. Numeric fields
//! accept integers or floats; floats are truncated toward zero.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer};

#[allow(clippy::cast_possible_truncation)]
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))))
}

/// Arguments for tools that take none
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct NoArgs {}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct OrgaoContractsArgs {
    /// Organization SIAPE code (e.g. 36000 for the Ministry of Health)
    pub orgao_code: Option<String>,
    /// Page number (default 1)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page: Option<i64>,
    /// Results per page (1 to 500, default 100)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ServidoresArgs {
    /// Name of the public servant
    pub nome: String,
    /// Page number (default 1)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page: Option<i64>,
    /// Results per page (1 to 500, default 100)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct RemuneracaoArgs {
    /// CPF, 11 digits with or without punctuation
    pub cpf: String,
    /// Reference month as MM/YYYY (default previous month)
    pub mes_ano: Option<String>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ConveniosArgs {
    /// State code (e.g. MG, SP, RJ; default MG)
    pub uf: Option<String>,
    /// Page number (default 1)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page: Option<i64>,
    /// Results per page (1 to 500, default 100)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct CeisArgs {
    /// Company CNPJ to filter by
    pub cnpj: Option<String>,
    /// Page number (default 1)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page: Option<i64>,
    /// Results per page (1 to 500, default 100)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct MunicipalitiesArgs {
    /// State ID (e.g. 33 for RJ, 35 for SP); empty for the whole country
    pub state_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct PopulationArgs {
    /// Municipality IBGE code; empty for the national total
    pub location_id: Option<String>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct CnpjArgs {
    /// CNPJ, 14 digits with or without formatting
    pub cnpj: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct LastNArgs {
    /// Number of data points to retrieve
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub last_n: Option<i64>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ExchangeRateArgs {
    /// Currency code (default USD)
    pub currency: Option<String>,
    /// Date as MM-DD-YYYY (default today)
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct IndicatorArgs {
    /// Indicator name: selic, selic_monthly, ipca, igpm or cdi
    pub indicator: String,
    /// Number of data points (default 30)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub last_n: Option<i64>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct PixStatsArgs {
    /// Reference month as YYYYMM (default previous month)
    pub database: Option<String>,
}

/// Procurement modality, by code or by name
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ModalityArg {
    Code(f64),
    Name(String),
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct PncpContractsArgs {
    /// First publication date, YYYYMMDD
    pub start_date: String,
    /// Last publication date, YYYYMMDD
    pub end_date: String,
    /// State code (e.g. SP, RJ)
    pub state: Option<String>,
    /// Modality code or name (default 6, pregao_eletronico)
    pub modality: Option<ModalityArg>,
    /// Page number (default 1)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page: Option<i64>,
    /// Results per page (10 to 500, default 50)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct PncpPriceRegistrationsArgs {
    /// State code (e.g. SP, RJ)
    pub state: Option<String>,
    /// Page number (default 1)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page: Option<i64>,
    /// Results per page (10 to 500, default 50)
    #[serde(default, deserialize_with = "lenient_int")]
    #[schemars(with = "Option<f64>")]
    pub page_size: Option<i64>,
}

use brasil_core::Source;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

/// One observation of an SGS series
///
/// SGS sends both fields as strings (`"01/03/2024"`, `"10.65"`). A `null`
/// reading decodes as an empty string.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DataPoint {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub data: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub valor: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorResponse {
    pub indicator: String,
    pub data: Vec<DataPoint>,
    pub total: usize,
    pub source: Source,
}

/// PTAX bulletin for one currency
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExchangeRate {
    pub data_hora_cotacao: Option<String>,
    pub cotacao_compra: Option<f64>,
    pub cotacao_venda: Option<f64>,
    pub tipo_boletim: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExchangeRateResponse {
    pub currency: String,
    /// Quotation date as sent upstream, `MM-DD-YYYY`
    pub date: String,
    pub rates: Vec<ExchangeRate>,
    pub total: usize,
    pub source: Source,
}

/// PIX statistics for one reference month, passed through untouched
#[derive(Debug, Clone, Serialize)]
pub struct PixStatsResponse {
    /// Reference month, `YYYYMM`
    pub database: String,
    pub stats: Map<String, Value>,
    pub source: Source,
}

/// OData collection wrapper used by Olinda services
#[derive(Debug, Deserialize)]
pub(crate) struct ODataList<T> {
    pub value: Option<Vec<T>>,
}

use brasil_core::Source;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// Procurement notice published on PNCP
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractPublication {
    pub sequencial_compra: Option<i64>,
    pub numero_compra: Option<String>,
    pub ano_compra: Option<i32>,
    pub orgao_entidade: Option<Value>,
    pub unidade_orgao: Option<Value>,
    pub modalidade_id: Option<i64>,
    pub modalidade_nome: Option<String>,
    pub situacao_compra_id: Option<i64>,
    pub situacao_compra_nome: Option<String>,
    #[serde(rename = "numeroControlePNCP")]
    pub numero_controle_pncp: Option<String>,
    pub data_publicacao_pncp: Option<String>,
    pub data_abertura_proposta: Option<String>,
    pub data_encerramento_proposta: Option<String>,
    pub objeto_compra: Option<String>,
    pub valor_total_estimado: Option<f64>,
    pub valor_total_homologado: Option<f64>,
    pub srp: Option<bool>,
    pub link_sistema_origem: Option<String>,
}

/// Price registration record (ata de registro de preço)
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceRegistration {
    #[serde(rename = "numeroControlePNCP")]
    pub numero_controle_pncp: Option<String>,
    pub orgao_entidade: Option<Value>,
    pub numero_ata: Option<String>,
    pub ano_ata: Option<i32>,
    pub data_publicacao_pncp: Option<String>,
    pub data_vigencia_inicio: Option<String>,
    pub data_vigencia_fim: Option<String>,
    pub objeto_ata: Option<String>,
    pub valor_total_estimado: Option<f64>,
}

/// Envelope for a procurement notice search
///
/// `total` is PNCP's own `totalRegistros`, not the length of this page.
#[derive(Debug, Clone, Serialize)]
pub struct ContractsResponse {
    pub contracts: Vec<ContractPublication>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub source: Source,
}

/// Envelope for a price registration search
#[derive(Debug, Clone, Serialize)]
pub struct PriceRegistrationsResponse {
    pub registrations: Vec<PriceRegistration>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub source: Source,
}

/// Paginated wrapper PNCP puts around result lists
#[derive(Debug, Deserialize)]
pub(crate) struct Page<T> {
    pub data: Option<Vec<T>>,
    #[serde(rename = "totalRegistros")]
    pub total_registros: Option<u64>,
}

/// Parameters for [`crate::PncpClient::search_contracts`]
#[derive(Debug, Clone, Default)]
pub struct ContractSearch {
    /// First publication date, `YYYYMMDD`
    pub start_date: String,
    /// Last publication date, `YYYYMMDD`
    pub end_date: String,
    /// Modality code; absent or non-positive means pregão eletrônico (6)
    pub modality: Option<i64>,
    /// State code (e.g. `SP`)
    pub state: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Parameters for [`crate::PncpClient::search_price_registrations`]
#[derive(Debug, Clone, Default)]
pub struct PriceRegistrationSearch {
    pub state: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

use brasil_core::Source;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

/// Company registration as published by Minha Receita
///
/// Every field is optional: the registry leaves many of them null for
/// older or inactive companies.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Company {
    pub cnpj: Option<String>,
    pub razao_social: Option<String>,
    pub nome_fantasia: Option<String>,
    pub situacao_cadastral: Option<i64>,
    pub descricao_situacao_cadastral: Option<String>,
    pub data_situacao_cadastral: Option<String>,
    pub atividade_principal: Option<Value>,
    pub atividades_secundarias: Option<Vec<Value>>,
    pub natureza_juridica: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub cep: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub data_abertura: Option<String>,
    pub capital_social: Option<f64>,
    pub qsa: Option<Vec<Partner>>,
}

/// Member of the partners and administrators table (QSA)
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Partner {
    pub nome_socio: Option<String>,
    pub cpf_representante_legal: Option<String>,
    pub nome_representante_legal: Option<String>,
    pub qualificacao_socio: Option<String>,
    pub data_entrada_sociedade: Option<String>,
}

/// Company record tagged with its source
#[derive(Debug, Clone, Serialize)]
pub struct CompanyResponse {
    #[serde(flatten)]
    pub company: Company,
    pub source: Source,
}

use brasil_core::Source;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Federal contract
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contract {
    pub id: Option<i64>,
    pub numero: Option<String>,
    pub objeto: Option<String>,
    pub numero_processo: Option<String>,
    pub fundamento_legal: Option<String>,
    pub data_assinatura: Option<String>,
    pub data_vigencia_inicio: Option<String>,
    pub data_vigencia_fim: Option<String>,
    pub valor_inicial: Option<f64>,
    pub situacao: Option<String>,
    pub modalidade_compra: Option<String>,
    pub codigo_orgao: Option<String>,
    pub nome_orgao: Option<String>,
    pub cnpj_fornecedor: Option<String>,
    pub nome_fornecedor: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractsResponse {
    pub contratos: Vec<Contract>,
    pub total: usize,
    pub pagina: u32,
    pub tamanho_pagina: u32,
    pub orgao_consultado: String,
    pub orgao_nome: &'static str,
    pub source: Source,
}

/// Federal public servant
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Servidor {
    pub id: Option<i64>,
    pub cpf: Option<String>,
    pub nome: Option<String>,
    pub matricula: Option<String>,
    pub codigo_orgao_lotacao: Option<String>,
    pub nome_orgao_lotacao: Option<String>,
    pub codigo_uorg_lotacao: Option<String>,
    pub nome_uorg_lotacao: Option<String>,
    pub tipo_vinculo: Option<String>,
    pub situacao_vinculo: Option<String>,
    pub data_ingresso_cargo: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServidoresResponse {
    pub servidores: Vec<Servidor>,
    pub total: usize,
    pub pagina: u32,
    pub tamanho_pagina: u32,
    pub source: Source,
}

/// Monthly pay record of a servant
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Remuneracao {
    pub mes_ano: Option<String>,
    pub remuneracao_basica_bruta: Option<f64>,
    pub abate_gratificacao: Option<f64>,
    pub gratificacao_natalina: Option<f64>,
    pub abate_teto: Option<f64>,
    pub rendimento_liquido: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemuneracaoResponse {
    pub cpf: String,
    pub remuneracao: Vec<Remuneracao>,
    pub mes_ano: String,
    pub source: Source,
}

/// Federal transfer agreement
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Convenio {
    pub numero: Option<String>,
    pub objeto: Option<String>,
    pub situacao_convenio: Option<String>,
    pub valor_liberado: Option<f64>,
    pub valor_convenio: Option<f64>,
    pub uf: Option<String>,
    pub municipio: Option<String>,
    pub orgao_superior: Option<String>,
    pub data_inicio_vigencia: Option<String>,
    pub data_fim_vigencia: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConveniosResponse {
    pub convenios: Vec<Convenio>,
    pub total: usize,
    pub pagina: u32,
    pub tamanho_pagina: u32,
    pub uf: String,
    pub source: Source,
}

/// Entry of the CEIS sanctions register
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SanctionedCompany {
    pub cnpj_sancionado: Option<String>,
    pub razao_social_sancionado: Option<String>,
    pub nome_fantasia: Option<String>,
    pub tipo_sancao: Option<String>,
    pub data_inicio_sancao: Option<String>,
    pub data_fim_sancao: Option<String>,
    pub orgao_sancionador: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SanctionsResponse {
    pub empresas: Vec<SanctionedCompany>,
    pub total: usize,
    pub pagina: u32,
    pub tamanho_pagina: u32,
    pub source: Source,
}

//! Portal da Transparência do Governo Federal
//!
//! Contracts, servants and their pay, transfer agreements and the CEIS
//! sanctions register. Every endpoint requires an API key sent in the
//! `chave-api-dados` header; without one the portal answers 401 and that
//! surfaces as an upstream error.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod orgaos;
mod types;

pub use client::{API_KEY_HEADER, DEFAULT_UF, PAGE_SIZE, TransparenciaClient};
pub use orgaos::{DEFAULT_ORGAO, KNOWN_ORGAOS, Orgao, UNKNOWN_ORGAO, list_orgaos, orgao_name};
pub use types::{
    Contract, ContractsResponse, Convenio, ConveniosResponse, Remuneracao, RemuneracaoResponse, SanctionedCompany,
    SanctionsResponse, Servidor, ServidoresResponse,
};

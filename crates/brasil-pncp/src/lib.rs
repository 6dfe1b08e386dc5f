//! Portal Nacional de Contratações Públicas (PNCP)
//!
//! Procurement notices and price registration records from the public
//! consultation API. No credentials are needed.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod modality;
mod types;

pub use client::{PAGE_SIZE, PncpClient};
pub use modality::{DEFAULT_MODALITY, MODALITIES, modality_code, resolve_modality};
pub use types::{
    ContractPublication, ContractSearch, ContractsResponse, PriceRegistration, PriceRegistrationSearch,
    PriceRegistrationsResponse,
};

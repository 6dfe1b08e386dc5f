//! Company registry lookups through Minha Receita

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod types;

pub use client::{CnpjClient, format_cnpj};
pub use types::{Company, CompanyResponse, Partner};

//! Banco Central do Brasil
//!
//! Economic indicator series from SGS, PTAX exchange rates and PIX
//! statistics from the Olinda OData services.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod series;
mod types;

pub use client::{BcbClient, DEFAULT_CURRENCY, DEFAULT_LAST_N};
pub use series::{SERIES, series_code};
pub use types::{DataPoint, ExchangeRate, ExchangeRateResponse, IndicatorResponse, PixStatsResponse};

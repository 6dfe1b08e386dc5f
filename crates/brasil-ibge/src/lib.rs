//! IBGE open data
//!
//! States and municipalities from the localities service and population
//! estimates from the aggregates service.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod population;
mod types;

pub use client::IbgeClient;
pub use population::{POPULATION_AGGREGATE, POPULATION_VARIABLE, extract_population};
pub use types::{
    MunicipalitiesResponse, Municipality, PopulationData, PopulationResponse, Region, State, StatesResponse,
};

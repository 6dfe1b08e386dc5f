//! Extraction of population estimates from the aggregates API
//!
//! The aggregates payload is deeply nested and loosely typed, so it is
//! walked as a JSON tree instead of being mapped onto structs. Anything
//! missing along the way yields fewer rows, never an error.

use serde_json::Value;

use crate::types::PopulationData;

/// Aggregate 6579: annual resident population estimates
pub const POPULATION_AGGREGATE: u32 = 6579;

/// Variable 9324: estimated resident population
pub const POPULATION_VARIABLE: u32 = 9324;

/// Flatten `[0].resultados[0].series[*]` into one row per location and year
///
/// Years come out in ascending order within each location.
pub fn extract_population(tree: &Value) -> Vec<PopulationData> {
    let Some(series) = tree
        .get(0)
        .and_then(|aggregate| aggregate.get("resultados"))
        .and_then(|results| results.get(0))
        .and_then(|result| result.get("series"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    series.iter().flat_map(location_rows).collect()
}

fn location_rows(entry: &Value) -> Vec<PopulationData> {
    let location = entry
        .get("localidade")
        .and_then(|l| l.get("nome"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    let Some(by_year) = entry.get("serie").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut rows: Vec<PopulationData> = by_year
        .iter()
        .map(|(year, value)| PopulationData {
            location: location.to_owned(),
            year: year.clone(),
            population: match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })
        .collect();

    // years are fixed-width, so string order is chronological
    rows.sort_by(|a, b| a.year.cmp(&b.year));
    rows
}

use std::sync::LazyLock;

use brasil_core::SourceError;
use indexmap::IndexMap;

/// SGS series codes for the supported indicators
pub static SERIES: LazyLock<IndexMap<&'static str, u32>> = LazyLock::new(|| {
    IndexMap::from([
        // daily
        ("selic", 11),
        // accumulated in the month
        ("selic_monthly", 4390),
        ("ipca", 433),
        ("igpm", 189),
        ("cdi", 12),
    ])
});

/// SGS code for an indicator name
///
/// Names must match a table key exactly, as with the PNCP modality names:
/// no case folding, no trimming.
pub fn series_code(indicator: &str) -> Result<u32, SourceError> {
    SERIES.get(indicator).copied().ok_or_else(|| {
        let names: Vec<&str> = SERIES.keys().copied().collect();
        SourceError::validation(format!("unknown indicator: {indicator}. Available: {}", names.join(", ")))
    })
}

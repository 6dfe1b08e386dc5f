use std::sync::LazyLock;

use brasil_core::SourceError;
use indexmap::IndexMap;

/// Modality used when the caller does not pick one (pregão eletrônico)
pub const DEFAULT_MODALITY: u32 = 6;

/// Procurement modality codes accepted by `codigoModalidadeContratacao`
pub static MODALITIES: LazyLock<IndexMap<&'static str, u32>> = LazyLock::new(|| {
    IndexMap::from([
        ("pregao_eletronico", 6),
        ("concorrencia_eletronica", 1),
        ("concorrencia", 2),
        ("concurso", 3),
        ("leilao_eletronico", 4),
        ("leilao", 5),
        ("dialogo_competitivo", 7),
        ("credenciamento", 8),
    ])
});

/// Code for a modality name
///
/// Names must match a table key exactly, as with the SGS indicator names:
/// no case folding, no trimming.
pub fn modality_code(name: &str) -> Result<u32, SourceError> {
    MODALITIES.get(name).copied().ok_or_else(|| {
        let names: Vec<&str> = MODALITIES.keys().copied().collect();
        SourceError::validation(format!("unknown modality: {name}. Available: {}", names.join(", ")))
    })
}

/// Effective modality code: absent or non-positive means [`DEFAULT_MODALITY`]
pub fn resolve_modality(requested: Option<i64>) -> u32 {
    requested
        .filter(|code| *code > 0)
        .and_then(|code| u32::try_from(code).ok())
        .unwrap_or(DEFAULT_MODALITY)
}

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Serialize;

/// Organization searched when no code is given (Ministério da Saúde)
pub const DEFAULT_ORGAO: &str = "36000";

/// Name reported for codes outside [`KNOWN_ORGAOS`]
pub const UNKNOWN_ORGAO: &str = "Orgao Desconhecido";

/// SIAPE organization codes with a friendly name
pub static KNOWN_ORGAOS: LazyLock<IndexMap<&'static str, &'static str>> = LazyLock::new(|| {
    IndexMap::from([
        ("36000", "Ministério da Saúde"),
        ("26000", "Ministério da Educação"),
        ("25000", "Ministério da Economia"),
        ("30000", "Ministério da Justiça"),
        ("52000", "Ministério da Defesa"),
        ("35000", "Ministério das Relações Exteriores"),
        ("44000", "Ministério do Meio Ambiente"),
    ])
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Orgao {
    pub codigo: &'static str,
    pub nome: &'static str,
}

pub fn orgao_name(code: &str) -> &'static str {
    KNOWN_ORGAOS.get(code).copied().unwrap_or(UNKNOWN_ORGAO)
}

pub fn list_orgaos() -> Vec<Orgao> {
    KNOWN_ORGAOS
        .iter()
        .map(|(&codigo, &nome)| Orgao { codigo, nome })
        .collect()
}

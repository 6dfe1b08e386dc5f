use serde::Serialize;

/// Upstream data source that produced a response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::IntoStaticStr, strum::EnumIter)]
pub enum Source {
    /// Portal da Transparência (federal spending, servants, sanctions)
    #[serde(rename = "portal_transparencia_api")]
    #[strum(serialize = "portal_transparencia_api")]
    PortalTransparencia,
    /// IBGE localities and aggregates
    #[serde(rename = "ibge_api")]
    #[strum(serialize = "ibge_api")]
    Ibge,
    /// Minha Receita company registry
    #[serde(rename = "minhareceita_api")]
    #[strum(serialize = "minhareceita_api")]
    MinhaReceita,
    /// Banco Central do Brasil (SGS and Olinda)
    #[serde(rename = "bcb_api")]
    #[strum(serialize = "bcb_api")]
    Bcb,
    /// Portal Nacional de Contratações Públicas
    #[serde(rename = "pncp_api")]
    #[strum(serialize = "pncp_api")]
    Pncp,
}

impl Source {
    /// Literal tag written into every envelope
    pub fn tag(self) -> &'static str {
        self.into()
    }
}

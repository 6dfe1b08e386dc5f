use brasil_core::Source;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Region {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub nome: String,
}

/// Federative unit
///
/// Scalars that arrive as `null` decode to their zero value.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct State {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub sigla: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub nome: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub regiao: Region,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Municipality {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub nome: String,
    /// Absent (null) for a handful of recently created municipalities
    pub microrregiao: Option<Region>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatesResponse {
    pub states: Vec<State>,
    pub total: usize,
    pub source: Source,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct MunicipalitiesResponse {
    pub municipalities: Vec<Municipality>,
    pub total: usize,
    pub state_id: Option<String>,
    pub source: Source,
}

/// Population estimate for one location and year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationData {
    pub location: String,
    pub year: String,
    pub population: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PopulationResponse {
    pub data: Vec<PopulationData>,
    pub total: usize,
    pub source: Source,
}

use std::sync::Arc;

use brasil_bcb::BcbClient;
use brasil_cnpj::CnpjClient;
use brasil_config::Config;
use brasil_core::SourceError;
use brasil_ibge::IbgeClient;
use brasil_pncp::{ContractSearch, PncpClient, PriceRegistrationSearch, modality_code};
use brasil_transparencia::{TransparenciaClient, list_orgaos};
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::{
    args::{
        CeisArgs, CnpjArgs, ConveniosArgs, ExchangeRateArgs, IndicatorArgs, LastNArgs, ModalityArg, MunicipalitiesArgs,
        NoArgs, OrgaoContractsArgs, PixStatsArgs, PncpContractsArgs, PncpPriceRegistrationsArgs, PopulationArgs,
        RemuneracaoArgs, ServidoresArgs,
    },
    error::ToolError,
};

/// `bcb_ipca` returns a year of monthly readings unless told otherwise
pub const IPCA_DEFAULT_LAST_N: i64 = 12;

/// Static description of one tool
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    schema: fn() -> Arc<JsonObject>,
}

impl ToolSpec {
    const fn new<T: JsonSchema>(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            schema: input_schema::<T>,
        }
    }

    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, (self.schema)())
    }
}

/// Every tool the server exposes, in listing order
pub const CATALOG: &[ToolSpec] = &[
    ToolSpec::new::<OrgaoContractsArgs>(
        "search_contracts",
        "Search federal government contracts from Portal da Transparência",
    ),
    ToolSpec::new::<ServidoresArgs>("search_servidores", "Search federal public servants by name"),
    ToolSpec::new::<RemuneracaoArgs>("get_remuneracao", "Get salary data for a public servant by CPF"),
    ToolSpec::new::<ConveniosArgs>("search_convenios", "Search federal government agreements by state"),
    ToolSpec::new::<CeisArgs>("search_ceis", "Search sanctioned companies in CEIS"),
    ToolSpec::new::<NoArgs>("list_orgaos", "List known government organization codes (SIAPE)"),
    ToolSpec::new::<NoArgs>("ibge_states", "List all Brazilian states with their codes and regions"),
    ToolSpec::new::<MunicipalitiesArgs>("ibge_municipalities", "List municipalities, optionally filtered by state"),
    ToolSpec::new::<PopulationArgs>("ibge_population", "Get population data for Brazil or a specific municipality"),
    ToolSpec::new::<CnpjArgs>(
        "lookup_cnpj",
        "Look up company data by CNPJ: registration info, address, partners (QSA) and economic activity",
    ),
    ToolSpec::new::<LastNArgs>("bcb_selic", "Get SELIC interest rate data from Banco Central (default last 30)"),
    ToolSpec::new::<LastNArgs>("bcb_ipca", "Get IPCA inflation index data from Banco Central (default last 12)"),
    ToolSpec::new::<ExchangeRateArgs>("bcb_exchange_rate", "Get the PTAX exchange rate for a currency (USD, EUR, ...)"),
    ToolSpec::new::<IndicatorArgs>(
        "bcb_indicator",
        "Get any economic indicator: selic, selic_monthly, ipca, igpm, cdi",
    ),
    ToolSpec::new::<PixStatsArgs>("bcb_pix_stats", "Get PIX transaction statistics for a month"),
    ToolSpec::new::<PncpContractsArgs>(
        "pncp_contracts",
        "Search public procurement notices from PNCP (Portal Nacional de Contratações Públicas)",
    ),
    ToolSpec::new::<PncpPriceRegistrationsArgs>(
        "pncp_price_registrations",
        "Search price registration records (atas de registro de preço) from PNCP",
    ),
    ToolSpec::new::<NoArgs>("pncp_modalities", "List procurement modality codes for PNCP queries"),
];

/// JSON schema of `T` as an MCP tool input schema
fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    match serde_json::to_value(schemars::schema_for!(T)) {
        Ok(Value::Object(object)) => Arc::new(object),
        _ => Arc::new(JsonObject::new()),
    }
}

/// The five adapters, shared by every tool call
#[derive(Debug, Clone)]
pub struct Toolbox {
    transparencia: TransparenciaClient,
    ibge: IbgeClient,
    cnpj: CnpjClient,
    bcb: BcbClient,
    pncp: PncpClient,
}

impl Toolbox {
    pub fn new(config: &Config) -> Result<Self, SourceError> {
        let sources = &config.sources;
        let http = &config.http;

        Ok(Self {
            transparencia: TransparenciaClient::new(&sources.transparencia, http)?,
            ibge: IbgeClient::new(&sources.ibge, http)?,
            cnpj: CnpjClient::new(&sources.cnpj, http)?,
            bcb: BcbClient::new(&sources.bcb, http)?,
            pncp: PncpClient::new(&sources.pncp, http)?,
        })
    }

    pub const fn transparencia(&self) -> &TransparenciaClient {
        &self.transparencia
    }

    /// Run a tool and return its envelope as JSON
    pub async fn call(&self, name: &str, arguments: JsonObject) -> Result<Value, ToolError> {
        match name {
            "search_contracts" => {
                let a: OrgaoContractsArgs = parse(name, arguments)?;
                envelope(
                    self.transparencia
                        .search_contracts(a.orgao_code.as_deref(), a.page, a.page_size)
                        .await?,
                )
            }
            "search_servidores" => {
                let a: ServidoresArgs = parse(name, arguments)?;
                envelope(self.transparencia.search_servidores(&a.nome, a.page, a.page_size).await?)
            }
            "get_remuneracao" => {
                let a: RemuneracaoArgs = parse(name, arguments)?;
                envelope(self.transparencia.get_remuneracao(&a.cpf, a.mes_ano.as_deref()).await?)
            }
            "search_convenios" => {
                let a: ConveniosArgs = parse(name, arguments)?;
                envelope(self.transparencia.search_convenios(a.uf.as_deref(), a.page, a.page_size).await?)
            }
            "search_ceis" => {
                let a: CeisArgs = parse(name, arguments)?;
                envelope(self.transparencia.search_ceis(a.cnpj.as_deref(), a.page, a.page_size).await?)
            }
            "list_orgaos" => {
                let _: NoArgs = parse(name, arguments)?;
                envelope(list_orgaos())
            }
            "ibge_states" => {
                let _: NoArgs = parse(name, arguments)?;
                envelope(self.ibge.get_states().await?)
            }
            "ibge_municipalities" => {
                let a: MunicipalitiesArgs = parse(name, arguments)?;
                envelope(self.ibge.get_municipalities(a.state_id.as_deref()).await?)
            }
            "ibge_population" => {
                let a: PopulationArgs = parse(name, arguments)?;
                envelope(self.ibge.get_population(a.location_id.as_deref()).await?)
            }
            "lookup_cnpj" => {
                let a: CnpjArgs = parse(name, arguments)?;
                envelope(self.cnpj.get_cnpj(&a.cnpj).await?)
            }
            "bcb_selic" => {
                let a: LastNArgs = parse(name, arguments)?;
                envelope(self.bcb.get_selic(a.last_n).await?)
            }
            "bcb_ipca" => {
                let a: LastNArgs = parse(name, arguments)?;
                envelope(self.bcb.get_ipca(a.last_n.or(Some(IPCA_DEFAULT_LAST_N))).await?)
            }
            "bcb_exchange_rate" => {
                let a: ExchangeRateArgs = parse(name, arguments)?;
                envelope(
                    self.bcb
                        .get_exchange_rate(a.currency.as_deref(), a.date.as_deref())
                        .await?,
                )
            }
            "bcb_indicator" => {
                let a: IndicatorArgs = parse(name, arguments)?;
                envelope(self.bcb.get_indicator(&a.indicator, a.last_n).await?)
            }
            "bcb_pix_stats" => {
                let a: PixStatsArgs = parse(name, arguments)?;
                envelope(self.bcb.get_pix_stats(a.database.as_deref()).await?)
            }
            "pncp_contracts" => {
                let a: PncpContractsArgs = parse(name, arguments)?;
                let search = ContractSearch {
                    modality: a.modality.as_ref().map(resolve_modality_arg).transpose()?,
                    start_date: a.start_date,
                    end_date: a.end_date,
                    state: a.state,
                    page: a.page,
                    page_size: a.page_size,
                };
                envelope(self.pncp.search_contracts(&search).await?)
            }
            "pncp_price_registrations" => {
                let a: PncpPriceRegistrationsArgs = parse(name, arguments)?;
                let search = PriceRegistrationSearch {
                    state: a.state,
                    page: a.page,
                    page_size: a.page_size,
                };
                envelope(self.pncp.search_price_registrations(&search).await?)
            }
            "pncp_modalities" => {
                let _: NoArgs = parse(name, arguments)?;
                envelope(self.pncp.list_modalities())
            }
            other => Err(ToolError::UnknownTool(other.to_owned())),
        }
    }

    /// [`Toolbox::call`] racing `ct`; cancellation drops the in-flight request
    pub async fn call_cancellable(
        &self,
        name: &str,
        arguments: JsonObject,
        ct: &CancellationToken,
    ) -> Result<Value, ToolError> {
        tokio::select! {
            () = ct.cancelled() => Err(ToolError::Source(SourceError::Cancelled)),
            result = self.call(name, arguments) => result,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn resolve_modality_arg(arg: &ModalityArg) -> Result<i64, SourceError> {
    match arg {
        ModalityArg::Code(code) => Ok(*code as i64),
        ModalityArg::Name(name) => match name.trim().parse::<i64>() {
            Ok(code) => Ok(code),
            Err(_) => modality_code(name).map(i64::from),
        },
    }
}

fn parse<T: DeserializeOwned>(tool: &str, arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| ToolError::InvalidArguments {
        tool: tool.to_owned(),
        message: e.to_string(),
    })
}

fn envelope<T: Serialize>(response: T) -> Result<Value, ToolError> {
    serde_json::to_value(response).map_err(|e| ToolError::Source(SourceError::Decode(e)))
}

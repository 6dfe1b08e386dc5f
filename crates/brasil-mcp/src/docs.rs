use indoc::indoc;
use rmcp::model::{AnnotateAble, RawResource, Resource, ResourceContents};

/// URI of the API reference resource
pub const DOCS_URI: &str = "docs://api-reference";

const DOCS_MIME_TYPE: &str = "text/markdown";

pub const API_REFERENCE: &str = indoc! {"
    # MCP Brasil - API Reference

    Tools over Brazilian government open-data APIs. Every result is JSON
    tagged with a `source` field naming the upstream it came from.

    ## Portal da Transparência (federal government)

    Requires `TRANSPARENCY_API_KEY`.

    | Tool | Description |
    |------|-------------|
    | search_contracts | Contracts of a federal organization (default 36000) |
    | search_servidores | Public servants by name |
    | get_remuneracao | Monthly pay of a servant by CPF |
    | search_convenios | Transfer agreements by state (default MG) |
    | search_ceis | Companies in the CEIS sanctions register |
    | list_orgaos | Known SIAPE organization codes |

    ## IBGE (geography and statistics)

    | Tool | Description |
    |------|-------------|
    | ibge_states | All states with their regions |
    | ibge_municipalities | Municipalities, optionally of one state |
    | ibge_population | Population estimates for Brazil or a municipality |

    ## Minha Receita (company registry)

    | Tool | Description |
    |------|-------------|
    | lookup_cnpj | Registration, address, partners (QSA) and activities by CNPJ |

    ## Banco Central (economic data)

    | Tool | Description |
    |------|-------------|
    | bcb_selic | SELIC daily rate (default last 30 points) |
    | bcb_ipca | IPCA monthly inflation (default last 12 points) |
    | bcb_exchange_rate | PTAX quotation for a currency and day |
    | bcb_indicator | Any of selic, selic_monthly, ipca, igpm, cdi |
    | bcb_pix_stats | PIX transaction statistics for a month |

    ## PNCP (public procurement)

    | Tool | Description |
    |------|-------------|
    | pncp_contracts | Procurement notices published in a date window |
    | pncp_price_registrations | Price registration records (atas) |
    | pncp_modalities | Procurement modality codes |

    ## Data sources

    - Portal da Transparência: https://api.portaldatransparencia.gov.br
    - IBGE: https://servicodados.ibge.gov.br
    - Minha Receita: https://minhareceita.org
    - Banco Central: https://api.bcb.gov.br and https://olinda.bcb.gov.br
    - PNCP: https://pncp.gov.br
"};

pub fn resource() -> Resource {
    let mut raw = RawResource::new(DOCS_URI, "API Reference");
    raw.description = Some("Documentation for all Brazilian government APIs".to_owned());
    raw.mime_type = Some(DOCS_MIME_TYPE.to_owned());
    raw.no_annotation()
}

pub fn contents() -> ResourceContents {
    let mut contents = ResourceContents::text(API_REFERENCE, DOCS_URI);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(DOCS_MIME_TYPE.to_owned());
    }
    contents
}

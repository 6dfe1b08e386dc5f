//! Mock upstream serving canned answers for all five data sources
//!
//! Every source is mounted under its own path prefix on one local port.
//! Two extra prefixes simulate trouble: `/maintenance` answers 503 and
//! `/slow` stalls long enough to trip a short client timeout.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

pub const KNOWN_CNPJ: &str = "00.000.000/0001-91";

pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

#[derive(Default)]
struct MockState {
    request_count: AtomicU32,
    last_api_key: Mutex<Option<String>>,
    last_query: Mutex<Option<String>>,
}

impl MockUpstream {
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(MockState::default());

        let app = Router::new().fallback(handle).with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Root URL; sources are configured below it
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far, across all sources
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Wait until at least `count` requests have arrived
    pub async fn wait_for_requests(&self, count: u32) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.request_count() < count {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("upstream was never called");
    }

    /// `chave-api-dados` header of the last transparency request
    pub fn last_api_key(&self) -> Option<String> {
        self.state.last_api_key.lock().unwrap().clone()
    }

    /// Raw query string of the last request
    pub fn last_query(&self) -> Option<String> {
        self.state.last_query.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle(State(state): State<Arc<MockState>>, headers: HeaderMap, uri: Uri) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_query.lock().unwrap() = uri.query().map(ToOwned::to_owned);

    let path = uri.path();

    if path.starts_with("/maintenance") {
        return (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response();
    }
    if path.starts_with("/slow") {
        tokio::time::sleep(Duration::from_secs(5)).await;
        return Json(json!([])).into_response();
    }
    if let Some(rest) = path.strip_prefix("/transparencia") {
        let key = headers
            .get("chave-api-dados")
            .and_then(|v| v.to_str().ok())
            .map(ToOwned::to_owned);
        *state.last_api_key.lock().unwrap() = key.clone();

        if key.is_none() {
            return (StatusCode::UNAUTHORIZED, "chave-api-dados ausente").into_response();
        }
        return transparencia(rest);
    }
    if let Some(rest) = path.strip_prefix("/sgs/bcdata.sgs.") {
        return sgs(rest);
    }
    if let Some(rest) = path.strip_prefix("/olinda") {
        return olinda(rest, uri.query().unwrap_or_default());
    }
    if let Some(rest) = path.strip_prefix("/cnpj/") {
        return cnpj(rest);
    }
    if let Some(rest) = path.strip_prefix("/localidades") {
        return localidades(rest);
    }
    if path.starts_with("/agregados/6579/periodos/-6/variaveis/9324") {
        return Json(population()).into_response();
    }
    if let Some(rest) = path.strip_prefix("/pncp") {
        return pncp(rest);
    }

    (StatusCode::NOT_FOUND, "no such endpoint").into_response()
}

fn transparencia(path: &str) -> Response {
    let body = match path {
        "/contratos" => json!([
            {"id": 1, "numero": "45/2024", "objeto": "Aquisição de vacinas", "valorInicial": 1_250_000.0},
            {"id": 2, "numero": "46/2024", "objeto": "Manutenção predial"}
        ]),
        "/servidores" => json!([{"id": 10, "nome": "MARIA DA SILVA", "tipoVinculo": "Servidor"}]),
        "/convenios" => json!([{"numero": "900123", "uf": "MG", "valorConvenio": 500_000.0}]),
        "/ceis" => json!([]),
        p if p.starts_with("/servidores/") && p.ends_with("/remuneracao") => {
            json!([{"mesAno": "03/2024", "remuneracaoBasicaBruta": 9_000.0, "rendimentoLiquido": 7_100.0}])
        }
        _ => return (StatusCode::NOT_FOUND, "no such endpoint").into_response(),
    };
    Json(body).into_response()
}

/// `{code}/dados/ultimos/{n}`: answers with exactly `n` points
fn sgs(path: &str) -> Response {
    let Some(n) = path.rsplit('/').next().and_then(|n| n.parse::<usize>().ok()) else {
        return (StatusCode::BAD_REQUEST, "bad series request").into_response();
    };

    let points: Vec<Value> = (1..=n.min(400))
        .map(|i| json!({"data": format!("{:02}/01/2024", (i - 1) % 28 + 1), "valor": format!("0.{i:02}")}))
        .collect();
    Json(Value::Array(points)).into_response()
}

fn olinda(path: &str, query: &str) -> Response {
    if path.starts_with("/PTAX/") {
        let rate = if query.contains("EUR") { 5.9 } else { 5.1 };
        return Json(json!({
            "value": [{
                "cotacaoCompra": rate,
                "cotacaoVenda": rate + 0.001,
                "dataHoraCotacao": "2024-03-15 13:04:27.36",
                "tipoBoletim": "Fechamento"
            }]
        }))
        .into_response();
    }
    if path.starts_with("/Pix_DadosAbertos/") {
        return Json(json!({"value": [{"AnoMes": 202_403, "QuantidadeTransacoes": 4_200_000_000_u64}]})).into_response();
    }
    (StatusCode::NOT_FOUND, "no such service").into_response()
}

fn cnpj(id: &str) -> Response {
    if id != KNOWN_CNPJ {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "CNPJ não encontrado"}))).into_response();
    }
    Json(json!({
        "cnpj": "00000000000191",
        "razao_social": "BANCO DO BRASIL SA",
        "situacao_cadastral": 2,
        "uf": "DF",
        "qsa": [{"nome_socio": "FULANA DE TAL", "qualificacao_socio": "Presidente"}]
    }))
    .into_response()
}

fn localidades(path: &str) -> Response {
    let body = match path {
        "/estados" => json!([
            {"id": 12, "sigla": "AC", "nome": "Acre", "regiao": {"id": 1, "nome": "Norte"}},
            {"id": 33, "sigla": "RJ", "nome": "Rio de Janeiro", "regiao": {"id": 3, "nome": "Sudeste"}}
        ]),
        "/estados/33/municipios" => json!([
            {"id": 3_304_557, "nome": "Rio de Janeiro", "microrregiao": {"id": 33018, "nome": "Rio de Janeiro"}}
        ]),
        "/municipios" => json!([
            {"id": 1_100_015, "nome": "Alta Floresta D'Oeste", "microrregiao": null},
            {"id": 3_304_557, "nome": "Rio de Janeiro", "microrregiao": {"id": 33018, "nome": "Rio de Janeiro"}}
        ]),
        _ => return (StatusCode::NOT_FOUND, "no such endpoint").into_response(),
    };
    Json(body).into_response()
}

fn population() -> Value {
    json!([{
        "id": "9324",
        "variavel": "População residente estimada",
        "unidade": "Pessoas",
        "resultados": [{
            "classificacoes": [],
            "series": [{
                "localidade": {"id": "1", "nivel": {"id": "N1", "nome": "Brasil"}, "nome": "Brasil"},
                "serie": {"2021": "213317639", "2020": "211755692"}
            }]
        }]
    }])
}

fn pncp(path: &str) -> Response {
    let body = match path {
        "/contratacoes/publicacao" => json!({
            "data": [
                {"numeroControlePNCP": "00394460000141-1-000001/2024", "objetoCompra": "Papel A4"},
                {"numeroControlePNCP": "00394460000141-1-000002/2024", "objetoCompra": "Toner"}
            ],
            "totalRegistros": 1375,
            "totalPaginas": 28
        }),
        "/atas-registro-preco" => json!({"data": [{"numeroAta": "7/2024"}], "totalRegistros": 80}),
        _ => return (StatusCode::NOT_FOUND, "no such endpoint").into_response(),
    };
    Json(body).into_response()
}

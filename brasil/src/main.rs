#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::Args;
use brasil_config::Config;
use brasil_mcp::BrasilServer;
use clap::Parser;
use rmcp::ServiceExt;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    brasil_telemetry::init(&config.log, args.log_filter.as_deref())?;

    tracing::info!(
        config_path = ?args.config,
        version = env!("CARGO_PKG_VERSION"),
        "starting mcp-brasil"
    );

    if config.sources.transparencia.api_key().is_none() {
        tracing::warn!(
            "{} not set, Portal da Transparência tools will fail",
            brasil_config::TRANSPARENCY_API_KEY_ENV
        );
    }

    let server = BrasilServer::new(&config)?;

    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    // stdout belongs to the protocol from here on
    let service = server.serve_with_ct(rmcp::transport::stdio(), shutdown).await?;
    let reason = service.waiting().await?;

    tracing::info!(?reason, "mcp-brasil stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}

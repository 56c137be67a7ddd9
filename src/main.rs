//! Price resolver HTTP server.

use anyhow::{Context, bail};
use clap::Parser;
use price_resolver::api::rest::{AppState, create_router};
use price_resolver::application::{PriceQueryService, QueryServiceConfig};
use price_resolver::infrastructure::config::{
    AppConfig, NotifierBackend, NotifierConfig, StoreBackend, StoreConfig,
};
use price_resolver::infrastructure::messaging::{
    LogPriceEventPublisher, NoopPriceEventPublisher, PriceEventPublisher,
};
use price_resolver::infrastructure::persistence::PriceStore;
use price_resolver::infrastructure::persistence::in_memory::InMemoryPriceStore;
use price_resolver::infrastructure::persistence::postgres::PostgresPriceStore;
use price_resolver::infrastructure::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "price-resolver", version, about)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref()).context("loading configuration")?;
    telemetry::init(&config.log);

    let store = build_store(&config.store).await?;
    let publisher = build_publisher(&config.notifier).await?;
    info!(
        store = ?config.store.backend,
        publisher = publisher.name(),
        "collaborators ready"
    );

    let service = PriceQueryService::with_config(
        store,
        publisher,
        QueryServiceConfig::with_publish_timeout(config.notifier.publish_timeout()),
    );
    let router = create_router(AppState::new(service));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("shut down");
    Ok(())
}

async fn build_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn PriceStore>> {
    match config.backend {
        StoreBackend::Memory => {
            let store = if config.seed_reference_prices {
                InMemoryPriceStore::with_reference_prices()
                    .context("seeding reference prices")?
            } else {
                InMemoryPriceStore::new()
            };
            info!(records = store.len(), "in-memory price store");
            Ok(Arc::new(store))
        }
        StoreBackend::Postgres => {
            let Some(url) = config.database_url.as_deref() else {
                bail!("store.database_url is required for the postgres backend");
            };
            let store =
                PostgresPriceStore::connect(url, config.max_connections, config.acquire_timeout())
                    .await
                    .context("connecting to postgres")?;
            Ok(Arc::new(store))
        }
    }
}

async fn build_publisher(config: &NotifierConfig) -> anyhow::Result<Arc<dyn PriceEventPublisher>> {
    if !config.enabled {
        warn!("price events disabled");
        return Ok(Arc::new(NoopPriceEventPublisher));
    }

    match config.backend {
        NotifierBackend::Log => Ok(Arc::new(LogPriceEventPublisher::new())),
        #[cfg(feature = "nats")]
        NotifierBackend::Nats => {
            use price_resolver::infrastructure::messaging::NatsPriceEventPublisher;

            let Some(url) = config.nats_url.as_deref() else {
                bail!("notifier.nats_url is required for the nats backend");
            };
            let publisher = NatsPriceEventPublisher::connect(url, config.subject.clone())
                .await
                .context("connecting to nats")?;
            Ok(Arc::new(publisher))
        }
        #[cfg(not(feature = "nats"))]
        NotifierBackend::Nats => bail!("notifier.backend = \"nats\" requires the `nats` feature"),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

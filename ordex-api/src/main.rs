use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use ordex_api::{app, AppState};
use ordex_core::{DownstreamClient, HttpInventoryGateway, HttpPaymentGateway};
use ordex_order::OrderOrchestrator;
use ordex_store::OrderStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "ordex_api=debug,ordex_order=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ordex_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting Ordex API on port {}", config.server.port);
    if let Some(sink) = &config.logging.sink_url {
        // Shipping happens outside this process; the address is surfaced so
        // operators can see what the deployment is wired to.
        tracing::info!("External log sink configured at {}", sink);
    }

    let timeout = Duration::from_secs(config.downstream.timeout_seconds);
    let inventory = Arc::new(HttpInventoryGateway::new(DownstreamClient::new(
        &config.inventory.base_url,
        timeout,
    )));
    let payment = Arc::new(HttpPaymentGateway::new(DownstreamClient::new(
        &config.payment.base_url,
        timeout,
    )));

    let store = Arc::new(OrderStore::new());
    let orchestrator = Arc::new(OrderOrchestrator::new(inventory, payment, store.clone()));

    let app = app(AppState {
        orchestrator,
        store,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

use std::net::SocketAddr;
use std::sync::Arc;

use ordex_sim::{payment, DecisionProfile, RandomProfile, ScenarioTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ordex_sim=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ordex_store::Config::load().expect("Failed to load config");

    let profile = match std::env::var("ORDEX_SIM_SEED").ok().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => {
            tracing::info!(seed, "using randomized decision profile");
            DecisionProfile::Random(RandomProfile::seeded(seed))
        }
        None => DecisionProfile::Table(ScenarioTable::standard()),
    };

    let app = payment::router(Arc::new(profile));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.payment.port));
    tracing::info!("Payment simulator listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

use std::net::SocketAddr;

use nc_news::{init_db, make_router, run_app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nc_news=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = match init_db().await {
        Ok(pool) => pool,
        Err(error) => {
            tracing::error!("Failed to initialise the database: {}", error);
            return;
        }
    };
    let addr = SocketAddr::from(([127, 0, 0, 1], 9090));
    let router = make_router();
    tracing::info!("Server started on {}", addr);
    if let Err(error) = run_app(router, addr, pool).await {
        tracing::error!("Server error: {}", error);
    }
}

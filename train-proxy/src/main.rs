use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use train_proxy::auth::{AuthClient, AuthConfig, TokenCache};
use train_proxy::board::{BoardConfig, TrainBoard};
use train_proxy::config::AppConfig;
use train_proxy::feed::{FeedConfig, TrainFeedClient};
use train_proxy::web::{AppState, create_router};

/// Port the proxy listens on.
const PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // One client for both upstream endpoints, sharing its connection pool
    let http = reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client");

    let auth = AuthClient::new(
        http.clone(),
        AuthConfig::new(&config.auth_url, config.credentials.clone()),
    );
    let feed = TrainFeedClient::new(http, FeedConfig::new(&config.train_url));
    let board = TrainBoard::new(TokenCache::new(auth), feed, BoardConfig::default());

    let app = create_router(AppState::new(board), &config.route_path);

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!(%addr, route = %config.route_path, "train proxy listening");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}

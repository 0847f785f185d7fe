use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Fixed local port; no environment configuration by design.
const ADDR: &str = "127.0.0.1:3001";

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let listener = TcpListener::bind(ADDR).await?;
    info!("listening on http://{ADDR}");
    todo_server::run(listener).await
}

use anyhow::{Context, Result};
use nba_results::handlers::{router, AppState};
use nba_results::repository::InMemoryGameRepository;
use nba_results::{logging, Config};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    logging::init(&config.log);

    let service = nba_results::live_service(&config)?;
    let repository = Arc::new(InMemoryGameRepository::default());
    let app = router(AppState::new(service, repository));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, "Starting web server");
    println!("\nStarting web server at http://{}", addr);
    println!("Press Ctrl+C to stop\n");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

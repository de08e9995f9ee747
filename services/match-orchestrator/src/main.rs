use match_orchestrator::config::Config;
use match_orchestrator::router::create_router;
use match_orchestrator::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting match orchestration service");

    let config = Config::from_env();
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

use galley_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file, if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env();
    galley_server::init_logger_with_file(Some(&config.log_level), Some(&config.work_dir));

    tracing::info!("Galley POS server starting (env: {})", config.environment);

    let state = ServerState::initialize(&config).await?;
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

//! Erna bot entry point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use erna_bot::infrastructure::config::AppConfig;
use erna_bot::infrastructure::console_gateway::ConsoleGateway;
use erna_bot::infrastructure::persistence::CharacterStore;
use erna_bot::infrastructure::runtime::BotRuntime;
use erna_bot::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "erna_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Erna");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Characters: {}", config.characters_path.display());
    tracing::info!("  Command scope: {}", config.command_scope);

    // Load characters; a broken data file aborts startup
    let store = CharacterStore::load(&config.characters_path)?;

    let state = AppState::new(config, store);
    tracing::info!(
        "Application state initialized ({} characters)",
        state.store.read().await.len()
    );

    let mut runtime = BotRuntime::new(
        ConsoleGateway::stdio(),
        state.command_service.clone(),
        state.shutdown.clone(),
    );

    // Ctrl+C raises the same signal as `stop`, so the runtime finishes the reply in flight
    let interrupt = {
        let shutdown = state.shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupted, shutting down");
                shutdown.trigger();
            }
        })
    };

    let result = runtime
        .start(&state.config.discord_token, state.config.command_scope)
        .await;
    interrupt.abort();

    if let Err(e) = result {
        tracing::error!("Runtime error: {:#}", e);
        return Err(e);
    }

    tracing::info!("Erna has stopped");
    Ok(())
}

//! MindScope application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Read secrets from the environment and `.env` (`API_KEY` is required)
//! 3. Build the Gemini client, resolver and chat orchestrator
//! 4. Serve the chat page and JSON API with axum

mod cli;

use std::path::Path;
use std::sync::Arc;

use clap::Parser;

use mindscope_api::routes;
use mindscope_api::state::AppState;
use mindscope_chat::{ChatOrchestrator, GeminiClient, ResponseResolver};
use mindscope_core::config::{MindscopeConfig, Secrets, DOTENV_FILE};
use mindscope_core::MindscopeError;

use cli::CliArgs;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // Config is read before tracing starts so its log level can apply.
    let config_path = args.resolve_config_path();
    let loaded = if config_path.exists() {
        MindscopeConfig::load(&config_path).map_err(Some)
    } else {
        Err(None)
    };
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => MindscopeConfig::default(),
    };

    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .init();

    tracing::info!("Starting MindScope AI v{}", env!("CARGO_PKG_VERSION"));
    match &loaded {
        Ok(_) => tracing::info!(path = %config_path.display(), "Configuration loaded"),
        Err(Some(e)) => {
            tracing::warn!(path = %config_path.display(), error = %e, "Invalid config file, using defaults")
        }
        Err(None) => {
            tracing::warn!(path = %config_path.display(), "Config file not found, using defaults")
        }
    }

    config.server.host = args.resolve_host(&config.server.host);
    config.server.port = args.resolve_port(config.server.port);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "MindScope AI stopped");
        std::process::exit(1);
    }
}

async fn run(config: MindscopeConfig) -> Result<(), MindscopeError> {
    let secrets = Secrets::from_env_and_file(Path::new(DOTENV_FILE))?;
    tracing::info!(
        project_id = secrets.project_id.is_some(),
        project_number = secrets.project_number.is_some(),
        "Secrets loaded"
    );

    let client = GeminiClient::from_config(secrets.api_key, &config.model);
    tracing::info!(model = %config.model.name, "Gemini client ready");

    let resolver = ResponseResolver::new(Arc::new(client));
    let orchestrator = ChatOrchestrator::new(resolver);
    let state = AppState::new(config, orchestrator);

    routes::start_server(state).await
}

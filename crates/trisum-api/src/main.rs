use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trisum_api::{
    build_router,
    config::Config,
    service::Summarizer,
    state::AppState,
};
use trisum_llm::{ClientFactory, GeminiConfig, ProviderConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Fails fast when GOOGLE_API_KEY is missing
    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config);

    tracing::info!("Starting trisum API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    let mut provider = GeminiConfig::new(config.google_api_key.clone());
    if let Some(base_url) = &config.llm.base_url {
        provider = provider.with_base_url(base_url.clone());
    }
    let llm_client = ClientFactory::create_client(ProviderConfig::Gemini(provider))?;
    tracing::info!("Using model {}", config.llm.model);

    let summarizer = Summarizer::from_config(llm_client, &config.llm);
    let state = Arc::new(AppState::new(config.clone(), summarizer));

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}

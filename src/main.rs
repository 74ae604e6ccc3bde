use advisor_insights::adapters::services::llm::GoogleService;
use advisor_insights::analysis::Analyzer;
use advisor_insights::config::Config;
use advisor_insights::error::Result;
use advisor_insights::http::{router, AppState};
use advisor_insights::ports::llm::LlmServicePort;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    let llm = GoogleService::new(config.gemini_api_key.clone());
    if !llm.is_configured() {
        log::warn!("GEMINI_API_KEY is not set; analysis requests will fail upstream");
    }

    let analyzer = Analyzer::new(Arc::new(llm), config.llm.clone());
    let state = AppState {
        analyzer: Arc::new(analyzer),
    };

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    log::info!("advisor-insights listening on {}", config.bind);

    axum::serve(listener, router(state)).await?;

    Ok(())
}

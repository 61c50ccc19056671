//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{GeminiTextAdapter, OpenAiTextAdapter},
    config::Config,
    error::ApiError,
    web::{
        analyze_handler, chat_handler, health_handler, quiz_handler, study_plan_handler,
        ApiDoc, AppState,
    },
};
use async_openai::{config::OpenAIConfig, Client};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use study_ai_core::{ports::TextGenerationService, StudyAssistant};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Build the Provider Chain ---
    // Providers are tried in this order; an absent key simply leaves a
    // provider out, and with no providers every reply is rule-based.
    let mut providers: Vec<Arc<dyn TextGenerationService>> = Vec::new();
    if let Some(api_key) = &config.openai_api_key {
        let client = Client::with_config(OpenAIConfig::new().with_api_key(api_key));
        providers.push(Arc::new(OpenAiTextAdapter::new(
            client,
            config.openai_model.clone(),
        )));
    }
    if let Some(api_key) = &config.gemini_api_key {
        providers.push(Arc::new(GeminiTextAdapter::new(
            api_key,
            &config.gemini_base_url,
            config.gemini_model.clone(),
        )));
    }
    info!(
        openai = config.openai_api_key.is_some(),
        gemini = config.gemini_api_key.is_some(),
        "AI providers configured (rule-based fallback is always available)"
    );

    // --- 3. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        assistant: StudyAssistant::new(providers),
        config: config.clone(),
    });

    // The original frontend is served from another origin, so stay open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // --- 4. Create the Web Router ---
    let api_router = Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/study-plan", post(study_plan_handler))
        .route("/quiz", post(quiz_handler))
        .route("/analyze", post(analyze_handler))
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

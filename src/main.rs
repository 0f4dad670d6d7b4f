use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use shop_chatbot_backend::routes::create_router;
use shop_chatbot_backend::services::catalog::Catalog;
use shop_chatbot_backend::services::provider::OpenAiClient;
use shop_chatbot_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Refuses to start without OPENAI_API_KEY.
    let provider = OpenAiClient::from_env()?;
    let state = Arc::new(AppState::new(Catalog::builtin(), Arc::new(provider)));

    // Locked to the frontend origin when one is configured, wide open for
    // local development otherwise.
    let cors = match std::env::var("FRONTEND_ORIGIN") {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => CorsLayer::very_permissive(),
    };

    let app = create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
    tracing::info!("shop chatbot backend running at http://localhost:8000");
    axum::serve(listener, app).await?;

    Ok(())
}

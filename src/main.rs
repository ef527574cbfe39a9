use std::sync::Arc;

use course_forge::api::{cors_layer, router};
use course_forge::config::Config;
use course_forge::gemini::{CourseModel, GeminiHttpClient, UnavailableModel};
use course_forge::state::AppState;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "course_forge=debug,tower_http=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new_from_env()?;

    let model: Arc<dyn CourseModel> = match config.gemini.clone() {
        Some(gemini) => Arc::new(GeminiHttpClient::new(gemini)?),
        None => Arc::new(UnavailableModel),
    };

    let state = AppState { model };

    let app = router(state)
        .layer(cors_layer(&config.cors_allow_origin)?)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

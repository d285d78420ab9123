pub mod form_routes;
pub mod options_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la aplicación con sus capas
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .merge(form_routes::create_form_router())
        .nest("/api", options_routes::create_options_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Endpoint de salud simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "car-price-estimator",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

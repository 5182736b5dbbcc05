//! HTTP handlers: HTML dashboard routes and the JSON API

pub mod assets;
pub mod data;
pub mod health;
pub mod modals;
pub mod notifications;
pub mod openapi;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{views::layout, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Server-rendered dashboard
    let ui = Router::new()
        .route("/", get(pages::index))
        .route("/pages/:page", get(pages::load_page))
        .route("/sidebar/toggle", post(pages::toggle_sidebar))
        .route("/sidebar/close", post(pages::close_sidebar))
        .route("/modals/:kind", post(modals::open_modal))
        .route("/modal/close", post(modals::close_modal))
        .route("/modal/confirm", post(modals::confirm_modal))
        .route("/quick-actions", post(modals::quick_action))
        .route(layout::STYLESHEET_PATH, get(assets::stylesheet))
        .route(layout::SCRIPT_PATH, get(assets::script));

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // UI state
        .route("/state", get(data::get_state))
        // Sample data
        .route("/sample-data", get(data::get_sample_data))
        .route("/tools/:id", get(data::get_tool))
        .route("/metrics", get(data::get_metrics))
        .route("/activity", get(data::get_activity))
        .route("/charts/usage", get(data::get_usage_chart))
        .route("/search", get(data::search))
        // Notifications
        .route(
            "/notifications",
            get(notifications::list_notifications).post(notifications::create_notification),
        );

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(ui)
        .nest("/api/v1", api_v1)
        .with_state(state)
        .merge(openapi)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
}

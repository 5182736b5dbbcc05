//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{data, health, notifications};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Custom TMS API",
        version = "1.0.0",
        description = "Tooling Management System dashboard API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // UI state and data
        data::get_state,
        data::get_sample_data,
        data::get_tool,
        data::get_metrics,
        data::get_activity,
        data::get_usage_chart,
        data::search,
        // Notifications
        notifications::list_notifications,
        notifications::create_notification,
    ),
    components(
        schemas(
            // Records
            crate::models::Tool,
            crate::models::MaintenanceItem,
            crate::models::CheckedOutItem,
            crate::models::User,
            crate::models::RecentActivityEvent,
            crate::models::SampleData,
            crate::models::ToolCategory,
            crate::models::ToolStatus,
            crate::models::MaintenancePriority,
            crate::models::ActivityKind,
            crate::models::Page,
            crate::models::DashboardMetrics,
            crate::models::ChartSeries,
            crate::models::metrics::ChartPoint,
            // UI
            data::UiStateResponse,
            data::ModalState,
            data::MetricsResponse,
            crate::views::modals::ModalKind,
            // Notifications
            crate::models::NotificationLevel,
            crate::models::NotificationPhase,
            crate::models::notification::NotificationView,
            crate::models::notification::CreateNotification,
            notifications::CreateNotificationResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "ui", description = "Dashboard UI state"),
        (name = "data", description = "Sample data and dashboard figures"),
        (name = "notifications", description = "Toast notifications")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

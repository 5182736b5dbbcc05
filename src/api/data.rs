//! JSON endpoints over the sample data and UI state

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::{
        notification::NotificationView, ChartSeries, DashboardMetrics, Page, RecentActivityEvent,
        SampleData, Tool,
    },
    views::{format::format_currency, modals::ModalKind},
};

/// Modal overlay as seen by the client
#[derive(Serialize, ToSchema)]
pub struct ModalState {
    pub open: bool,
    pub kind: Option<ModalKind>,
    pub title: String,
    pub confirm_label: String,
}

/// Current UI state
#[derive(Serialize, ToSchema)]
pub struct UiStateResponse {
    pub current_page: Page,
    /// Pages whose container is visible (at most one)
    pub active_pages: Vec<Page>,
    /// Highlighted navigation entries (at most one)
    pub active_nav: Vec<Page>,
    pub sidebar_open: bool,
    pub modal: Option<ModalState>,
    pub notifications: Vec<NotificationView>,
}

#[derive(Serialize, ToSchema)]
pub struct MetricsResponse {
    pub metrics: DashboardMetrics,
    /// Total value formatted as USD
    pub total_value_display: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Matched against tool id, name and category
    pub q: Option<String>,
}

/// Get the current UI state
#[utoipa::path(
    get,
    path = "/state",
    tag = "ui",
    responses(
        (status = 200, description = "Current page, modal and notifications",
         body = UiStateResponse)
    )
)]
pub async fn get_state(State(state): State<crate::AppState>) -> Json<UiStateResponse> {
    let services = &state.services;
    let (current_page, active_pages, active_nav, sidebar_open) =
        services.navigation.with_shell(|shell| {
            (
                shell.current_page(),
                shell.active_containers(),
                shell.active_nav(),
                shell.sidebar_open(),
            )
        });

    let modal = services.modals.snapshot().map(|overlay| ModalState {
        open: overlay.active,
        kind: overlay.kind,
        title: overlay.title,
        confirm_label: overlay.confirm_label,
    });

    Json(UiStateResponse {
        current_page,
        active_pages,
        active_nav,
        sidebar_open,
        modal,
        notifications: services.notifications.views(),
    })
}

/// Get the full sample data set
#[utoipa::path(
    get,
    path = "/sample-data",
    tag = "data",
    responses(
        (status = 200, description = "All sample records", body = SampleData)
    )
)]
pub async fn get_sample_data(State(state): State<crate::AppState>) -> Json<SampleData> {
    Json(state.services.catalog.sample_data())
}

/// Get a tool by its inventory id
#[utoipa::path(
    get,
    path = "/tools/{id}",
    tag = "data",
    params(("id" = String, Path, description = "Tool id, e.g. DP-001")),
    responses(
        (status = 200, description = "Tool details", body = Tool),
        (status = 404, description = "Tool not found")
    )
)]
pub async fn get_tool(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Tool>> {
    state
        .services
        .catalog
        .get_tool(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Tool {} not found", id)))
}

/// Get dashboard metrics
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "data",
    responses(
        (status = 200, description = "Dashboard metrics", body = MetricsResponse)
    )
)]
pub async fn get_metrics(State(state): State<crate::AppState>) -> Json<MetricsResponse> {
    let metrics = state.services.dashboard.metrics().clone();
    Json(MetricsResponse {
        total_value_display: format_currency(metrics.total_value),
        metrics,
    })
}

/// Get the recent activity feed
#[utoipa::path(
    get,
    path = "/activity",
    tag = "data",
    responses(
        (status = 200, description = "Recent activity", body = Vec<RecentActivityEvent>)
    )
)]
pub async fn get_activity(State(state): State<crate::AppState>) -> Json<Vec<RecentActivityEvent>> {
    Json(state.services.dashboard.recent_activity().to_vec())
}

/// Get the monthly usage series drawn on the dashboard
#[utoipa::path(
    get,
    path = "/charts/usage",
    tag = "data",
    responses(
        (status = 200, description = "Usage chart series", body = ChartSeries)
    )
)]
pub async fn get_usage_chart(State(state): State<crate::AppState>) -> Json<ChartSeries> {
    Json(state.services.dashboard.usage_series().clone())
}

/// Global tool search
#[utoipa::path(
    get,
    path = "/search",
    tag = "data",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching tools", body = Vec<Tool>)
    )
)]
pub async fn search(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Tool>> {
    let q = query.q.unwrap_or_default();
    Json(state.services.catalog.search(&q))
}

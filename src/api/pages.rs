//! Page navigation endpoints (HTML)

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::views::layout::{self, DocumentParts};

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    /// Page to navigate to before rendering
    pub page: Option<String>,
}

/// Full dashboard document in its current state.
/// `?page=` navigates first, so nav links work without the page script.
pub async fn index(
    State(state): State<crate::AppState>,
    Query(query): Query<IndexQuery>,
) -> Html<String> {
    let services = &state.services;
    if let Some(page_id) = query.page.as_deref() {
        services.navigation.load_page(page_id);
    }
    let modal = services.modals.snapshot();
    let notifications = services
        .notifications
        .with_center(|center| center.active().to_vec());

    let html = services.navigation.with_shell(|shell| {
        layout::document(&DocumentParts {
            title: &state.config.ui.company_name,
            shell,
            modal: modal.as_ref(),
            notifications: &notifications,
        })
    });
    Html(html)
}

/// Navigate to a page and return its container content.
/// Unknown pages answer with an empty body.
pub async fn load_page(
    State(state): State<crate::AppState>,
    Path(page_id): Path<String>,
) -> Html<String> {
    let content = state
        .services
        .navigation
        .load_page(&page_id)
        .map(|(_, content)| content.render())
        .unwrap_or_default();
    Html(content)
}

#[derive(Serialize, ToSchema)]
pub struct SidebarResponse {
    pub open: bool,
}

pub async fn toggle_sidebar(State(state): State<crate::AppState>) -> Json<SidebarResponse> {
    let open = state.services.navigation.toggle_sidebar();
    Json(SidebarResponse { open })
}

/// Outside click on small screens
pub async fn close_sidebar(State(state): State<crate::AppState>) -> Json<SidebarResponse> {
    state.services.navigation.close_sidebar();
    Json(SidebarResponse { open: false })
}

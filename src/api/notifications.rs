//! Notification endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::notification::{CreateNotification, NotificationView},
    services::notifications::PushOutcome,
};

#[derive(Serialize, ToSchema)]
pub struct CreateNotificationResponse {
    pub id: Uuid,
    /// True when an identical notification was already pending
    pub duplicate: bool,
}

/// List active and queued notifications
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "notifications",
    responses(
        (status = 200, description = "Notifications, visible first", body = Vec<NotificationView>)
    )
)]
pub async fn list_notifications(
    State(state): State<crate::AppState>,
) -> Json<Vec<NotificationView>> {
    Json(state.services.notifications.views())
}

/// Show a toast notification
#[utoipa::path(
    post,
    path = "/notifications",
    tag = "notifications",
    request_body = CreateNotification,
    responses(
        (status = 202, description = "Notification accepted", body = CreateNotificationResponse),
        (status = 200, description = "Identical notification already pending",
         body = CreateNotificationResponse),
        (status = 400, description = "Empty message")
    )
)]
pub async fn create_notification(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateNotification>,
) -> AppResult<(StatusCode, Json<CreateNotificationResponse>)> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("Notification message is empty".to_string()));
    }

    let outcome = state.services.notifications.notify(message, request.level);
    let (status, id, duplicate) = match outcome {
        PushOutcome::Accepted(id) => (StatusCode::ACCEPTED, id, false),
        PushOutcome::Duplicate(id) => (StatusCode::OK, id, true),
    };
    Ok((status, Json(CreateNotificationResponse { id, duplicate })))
}

//! Modal dialog endpoints (HTML)

use axum::{
    async_trait,
    extract::{FromRequest, Path, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::Html,
    Form, Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    services::modals::ModalOverlay,
    views::{html::Node, layout, modals::ModalKind},
};

#[derive(Debug, Deserialize)]
pub struct QuickActionRequest {
    /// Button label, e.g. `Add New Tool`
    pub action: String,
}

/// Quick action body, form-encoded or JSON depending on `Content-Type`
pub struct QuickActionInput(pub QuickActionRequest);

#[async_trait]
impl<S> FromRequest<S> for QuickActionInput
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        let request = if is_json {
            let Json(request) = Json::<QuickActionRequest>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            request
        } else {
            let Form(request) = Form::<QuickActionRequest>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
            request
        };
        Ok(Self(request))
    }
}

fn overlay_html(overlay: Option<ModalOverlay>) -> Html<String> {
    let html = overlay
        .map(|overlay| Node::from(layout::modal_overlay(&overlay)).render())
        .unwrap_or_default();
    Html(html)
}

/// Open a modal by its key and return the overlay
pub async fn open_modal(
    State(state): State<crate::AppState>,
    Path(kind): Path<String>,
) -> AppResult<Html<String>> {
    let kind: ModalKind = kind.parse()?;
    Ok(overlay_html(state.services.modals.open(kind)))
}

/// Dashboard quick action; unknown labels leave the overlay untouched
pub async fn quick_action(
    State(state): State<crate::AppState>,
    QuickActionInput(request): QuickActionInput,
) -> Html<String> {
    overlay_html(state.services.modals.quick_action(&request.action))
}

pub async fn close_modal(State(state): State<crate::AppState>) -> StatusCode {
    state.services.modals.close();
    StatusCode::NO_CONTENT
}

pub async fn confirm_modal(State(state): State<crate::AppState>) -> StatusCode {
    state.services.modals.confirm();
    StatusCode::NO_CONTENT
}

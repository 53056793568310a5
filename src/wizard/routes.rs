//! REST endpoints for the preference wizard.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use super::controller::WizardController;
use super::model::{FieldPatch, UserType};

/// Shared state for wizard routes.
#[derive(Clone)]
pub struct WizardRouteState {
    pub controller: Arc<WizardController>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserTypeBody {
    user_type: UserType,
}

#[derive(Debug, Deserialize)]
struct StepBody {
    step: usize,
}

/// GET /api/wizard/view — current derived view state and draft.
async fn get_view(State(state): State<WizardRouteState>) -> impl IntoResponse {
    Json(state.controller.view().await)
}

/// GET /api/wizard/saved — the last stored draft, or 404 if none.
async fn get_saved(State(state): State<WizardRouteState>) -> impl IntoResponse {
    match state.controller.load_saved().await {
        Ok(Some(draft)) => Json(serde_json::to_value(draft).unwrap_or_default()).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "No saved preferences"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

async fn select_user_type(
    State(state): State<WizardRouteState>,
    Json(body): Json<UserTypeBody>,
) -> impl IntoResponse {
    state.controller.select_user_type(body.user_type).await;
    Json(state.controller.view().await)
}

async fn confirm_user_type(State(state): State<WizardRouteState>) -> impl IntoResponse {
    state.controller.confirm_user_type().await;
    Json(state.controller.view().await)
}

async fn go_to_step(
    State(state): State<WizardRouteState>,
    Json(body): Json<StepBody>,
) -> impl IntoResponse {
    state.controller.go_to_step(body.step).await;
    Json(state.controller.view().await)
}

/// POST /api/wizard/field — body is a tagged [`FieldPatch`]; unknown
/// field tags never reach the controller, serde rejects them here.
async fn apply_field(
    State(state): State<WizardRouteState>,
    Json(patch): Json<FieldPatch>,
) -> impl IntoResponse {
    state.controller.apply_field(patch).await;
    Json(state.controller.view().await)
}

async fn save_progress(State(state): State<WizardRouteState>) -> impl IntoResponse {
    match state.controller.save_progress().await {
        Ok(()) => Json(state.controller.view().await).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

async fn complete_profile(State(state): State<WizardRouteState>) -> impl IntoResponse {
    match state.controller.complete_profile().await {
        Ok(()) => Json(state.controller.view().await).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

async fn skip(State(state): State<WizardRouteState>) -> impl IntoResponse {
    let route = state.controller.skip().await;
    Json(serde_json::json!({"redirect": route.path()}))
}

async fn edit_section(
    State(state): State<WizardRouteState>,
    Json(body): Json<StepBody>,
) -> impl IntoResponse {
    state.controller.edit_section(body.step).await;
    Json(state.controller.view().await)
}

async fn continue_editing(State(state): State<WizardRouteState>) -> impl IntoResponse {
    state.controller.continue_editing().await;
    Json(state.controller.view().await)
}

async fn finish(State(state): State<WizardRouteState>) -> impl IntoResponse {
    let route = state.controller.finish().await;
    Json(serde_json::json!({"redirect": route.path()}))
}

/// Build the wizard REST routes.
pub fn wizard_routes(state: WizardRouteState) -> Router {
    Router::new()
        .route("/api/wizard/view", get(get_view))
        .route("/api/wizard/saved", get(get_saved))
        .route("/api/wizard/user-type", post(select_user_type))
        .route("/api/wizard/user-type/confirm", post(confirm_user_type))
        .route("/api/wizard/step", post(go_to_step))
        .route("/api/wizard/field", post(apply_field))
        .route("/api/wizard/save", post(save_progress))
        .route("/api/wizard/complete", post(complete_profile))
        .route("/api/wizard/skip", post(skip))
        .route("/api/wizard/edit", post(edit_section))
        .route("/api/wizard/continue", post(continue_editing))
        .route("/api/wizard/finish", post(finish))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

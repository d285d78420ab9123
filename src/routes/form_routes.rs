use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Router,
};

use crate::controllers::{FormController, SubmitOutcome};
use crate::dto::form_dto::FormSubmission;
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};
use crate::views::render_form_page;

pub fn create_form_router() -> Router<AppState> {
    Router::new()
        .route("/", get(show_form))
        .route("/evaluate", post(evaluate))
}

// GET / — carga los desplegables; con `makeId` también la cascada de modelos
async fn show_form(
    State(state): State<AppState>,
    Query(submission): Query<FormSubmission>,
) -> AppResult<Html<String>> {
    let mut controller = state.form_controller();
    controller.populate_static_options().await;
    controller.load_submission(&submission).await;
    render(&controller)
}

// POST /evaluate — misma sesión que la página que envió el formulario
async fn evaluate(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> AppResult<(StatusCode, Html<String>)> {
    let mut controller = state.form_controller();
    controller.populate_static_options().await;
    controller.load_submission(&submission).await;

    let status = match controller.submit().await {
        SubmitOutcome::Rendered => StatusCode::OK,
        SubmitOutcome::Rejected => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Failed => StatusCode::BAD_GATEWAY,
    };

    Ok((status, render(&controller)?))
}

fn render(controller: &FormController) -> AppResult<Html<String>> {
    render_form_page(controller.state())
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))
}

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::models::option::{OptionId, SelectOption};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_options_router() -> Router<AppState> {
    Router::new()
        .route("/options/:select_id", get(get_options))
        .route("/model-options/:make_id", get(get_model_options))
}

async fn get_options(
    State(state): State<AppState>,
    Path(select_id): Path<String>,
) -> AppResult<Json<Vec<SelectOption>>> {
    let options = state.options.get_options_by_select_id(&select_id).await?;
    Ok(Json(options))
}

async fn get_model_options(
    State(state): State<AppState>,
    Path(make_id): Path<OptionId>,
) -> AppResult<Json<Vec<SelectOption>>> {
    let options = state.options.get_model_options(make_id).await?;
    Ok(Json(options))
}

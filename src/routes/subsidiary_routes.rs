use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::subsidiary_controller::SubsidiaryController;
use crate::dto::client_dto::ApiResponse;
use crate::dto::subsidiary_dto::{CreateSubsidiaryRequest, SubsidiaryResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_subsidiary_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_subsidiary))
        .route("/", get(list_subsidiaries))
        .route("/:id", get(get_subsidiary))
}

async fn create_subsidiary(
    State(state): State<AppState>,
    Json(request): Json<CreateSubsidiaryRequest>,
) -> Result<Json<ApiResponse<SubsidiaryResponse>>, AppError> {
    let controller = SubsidiaryController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_subsidiary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubsidiaryResponse>, AppError> {
    let controller = SubsidiaryController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_subsidiaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubsidiaryResponse>>, AppError> {
    let controller = SubsidiaryController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::car_model_controller::CarModelController;
use crate::dto::car_model_dto::{
    CarModelResponse, CreateCarModelRequest, CreateManufacturerRequest, ManufacturerResponse,
};
use crate::dto::client_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_model_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_car_model))
        .route("/", get(list_car_models))
        .route("/:id", get(get_car_model))
}

pub fn create_manufacturer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_manufacturer))
        .route("/", get(list_manufacturers))
}

async fn create_car_model(
    State(state): State<AppState>,
    Json(request): Json<CreateCarModelRequest>,
) -> Result<Json<ApiResponse<CarModelResponse>>, AppError> {
    let controller = CarModelController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_car_model(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarModelResponse>, AppError> {
    let controller = CarModelController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_car_models(
    State(state): State<AppState>,
) -> Result<Json<Vec<CarModelResponse>>, AppError> {
    let controller = CarModelController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn create_manufacturer(
    State(state): State<AppState>,
    Json(request): Json<CreateManufacturerRequest>,
) -> Result<Json<ApiResponse<ManufacturerResponse>>, AppError> {
    let controller = CarModelController::new(state.pool.clone());
    let response = controller.create_manufacturer(request).await?;
    Ok(Json(response))
}

async fn list_manufacturers(
    State(state): State<AppState>,
) -> Result<Json<Vec<ManufacturerResponse>>, AppError> {
    let controller = CarModelController::new(state.pool.clone());
    let response = controller.list_manufacturers().await?;
    Ok(Json(response))
}

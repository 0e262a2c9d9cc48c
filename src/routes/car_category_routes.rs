use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::car_category_controller::CarCategoryController;
use crate::dto::car_category_dto::{CarCategoryResponse, CreateCarCategoryRequest};
use crate::dto::client_dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_category_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_car_category))
        .route("/", get(list_car_categories))
        .route("/:id", get(get_car_category))
}

async fn create_car_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCarCategoryRequest>,
) -> Result<Json<ApiResponse<CarCategoryResponse>>, AppError> {
    let controller = CarCategoryController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_car_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CarCategoryResponse>, AppError> {
    let controller = CarCategoryController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_car_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CarCategoryResponse>>, AppError> {
    let controller = CarCategoryController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

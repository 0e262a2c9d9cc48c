use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::rental_controller::RentalController;
use crate::dto::client_dto::ApiResponse;
use crate::dto::rental_dto::{
    AvailabilityQuery, AvailabilityResponse, CreateRentalRequest, RentalResponse,
    StartRentalRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_rental))
        .route("/", get(list_rentals))
        .route("/availability", get(check_availability))
        .route("/:id", get(get_rental))
        .route("/:id/start", put(start_rental))
}

async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<Json<ApiResponse<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn check_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.check_availability(query).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RentalResponse>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn start_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<StartRentalRequest>,
) -> Result<Json<ApiResponse<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.start(id, request).await?;
    Ok(Json(response))
}

//! Controller de coches

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::car_dto::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::dto::client_dto::ApiResponse;
use crate::repositories::car_model_repository::CarModelRepository;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::subsidiary_repository::SubsidiaryRepository;
use crate::utils::errors::{bad_request_error, conflict_error, not_found_error, AppResult};
use crate::utils::validation::validate_license_plate;

pub struct CarController {
    repository: CarRepository,
    models: CarModelRepository,
    subsidiaries: SubsidiaryRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool.clone()),
            models: CarModelRepository::new(pool.clone()),
            subsidiaries: SubsidiaryRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCarRequest) -> AppResult<ApiResponse<CarResponse>> {
        validate_license_plate(&request.license_plate)
            .map_err(|_| bad_request_error("Formato de matrícula inválido"))?;

        if self
            .repository
            .license_plate_exists(&request.license_plate)
            .await?
        {
            return Err(conflict_error("Car", "license_plate", &request.license_plate));
        }

        self.models
            .find_by_id(request.car_model_id)
            .await?
            .ok_or_else(|| not_found_error("CarModel", &request.car_model_id.to_string()))?;
        self.subsidiaries
            .find_by_id(request.subsidiary_id)
            .await?
            .ok_or_else(|| not_found_error("Subsidiary", &request.subsidiary_id.to_string()))?;

        let car = self
            .repository
            .create(
                request.car_model_id,
                request.subsidiary_id,
                request.license_plate,
                request.color,
                request.mileage.unwrap_or(0),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CarResponse::from(car),
            "Coche creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CarResponse> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        Ok(CarResponse::from(car))
    }

    pub async fn list_by_subsidiary(&self, subsidiary_id: Uuid) -> AppResult<Vec<CarResponse>> {
        let cars = self.repository.find_by_subsidiary(subsidiary_id).await?;

        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCarRequest,
    ) -> AppResult<ApiResponse<CarResponse>> {
        if let Some(plate) = &request.license_plate {
            validate_license_plate(plate)
                .map_err(|_| bad_request_error("Formato de matrícula inválido"))?;
        }

        let car = self
            .repository
            .update(id, request.license_plate, request.color, request.mileage)
            .await?;

        Ok(ApiResponse::success_with_message(
            CarResponse::from(car),
            "Coche actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

//! Controller de modelos de coche y fabricantes

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::car_model_dto::{
    CarModelResponse, CreateCarModelRequest, CreateManufacturerRequest, ManufacturerResponse,
};
use crate::dto::client_dto::ApiResponse;
use crate::repositories::car_category_repository::CarCategoryRepository;
use crate::repositories::car_model_repository::CarModelRepository;
use crate::repositories::manufacturer_repository::ManufacturerRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct CarModelController {
    repository: CarModelRepository,
    manufacturers: ManufacturerRepository,
    categories: CarCategoryRepository,
}

impl CarModelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarModelRepository::new(pool.clone()),
            manufacturers: ManufacturerRepository::new(pool.clone()),
            categories: CarCategoryRepository::new(pool),
        }
    }

    pub async fn create_manufacturer(
        &self,
        request: CreateManufacturerRequest,
    ) -> AppResult<ApiResponse<ManufacturerResponse>> {
        request.validate()?;

        let manufacturer = self.manufacturers.create(request.name).await?;

        Ok(ApiResponse::success_with_message(
            ManufacturerResponse::from(manufacturer),
            "Fabricante creado exitosamente".to_string(),
        ))
    }

    pub async fn list_manufacturers(&self) -> AppResult<Vec<ManufacturerResponse>> {
        let manufacturers = self.manufacturers.list_all().await?;

        Ok(manufacturers
            .into_iter()
            .map(ManufacturerResponse::from)
            .collect())
    }

    pub async fn create(
        &self,
        request: CreateCarModelRequest,
    ) -> AppResult<ApiResponse<CarModelResponse>> {
        request.validate()?;

        // El modelo es quien lleva la categoría, verificar ambas referencias
        self.manufacturers
            .find_by_id(request.manufacturer_id)
            .await?
            .ok_or_else(|| not_found_error("Manufacturer", &request.manufacturer_id.to_string()))?;
        self.categories
            .find_by_id(request.car_category_id)
            .await?
            .ok_or_else(|| not_found_error("CarCategory", &request.car_category_id.to_string()))?;

        let model = self
            .repository
            .create(
                request.name,
                request.year,
                request.manufacturer_id,
                request.car_category_id,
                request.fuel_type,
                request.motorization,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CarModelResponse::from(model),
            "Modelo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CarModelResponse> {
        let model = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("CarModel", &id.to_string()))?;

        Ok(CarModelResponse::from(model))
    }

    pub async fn list(&self) -> AppResult<Vec<CarModelResponse>> {
        let models = self.repository.list_all().await?;

        Ok(models.into_iter().map(CarModelResponse::from).collect())
    }
}

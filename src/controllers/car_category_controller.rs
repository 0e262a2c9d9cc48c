//! Controller de categorías de coche

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::car_category_dto::{CarCategoryResponse, CreateCarCategoryRequest};
use crate::dto::client_dto::ApiResponse;
use crate::repositories::car_category_repository::CarCategoryRepository;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use crate::utils::validation::validate_positive;

pub struct CarCategoryController {
    repository: CarCategoryRepository,
}

impl CarCategoryController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarCategoryRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCarCategoryRequest,
    ) -> AppResult<ApiResponse<CarCategoryResponse>> {
        request.validate()?;

        // Los importes se guardan tal cual, pero tienen que ser positivos
        validate_positive(request.daily_rate)
            .map_err(|_| bad_request_error("La tarifa diaria debe ser positiva"))?;
        validate_positive(request.car_insurance)
            .map_err(|_| bad_request_error("El seguro del coche debe ser positivo"))?;
        validate_positive(request.third_party_insurance)
            .map_err(|_| bad_request_error("El seguro a terceros debe ser positivo"))?;

        let category = self
            .repository
            .create(
                request.name,
                request.daily_rate,
                request.car_insurance,
                request.third_party_insurance,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            CarCategoryResponse::from(category),
            "Categoría creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CarCategoryResponse> {
        let category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("CarCategory", &id.to_string()))?;

        Ok(CarCategoryResponse::from(category))
    }

    pub async fn list(&self) -> AppResult<Vec<CarCategoryResponse>> {
        let categories = self.repository.list_all().await?;

        Ok(categories.into_iter().map(CarCategoryResponse::from).collect())
    }
}

//! Controller de sucursales

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::client_dto::ApiResponse;
use crate::dto::subsidiary_dto::{CreateSubsidiaryRequest, SubsidiaryResponse};
use crate::repositories::subsidiary_repository::SubsidiaryRepository;
use crate::utils::errors::{bad_request_error, conflict_error, not_found_error, AppResult};
use crate::utils::validation::validate_not_empty;

pub struct SubsidiaryController {
    repository: SubsidiaryRepository,
}

impl SubsidiaryController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SubsidiaryRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateSubsidiaryRequest,
    ) -> AppResult<ApiResponse<SubsidiaryResponse>> {
        request.validate()?;

        // length(min) no atrapa un CNPJ de puros espacios
        validate_not_empty(&request.cnpj)
            .map_err(|_| bad_request_error("El CNPJ es requerido"))?;

        if self.repository.cnpj_exists(&request.cnpj).await? {
            return Err(conflict_error("Subsidiary", "cnpj", &request.cnpj));
        }

        let subsidiary = self
            .repository
            .create(request.name, request.cnpj, request.address)
            .await?;

        Ok(ApiResponse::success_with_message(
            SubsidiaryResponse::from(subsidiary),
            "Sucursal creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<SubsidiaryResponse> {
        let subsidiary = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Subsidiary", &id.to_string()))?;

        Ok(SubsidiaryResponse::from(subsidiary))
    }

    pub async fn list(&self) -> AppResult<Vec<SubsidiaryResponse>> {
        let subsidiaries = self.repository.list_all().await?;

        Ok(subsidiaries
            .into_iter()
            .map(SubsidiaryResponse::from)
            .collect())
    }
}

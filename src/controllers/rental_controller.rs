//! Controller de locaciones
//!
//! Orquesta el flujo de reserva: normalizar fechas, validar con el
//! validador puro (inyectando la fecha de hoy), verificar referencias y
//! recién entonces reservar dentro de la transacción del repositorio.
//! La consulta de disponibilidad queda expuesta aparte y es solo
//! consultiva: no valida fechas ni reserva nada.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::client_dto::ApiResponse;
use crate::dto::rental_dto::{
    AvailabilityQuery, AvailabilityResponse, CreateRentalRequest, RentalResponse,
    StartRentalRequest,
};
use crate::repositories::car_category_repository::CarCategoryRepository;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::repositories::subsidiary_repository::SubsidiaryRepository;
use crate::services::availability_service::AvailabilityService;
use crate::services::rental_validation::validate_rental_dates;
use crate::utils::errors::{bad_request_error, not_found_error, AppError, AppResult};
use crate::utils::validation::parse_optional_date;

pub struct RentalController {
    repository: RentalRepository,
    availability: AvailabilityService,
    clients: ClientRepository,
    categories: CarCategoryRepository,
    subsidiaries: SubsidiaryRepository,
}

impl RentalController {
    pub fn new(pool: PgPool) -> Self {
        let cars = Arc::new(CarRepository::new(pool.clone()));
        let rentals = Arc::new(RentalRepository::new(pool.clone()));

        Self {
            availability: AvailabilityService::new(cars, rentals),
            repository: RentalRepository::new(pool.clone()),
            clients: ClientRepository::new(pool.clone()),
            categories: CarCategoryRepository::new(pool.clone()),
            subsidiaries: SubsidiaryRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRentalRequest,
    ) -> AppResult<ApiResponse<RentalResponse>> {
        // Normalizar fechas: ausente y vacío son "en blanco"; un string
        // presente pero no parseable se rechaza acá, antes de validar
        let start_date = parse_optional_date(request.start_date.as_deref())
            .map_err(|_| bad_request_error("Formato de fecha de inicio inválido, use YYYY-MM-DD"))?;
        let end_date = parse_optional_date(request.end_date.as_deref())
            .map_err(|_| bad_request_error("Formato de fecha de fin inválido, use YYYY-MM-DD"))?;

        let today = chrono::Utc::now().date_naive();
        let errors = validate_rental_dates(start_date, end_date, today);
        if !errors.is_empty() {
            return Err(AppError::InvalidRentalDates(errors));
        }

        // El set vacío garantiza ambas fechas presentes
        let (Some(start), Some(end)) = (start_date, end_date) else {
            return Err(AppError::Internal(
                "validated rental dates missing".to_string(),
            ));
        };

        // Verificar referencias antes de decidir nada
        self.clients
            .find_by_id(request.client_id)
            .await?
            .ok_or_else(|| not_found_error("Client", &request.client_id.to_string()))?;
        self.categories
            .find_by_id(request.car_category_id)
            .await?
            .ok_or_else(|| not_found_error("CarCategory", &request.car_category_id.to_string()))?;
        self.subsidiaries
            .find_by_id(request.subsidiary_id)
            .await?
            .ok_or_else(|| not_found_error("Subsidiary", &request.subsidiary_id.to_string()))?;

        let rental = self
            .repository
            .create_booked(
                request.client_id,
                request.car_category_id,
                request.subsidiary_id,
                start,
                end,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            RentalResponse::from(rental),
            "Locación reservada exitosamente".to_string(),
        ))
    }

    /// Consulta de disponibilidad. Resultado consultivo: la reserva
    /// vuelve a contar dentro de su propia transacción.
    pub async fn check_availability(
        &self,
        query: AvailabilityQuery,
    ) -> AppResult<AvailabilityResponse> {
        self.categories
            .find_by_id(query.car_category_id)
            .await?
            .ok_or_else(|| not_found_error("CarCategory", &query.car_category_id.to_string()))?;
        self.subsidiaries
            .find_by_id(query.subsidiary_id)
            .await?
            .ok_or_else(|| not_found_error("Subsidiary", &query.subsidiary_id.to_string()))?;

        let available = self
            .availability
            .is_available(query.car_category_id, query.subsidiary_id, query.start_date)
            .await?;

        Ok(AvailabilityResponse {
            car_category_id: query.car_category_id,
            subsidiary_id: query.subsidiary_id,
            start_date: query.start_date,
            available,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<RentalResponse> {
        let rental = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Rental", &id.to_string()))?;

        Ok(RentalResponse::from(rental))
    }

    pub async fn list(&self) -> AppResult<Vec<RentalResponse>> {
        let rentals = self.repository.list_all().await?;

        Ok(rentals.into_iter().map(RentalResponse::from).collect())
    }

    pub async fn start(
        &self,
        id: Uuid,
        request: StartRentalRequest,
    ) -> AppResult<ApiResponse<RentalResponse>> {
        let rental = self.repository.start_rental(id, request.car_id).await?;

        Ok(ApiResponse::success_with_message(
            RentalResponse::from(rental),
            "Locación iniciada exitosamente".to_string(),
        ))
    }
}

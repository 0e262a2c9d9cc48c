use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::rental::{Rental, RentalStatus};

// Request para reservar una locación.
// Las fechas llegan como string opcional: ausente y vacío son ambos
// "en blanco" y los distingue la capa de validación, no el parser JSON.
#[derive(Debug, Deserialize)]
pub struct CreateRentalRequest {
    pub client_id: Uuid,
    pub car_category_id: Uuid,
    pub subsidiary_id: Uuid,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// Request para iniciar una locación programada
#[derive(Debug, Deserialize)]
pub struct StartRentalRequest {
    pub car_id: Uuid,
}

// Query de disponibilidad
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub car_category_id: Uuid,
    pub subsidiary_id: Uuid,
    pub start_date: NaiveDate,
}

// Response de disponibilidad
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub car_category_id: Uuid,
    pub subsidiary_id: Uuid,
    pub start_date: NaiveDate,
    pub available: bool,
}

// Response de locación
#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: Uuid,
    pub client_id: Uuid,
    pub car_category_id: Uuid,
    pub subsidiary_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RentalStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            id: rental.id,
            client_id: rental.client_id,
            car_category_id: rental.car_category_id,
            subsidiary_id: rental.subsidiary_id,
            start_date: rental.start_date,
            end_date: rental.end_date,
            status: rental.status,
            created_at: rental.created_at,
        }
    }
}

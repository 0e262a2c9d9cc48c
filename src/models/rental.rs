//! Modelo de Rental
//!
//! Este módulo contiene el struct Rental, su enum de estado y la tabla
//! de asignación rental-coche. Una locación referencia cliente,
//! categoría y sucursal; el coche concreto se asigna recién al iniciar.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una locación.
///
/// Los discriminantes vienen del sistema original (0 y 5) y se conservan
/// para compatibilidad con los datos existentes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Scheduled = 0,
    InProgress = 5,
}

impl Default for RentalStatus {
    fn default() -> Self {
        RentalStatus::Scheduled
    }
}

/// Rental principal - mapea exactamente a la tabla rentals
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rental {
    pub id: Uuid,
    pub client_id: Uuid,
    pub car_category_id: Uuid,
    pub subsidiary_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RentalStatus,
    pub created_at: DateTime<Utc>,
}

/// Asignación de un coche concreto a una locación en curso.
/// Mapea exactamente a la tabla car_rentals.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CarRental {
    pub id: Uuid,
    pub rental_id: Uuid,
    pub car_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_is_scheduled() {
        assert_eq!(RentalStatus::default(), RentalStatus::Scheduled);
    }

    #[test]
    fn test_status_discriminants_match_legacy_data() {
        assert_eq!(RentalStatus::Scheduled as i32, 0);
        assert_eq!(RentalStatus::InProgress as i32, 5);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&RentalStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }
}

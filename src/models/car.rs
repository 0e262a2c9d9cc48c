//! Modelo de Car
//!
//! Este módulo contiene el struct Car que mapea exactamente a la tabla
//! cars. La categoría no se guarda aquí: se resuelve vía car_model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Car principal - mapea exactamente a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub car_model_id: Uuid,
    pub subsidiary_id: Uuid,
    pub license_plate: String,
    pub color: String,
    pub mileage: i32,
    pub created_at: DateTime<Utc>,
}

//! Modelo de CarModel
//!
//! El modelo lleva la asociación con la categoría; los coches heredan
//! su categoría a través del modelo, nunca la guardan directamente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// CarModel principal - mapea exactamente a la tabla car_models
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CarModel {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub manufacturer_id: Uuid,
    pub car_category_id: Uuid,
    pub fuel_type: String,
    pub motorization: String,
    pub created_at: DateTime<Utc>,
}

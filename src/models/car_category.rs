//! Modelo de CarCategory
//!
//! Categorías de alquiler con sus tarifas. Los importes se almacenan
//! como `Decimal` - este sistema no calcula precios, solo los guarda.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// CarCategory principal - mapea exactamente a la tabla car_categories
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CarCategory {
    pub id: Uuid,
    pub name: String,
    pub daily_rate: Decimal,
    pub car_insurance: Decimal,
    pub third_party_insurance: Decimal,
    pub created_at: DateTime<Utc>,
}

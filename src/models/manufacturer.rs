//! Modelo de Manufacturer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Manufacturer - mapea exactamente a la tabla manufacturers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Manufacturer {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

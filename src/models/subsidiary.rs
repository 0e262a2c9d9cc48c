//! Modelo de Subsidiary
//!
//! Sucursales con su propia flota de coches. El CNPJ se guarda como
//! string opaco, sin lógica de formato.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Subsidiary principal - mapea exactamente a la tabla subsidiaries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subsidiary {
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

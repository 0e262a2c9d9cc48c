use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::subsidiary::Subsidiary;

// Request para crear una sucursal
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSubsidiaryRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    // CNPJ opaco: presencia sí, formato no
    #[validate(length(min = 1, max = 30))]
    pub cnpj: String,

    #[validate(length(min = 1, max = 500))]
    pub address: String,
}

// Response de sucursal
#[derive(Debug, Serialize)]
pub struct SubsidiaryResponse {
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<Subsidiary> for SubsidiaryResponse {
    fn from(subsidiary: Subsidiary) -> Self {
        Self {
            id: subsidiary.id,
            name: subsidiary.name,
            cnpj: subsidiary.cnpj,
            address: subsidiary.address,
            created_at: subsidiary.created_at,
        }
    }
}

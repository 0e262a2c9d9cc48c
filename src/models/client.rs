//! Modelo de Client
//!
//! Este módulo contiene el struct Client que mapea exactamente
//! a la tabla clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Client principal - mapea exactamente a la tabla clients
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub document: String,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Descripción corta para listados: "nombre - documento"
    pub fn description(&self) -> String {
        format!("{} - {}", self.name, self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_format() {
        let client = Client {
            id: Uuid::new_v4(),
            name: "Fulano Sicrano".to_string(),
            email: "fulano@test.com".to_string(),
            document: "743.341.870-99".to_string(),
            created_at: Utc::now(),
        };

        assert_eq!(client.description(), "Fulano Sicrano - 743.341.870-99");
    }
}

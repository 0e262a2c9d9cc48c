//! Repositorio de clientes

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::client::Client;
use crate::utils::errors::AppResult;

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: String, email: String, document: String) -> AppResult<Client> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (id, name, email, document, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(document)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    pub async fn document_exists(&self, document: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE document = $1)")
                .bind(document)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }
}

//! Repositorio de sucursales

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::subsidiary::Subsidiary;
use crate::utils::errors::AppResult;

pub struct SubsidiaryRepository {
    pool: PgPool,
}

impl SubsidiaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: String, cnpj: String, address: String) -> AppResult<Subsidiary> {
        let subsidiary = sqlx::query_as::<_, Subsidiary>(
            r#"
            INSERT INTO subsidiaries (id, name, cnpj, address, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(cnpj)
        .bind(address)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(subsidiary)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subsidiary>> {
        let subsidiary = sqlx::query_as::<_, Subsidiary>("SELECT * FROM subsidiaries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(subsidiary)
    }

    pub async fn cnpj_exists(&self, cnpj: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM subsidiaries WHERE cnpj = $1)")
                .bind(cnpj)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Subsidiary>> {
        let subsidiaries =
            sqlx::query_as::<_, Subsidiary>("SELECT * FROM subsidiaries ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(subsidiaries)
    }
}

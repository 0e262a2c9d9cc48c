//! Repositorio de fabricantes

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::manufacturer::Manufacturer;
use crate::utils::errors::AppResult;

pub struct ManufacturerRepository {
    pool: PgPool,
}

impl ManufacturerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: String) -> AppResult<Manufacturer> {
        let manufacturer = sqlx::query_as::<_, Manufacturer>(
            r#"
            INSERT INTO manufacturers (id, name, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(manufacturer)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Manufacturer>> {
        let manufacturer =
            sqlx::query_as::<_, Manufacturer>("SELECT * FROM manufacturers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(manufacturer)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Manufacturer>> {
        let manufacturers =
            sqlx::query_as::<_, Manufacturer>("SELECT * FROM manufacturers ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(manufacturers)
    }
}

//! Repositorio de modelos de coche

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::car_model::CarModel;
use crate::utils::errors::AppResult;

pub struct CarModelRepository {
    pool: PgPool,
}

impl CarModelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        year: i32,
        manufacturer_id: Uuid,
        car_category_id: Uuid,
        fuel_type: String,
        motorization: String,
    ) -> AppResult<CarModel> {
        let model = sqlx::query_as::<_, CarModel>(
            r#"
            INSERT INTO car_models (id, name, year, manufacturer_id, car_category_id, fuel_type, motorization, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(year)
        .bind(manufacturer_id)
        .bind(car_category_id)
        .bind(fuel_type)
        .bind(motorization)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(model)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CarModel>> {
        let model = sqlx::query_as::<_, CarModel>("SELECT * FROM car_models WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(model)
    }

    pub async fn list_all(&self) -> AppResult<Vec<CarModel>> {
        let models = sqlx::query_as::<_, CarModel>("SELECT * FROM car_models ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(models)
    }
}

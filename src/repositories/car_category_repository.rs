//! Repositorio de categorías de coche

use sqlx::PgPool;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::car_category::CarCategory;
use crate::utils::errors::AppResult;

pub struct CarCategoryRepository {
    pool: PgPool,
}

impl CarCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        daily_rate: Decimal,
        car_insurance: Decimal,
        third_party_insurance: Decimal,
    ) -> AppResult<CarCategory> {
        let category = sqlx::query_as::<_, CarCategory>(
            r#"
            INSERT INTO car_categories (id, name, daily_rate, car_insurance, third_party_insurance, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(daily_rate)
        .bind(car_insurance)
        .bind(third_party_insurance)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CarCategory>> {
        let category = sqlx::query_as::<_, CarCategory>("SELECT * FROM car_categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    pub async fn list_all(&self) -> AppResult<Vec<CarCategory>> {
        let categories =
            sqlx::query_as::<_, CarCategory>("SELECT * FROM car_categories ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(categories)
    }
}

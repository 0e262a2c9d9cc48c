//! Repositorio de coches
//!
//! Acceso a la tabla cars. La categoría de un coche nunca se guarda en la
//! fila: se resuelve con un join a car_models, por eso el conteo de flota
//! por categoría siempre pasa por el modelo.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::car::Car;
use crate::services::availability_service::CarInventory;
use crate::utils::errors::{AppError, AppResult};

/// Coches de una categoría (vía modelo) en una sucursal.
/// Compartida con la transacción de reserva, que recuenta bajo lock.
pub(crate) const COUNT_CARS_BY_CATEGORY_AND_SUBSIDIARY: &str = r#"
    SELECT COUNT(*)
    FROM cars c
    JOIN car_models cm ON cm.id = c.car_model_id
    WHERE cm.car_category_id = $1
      AND c.subsidiary_id = $2
"#;

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        car_model_id: Uuid,
        subsidiary_id: Uuid,
        license_plate: String,
        color: String,
        mileage: i32,
    ) -> AppResult<Car> {
        let id = Uuid::new_v4();

        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (id, car_model_id, subsidiary_id, license_plate, color, mileage, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(car_model_id)
        .bind(subsidiary_id)
        .bind(license_plate)
        .bind(color)
        .bind(mileage)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    pub async fn find_by_subsidiary(&self, subsidiary_id: Uuid) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE subsidiary_id = $1 ORDER BY created_at DESC",
        )
        .bind(subsidiary_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn license_plate_exists(&self, license_plate: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM cars WHERE license_plate = $1)")
                .bind(license_plate)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        license_plate: Option<String>,
        color: Option<String>,
        mileage: Option<i32>,
    ) -> AppResult<Car> {
        // Obtener coche actual
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coche no encontrado".to_string()))?;

        let car = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET license_plate = $2, color = $3, mileage = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(license_plate.unwrap_or(current.license_plate))
        .bind(color.unwrap_or(current.color))
        .bind(mileage.unwrap_or(current.mileage))
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Coche no encontrado".to_string()))?;

        sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

}

#[async_trait]
impl CarInventory for CarRepository {
    async fn count_by_category_and_subsidiary(
        &self,
        car_category_id: Uuid,
        subsidiary_id: Uuid,
    ) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as(COUNT_CARS_BY_CATEGORY_AND_SUBSIDIARY)
            .bind(car_category_id)
            .bind(subsidiary_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}

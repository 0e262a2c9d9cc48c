//! Repositorio de locaciones
//!
//! Persistencia de la tabla rentals y la consulta de superposición que
//! alimenta al motor de disponibilidad. La reserva definitiva
//! (`create_booked`) recuenta flota y agenda dentro de una transacción
//! serializada por (categoría, sucursal) para que dos clientes no puedan
//! quedarse ambos con el último coche.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::rental::{CarRental, Rental, RentalStatus};
use crate::repositories::car_repository::COUNT_CARS_BY_CATEGORY_AND_SUBSIDIARY;
use crate::services::availability_service::{has_free_car, RentalSchedule};
use crate::utils::errors::{AppError, AppResult};

/// Locaciones de la misma categoría y sucursal cuyo intervalo contiene
/// estrictamente el instante consultado.
///
/// El predicado es deliberadamente asimétrico (`start < $3 AND end > $3`):
/// solo mira el inicio de la locación candidata, no su fin ni el caso en
/// que la candidata contenga por completo a una existente. Regla de
/// producto heredada; no "corregir" sin decisión de producto.
const COUNT_OVERLAPPING_RENTALS: &str = r#"
    SELECT COUNT(*)
    FROM rentals
    WHERE car_category_id = $1
      AND subsidiary_id = $2
      AND start_date < $3
      AND end_date > $3
"#;

const INSERT_RENTAL: &str = r#"
    INSERT INTO rentals (id, client_id, car_category_id, subsidiary_id, start_date, end_date, status, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    RETURNING *
"#;

pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reservar: recontar disponibilidad y persistir la locación en una
    /// única transacción.
    ///
    /// El advisory lock serializa las reservas concurrentes del mismo par
    /// (categoría, sucursal); pares distintos no se bloquean entre sí.
    /// Si al recontar ya no queda coche libre, la transacción se descarta
    /// y se responde conflicto.
    pub async fn create_booked(
        &self,
        client_id: Uuid,
        car_category_id: Uuid,
        subsidiary_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Rental> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text || ':' || $2::text))")
            .bind(car_category_id)
            .bind(subsidiary_id)
            .execute(&mut *tx)
            .await?;

        let (total_cars,): (i64,) = sqlx::query_as(COUNT_CARS_BY_CATEGORY_AND_SUBSIDIARY)
            .bind(car_category_id)
            .bind(subsidiary_id)
            .fetch_one(&mut *tx)
            .await?;

        let (overlapping,): (i64,) = sqlx::query_as(COUNT_OVERLAPPING_RENTALS)
            .bind(car_category_id)
            .bind(subsidiary_id)
            .bind(start_date)
            .fetch_one(&mut *tx)
            .await?;

        if !has_free_car(total_cars, overlapping) {
            log::warn!(
                "Reserva rechazada: categoría={} sucursal={} fecha={} ({} coches, {} ocupados)",
                car_category_id,
                subsidiary_id,
                start_date,
                total_cars,
                overlapping
            );
            return Err(AppError::Conflict(
                "No hay coches disponibles de esa categoría en la sucursal para la fecha indicada"
                    .to_string(),
            ));
        }

        let rental = sqlx::query_as::<_, Rental>(INSERT_RENTAL)
            .bind(Uuid::new_v4())
            .bind(client_id)
            .bind(car_category_id)
            .bind(subsidiary_id)
            .bind(start_date)
            .bind(end_date)
            .bind(RentalStatus::Scheduled)
            .bind(chrono::Utc::now())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        log::info!("Locación {} reservada ({} -> {})", rental.id, start_date, end_date);
        Ok(rental)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rental>> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>("SELECT * FROM rentals ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    /// Iniciar una locación programada asignándole un coche concreto.
    ///
    /// El coche debe pertenecer a la sucursal de la locación y a su
    /// categoría (resuelta vía modelo); la verificación y los dos writes
    /// van en la misma transacción.
    pub async fn start_rental(&self, rental_id: Uuid, car_id: Uuid) -> AppResult<Rental> {
        let mut tx = self.pool.begin().await?;

        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1 FOR UPDATE")
            .bind(rental_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Locación no encontrada".to_string()))?;

        if rental.status != RentalStatus::Scheduled {
            return Err(AppError::Conflict(
                "Solo una locación programada puede iniciarse".to_string(),
            ));
        }

        let assignable: Option<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT c.id
            FROM cars c
            JOIN car_models cm ON cm.id = c.car_model_id
            WHERE c.id = $1
              AND cm.car_category_id = $2
              AND c.subsidiary_id = $3
            "#,
        )
        .bind(car_id)
        .bind(rental.car_category_id)
        .bind(rental.subsidiary_id)
        .fetch_optional(&mut *tx)
        .await?;

        if assignable.is_none() {
            return Err(AppError::Conflict(
                "El coche no pertenece a la categoría o sucursal de la locación".to_string(),
            ));
        }

        sqlx::query_as::<_, CarRental>(
            r#"
            INSERT INTO car_rentals (id, rental_id, car_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(rental_id)
        .bind(car_id)
        .bind(chrono::Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let rental = sqlx::query_as::<_, Rental>(
            "UPDATE rentals SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(rental_id)
        .bind(RentalStatus::InProgress)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        log::info!("Locación {} iniciada con coche {}", rental_id, car_id);
        Ok(rental)
    }
}

#[async_trait]
impl RentalSchedule for RentalRepository {
    async fn count_overlapping(
        &self,
        car_category_id: Uuid,
        subsidiary_id: Uuid,
        at: NaiveDate,
    ) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as(COUNT_OVERLAPPING_RENTALS)
            .bind(car_category_id)
            .bind(subsidiary_id)
            .bind(at)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }
}

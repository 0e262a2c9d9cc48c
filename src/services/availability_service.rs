//! Motor de disponibilidad
//!
//! Decide si una reserva candidata (categoría, sucursal, fecha de inicio)
//! puede satisfacerse con la flota actual, comparando el total de coches
//! contra las locaciones que se superponen. Solo lee y decide: nunca
//! reserva ni bloquea un coche, el resultado es consultivo. La escritura
//! definitiva debe recontar dentro de la transacción de reserva (ver
//! `RentalRepository::create_booked`).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::utils::errors::AppResult;

/// Consulta de flota: cuántos coches de una categoría hay en una sucursal.
/// La categoría de un coche es transitiva a través de su modelo.
#[async_trait]
pub trait CarInventory: Send + Sync {
    async fn count_by_category_and_subsidiary(
        &self,
        car_category_id: Uuid,
        subsidiary_id: Uuid,
    ) -> AppResult<i64>;
}

/// Consulta de agenda: cuántas locaciones de una categoría y sucursal
/// cubren un instante dado.
///
/// El predicado es `start_date < at AND end_date > at`: solo detecta
/// locaciones cuyo intervalo contiene estrictamente el instante
/// consultado. No es una prueba de superposición general de intervalos.
#[async_trait]
pub trait RentalSchedule: Send + Sync {
    async fn count_overlapping(
        &self,
        car_category_id: Uuid,
        subsidiary_id: Uuid,
        at: NaiveDate,
    ) -> AppResult<i64>;
}

/// Decisión pura: queda al menos un coche libre.
/// Un saldo negativo cuenta como no disponible, no como error.
pub fn has_free_car(total_cars: i64, overlapping_rentals: i64) -> bool {
    (total_cars - overlapping_rentals) > 0
}

/// Servicio de disponibilidad sobre las dos consultas de almacenamiento
pub struct AvailabilityService {
    cars: Arc<dyn CarInventory>,
    rentals: Arc<dyn RentalSchedule>,
}

impl AvailabilityService {
    pub fn new(cars: Arc<dyn CarInventory>, rentals: Arc<dyn RentalSchedule>) -> Self {
        Self { cars, rentals }
    }

    /// Decidir si hay un coche libre de la categoría en la sucursal para
    /// la fecha de inicio dada.
    pub async fn is_available(
        &self,
        car_category_id: Uuid,
        subsidiary_id: Uuid,
        start_date: NaiveDate,
    ) -> AppResult<bool> {
        let total_cars = self
            .cars
            .count_by_category_and_subsidiary(car_category_id, subsidiary_id)
            .await?;

        // Sin flota no hay nada que consultar en la agenda
        if total_cars == 0 {
            return Ok(false);
        }

        let overlapping = self
            .rentals
            .count_overlapping(car_category_id, subsidiary_id, start_date)
            .await?;

        log::debug!(
            "Disponibilidad categoría={} sucursal={} fecha={}: {} coches, {} locaciones superpuestas",
            car_category_id,
            subsidiary_id,
            start_date,
            total_cars,
            overlapping
        );

        Ok(has_free_car(total_cars, overlapping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fakes en memoria ────────────────────────────────────────────

    /// Flota falsa: coches como pares (categoría, sucursal)
    struct FakeFleet {
        cars: Vec<(Uuid, Uuid)>,
    }

    #[async_trait]
    impl CarInventory for FakeFleet {
        async fn count_by_category_and_subsidiary(
            &self,
            car_category_id: Uuid,
            subsidiary_id: Uuid,
        ) -> AppResult<i64> {
            let count = self
                .cars
                .iter()
                .filter(|(cat, sub)| *cat == car_category_id && *sub == subsidiary_id)
                .count();
            Ok(count as i64)
        }
    }

    /// Agenda falsa: locaciones como (categoría, sucursal, inicio, fin)
    struct FakeSchedule {
        rentals: Vec<(Uuid, Uuid, NaiveDate, NaiveDate)>,
    }

    #[async_trait]
    impl RentalSchedule for FakeSchedule {
        async fn count_overlapping(
            &self,
            car_category_id: Uuid,
            subsidiary_id: Uuid,
            at: NaiveDate,
        ) -> AppResult<i64> {
            let count = self
                .rentals
                .iter()
                .filter(|(cat, sub, start, end)| {
                    *cat == car_category_id && *sub == subsidiary_id && *start < at && *end > at
                })
                .count();
            Ok(count as i64)
        }
    }

    fn service(
        cars: Vec<(Uuid, Uuid)>,
        rentals: Vec<(Uuid, Uuid, NaiveDate, NaiveDate)>,
    ) -> AvailabilityService {
        AvailabilityService::new(
            Arc::new(FakeFleet { cars }),
            Arc::new(FakeSchedule { rentals }),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── has_free_car ────────────────────────────────────────────────

    #[test]
    fn has_free_car_basic() {
        assert!(has_free_car(1, 0));
        assert!(has_free_car(3, 2));
        assert!(!has_free_car(1, 1));
        assert!(!has_free_car(0, 0));
    }

    #[test]
    fn has_free_car_negative_balance_is_unavailable() {
        // La agenda puede superar la flota (datos históricos); no es un error
        assert!(!has_free_car(1, 2));
    }

    // ── is_available ────────────────────────────────────────────────

    #[tokio::test]
    async fn unavailable_when_subsidiary_has_no_cars() {
        let category = Uuid::new_v4();
        let subsidiary = Uuid::new_v4();
        let svc = service(vec![], vec![]);

        let result = svc
            .is_available(category, subsidiary, date(2019, 12, 10))
            .await
            .unwrap();

        assert!(!result);
    }

    #[tokio::test]
    async fn available_when_subsidiary_has_a_free_car() {
        let category = Uuid::new_v4();
        let subsidiary = Uuid::new_v4();
        let svc = service(vec![(category, subsidiary)], vec![]);

        let result = svc
            .is_available(category, subsidiary, date(2019, 12, 10))
            .await
            .unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn unavailable_when_only_other_category_present() {
        let category = Uuid::new_v4();
        let other_category = Uuid::new_v4();
        let subsidiary = Uuid::new_v4();
        let svc = service(vec![(category, subsidiary)], vec![]);

        let result = svc
            .is_available(other_category, subsidiary, date(2019, 12, 10))
            .await
            .unwrap();

        assert!(!result);
    }

    #[tokio::test]
    async fn unavailable_when_only_other_subsidiary_has_cars() {
        let category = Uuid::new_v4();
        let subsidiary = Uuid::new_v4();
        let other_subsidiary = Uuid::new_v4();
        let svc = service(vec![(category, other_subsidiary)], vec![]);

        let result = svc
            .is_available(category, subsidiary, date(2019, 12, 10))
            .await
            .unwrap();

        assert!(!result);
    }

    #[tokio::test]
    async fn unavailable_when_scheduled_rental_covers_start_date() {
        let category = Uuid::new_v4();
        let subsidiary = Uuid::new_v4();
        let svc = service(
            vec![(category, subsidiary)],
            vec![(category, subsidiary, date(2019, 12, 1), date(2019, 12, 5))],
        );

        let result = svc
            .is_available(category, subsidiary, date(2019, 12, 2))
            .await
            .unwrap();

        assert!(!result);
    }

    #[tokio::test]
    async fn rental_starting_exactly_at_candidate_start_does_not_block() {
        // El predicado es estricto: start < at, no start <= at
        let category = Uuid::new_v4();
        let subsidiary = Uuid::new_v4();
        let svc = service(
            vec![(category, subsidiary)],
            vec![(category, subsidiary, date(2019, 12, 2), date(2019, 12, 5))],
        );

        let result = svc
            .is_available(category, subsidiary, date(2019, 12, 2))
            .await
            .unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn rental_ending_exactly_at_candidate_start_does_not_block() {
        let category = Uuid::new_v4();
        let subsidiary = Uuid::new_v4();
        let svc = service(
            vec![(category, subsidiary)],
            vec![(category, subsidiary, date(2019, 12, 1), date(2019, 12, 2))],
        );

        let result = svc
            .is_available(category, subsidiary, date(2019, 12, 2))
            .await
            .unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn overlapping_rental_in_other_subsidiary_does_not_block() {
        let category = Uuid::new_v4();
        let subsidiary = Uuid::new_v4();
        let other_subsidiary = Uuid::new_v4();
        let svc = service(
            vec![(category, subsidiary)],
            vec![(
                category,
                other_subsidiary,
                date(2019, 12, 1),
                date(2019, 12, 5),
            )],
        );

        let result = svc
            .is_available(category, subsidiary, date(2019, 12, 2))
            .await
            .unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn second_free_car_keeps_category_available() {
        let category = Uuid::new_v4();
        let subsidiary = Uuid::new_v4();
        let svc = service(
            vec![(category, subsidiary), (category, subsidiary)],
            vec![(category, subsidiary, date(2019, 12, 1), date(2019, 12, 5))],
        );

        let result = svc
            .is_available(category, subsidiary, date(2019, 12, 2))
            .await
            .unwrap();

        assert!(result);
    }

    #[tokio::test]
    async fn idempotent_over_unchanged_store() {
        let category = Uuid::new_v4();
        let subsidiary = Uuid::new_v4();
        let svc = service(
            vec![(category, subsidiary)],
            vec![(category, subsidiary, date(2019, 12, 1), date(2019, 12, 5))],
        );

        let first = svc
            .is_available(category, subsidiary, date(2019, 12, 2))
            .await
            .unwrap();
        let second = svc
            .is_available(category, subsidiary, date(2019, 12, 2))
            .await
            .unwrap();

        assert_eq!(first, second);
    }
}

//! Validación de fechas de locación
//!
//! Reglas temporales de una locación candidata, independientes del estado
//! de la flota. Función pura: la fecha "hoy" se inyecta como parámetro en
//! lugar de leer el reloj, así el resultado es determinista.
//!
//! Los errores se acumulan por campo con un código de razón; el texto
//! localizado se resuelve en la frontera HTTP, nunca acá.

use chrono::NaiveDate;
use serde::Serialize;

/// Campo de fecha de la locación al que aplica un error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalDateField {
    StartDate,
    EndDate,
}

impl RentalDateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalDateField::StartDate => "start_date",
            RentalDateField::EndDate => "end_date",
        }
    }
}

/// Razón por la que un campo de fecha es inválido
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalDateIssue {
    /// Campo ausente o vacío
    Blank,
    /// Fecha de fin menor o igual a la de inicio
    NotAfterStartDate,
    /// Fecha de inicio anterior a hoy (hoy mismo es válido)
    BeforeToday,
}

impl RentalDateIssue {
    pub fn code(&self) -> &'static str {
        match self {
            RentalDateIssue::Blank => "blank",
            RentalDateIssue::NotAfterStartDate => "not_after_start_date",
            RentalDateIssue::BeforeToday => "before_today",
        }
    }

    /// Mensaje para el usuario final
    pub fn message(&self) -> &'static str {
        match self {
            RentalDateIssue::Blank => "no puede quedar en blanco",
            RentalDateIssue::NotAfterStartDate => "debe ser posterior a la fecha de inicio",
            RentalDateIssue::BeforeToday => "no puede ser anterior a la fecha de hoy",
        }
    }
}

/// Error de validación asociado a un campo concreto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RentalDateError {
    pub field: RentalDateField,
    pub issue: RentalDateIssue,
}

/// Validar las fechas de una locación candidata.
///
/// Las cuatro reglas son independientes y todas las aplicables se
/// reportan en la misma llamada; la comparación fin-contra-inicio solo
/// corre cuando ambas fechas están presentes.
pub fn validate_rental_dates(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<RentalDateError> {
    let mut errors = Vec::new();

    if start_date.is_none() {
        errors.push(RentalDateError {
            field: RentalDateField::StartDate,
            issue: RentalDateIssue::Blank,
        });
    }

    if end_date.is_none() {
        errors.push(RentalDateError {
            field: RentalDateField::EndDate,
            issue: RentalDateIssue::Blank,
        });
    }

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end <= start {
            errors.push(RentalDateError {
                field: RentalDateField::EndDate,
                issue: RentalDateIssue::NotAfterStartDate,
            });
        }
    }

    if let Some(start) = start_date {
        if start < today {
            errors.push(RentalDateError {
                field: RentalDateField::StartDate,
                issue: RentalDateIssue::BeforeToday,
            });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2019, 12, 1)
    }

    fn has_error(errors: &[RentalDateError], field: RentalDateField, issue: RentalDateIssue) -> bool {
        errors.iter().any(|e| e.field == field && e.issue == issue)
    }

    #[test]
    fn valid_rental_has_no_errors() {
        let errors = validate_rental_dates(
            Some(date(2019, 12, 2)),
            Some(date(2019, 12, 3)),
            today(),
        );

        assert!(errors.is_empty());
    }

    #[test]
    fn start_date_equal_to_today_is_allowed() {
        let errors = validate_rental_dates(
            Some(today()),
            Some(date(2019, 12, 5)),
            today(),
        );

        assert!(errors.is_empty());
    }

    #[test]
    fn end_date_less_than_start_date() {
        let errors = validate_rental_dates(
            Some(date(2019, 12, 9)),
            Some(date(2019, 12, 8)),
            today(),
        );

        assert!(has_error(
            &errors,
            RentalDateField::EndDate,
            RentalDateIssue::NotAfterStartDate
        ));
    }

    #[test]
    fn end_date_equal_to_start_date() {
        let errors = validate_rental_dates(
            Some(date(2019, 12, 9)),
            Some(date(2019, 12, 9)),
            today(),
        );

        assert!(has_error(
            &errors,
            RentalDateField::EndDate,
            RentalDateIssue::NotAfterStartDate
        ));
    }

    #[test]
    fn start_date_must_exist() {
        let errors = validate_rental_dates(None, Some(date(2019, 12, 10)), today());

        assert!(has_error(
            &errors,
            RentalDateField::StartDate,
            RentalDateIssue::Blank
        ));
    }

    #[test]
    fn end_date_must_exist() {
        let errors = validate_rental_dates(Some(date(2019, 12, 10)), None, today());

        assert!(has_error(
            &errors,
            RentalDateField::EndDate,
            RentalDateIssue::Blank
        ));
    }

    #[test]
    fn start_date_in_the_past() {
        let errors = validate_rental_dates(
            Some(date(2019, 11, 30)),
            Some(date(2019, 12, 5)),
            today(),
        );

        assert!(has_error(
            &errors,
            RentalDateField::StartDate,
            RentalDateIssue::BeforeToday
        ));
    }

    #[test]
    fn start_date_in_the_past_fires_without_end_date() {
        let errors = validate_rental_dates(Some(date(2019, 11, 30)), None, today());

        assert!(has_error(
            &errors,
            RentalDateField::StartDate,
            RentalDateIssue::BeforeToday
        ));
        assert!(has_error(
            &errors,
            RentalDateField::EndDate,
            RentalDateIssue::Blank
        ));
    }

    #[test]
    fn cross_field_check_skipped_when_a_date_is_blank() {
        let errors = validate_rental_dates(None, Some(date(2019, 12, 10)), today());

        assert!(!has_error(
            &errors,
            RentalDateField::EndDate,
            RentalDateIssue::NotAfterStartDate
        ));
    }

    #[test]
    fn all_applicable_errors_accumulate() {
        // Inicio en el pasado y fin anterior al inicio: ambos se reportan
        let errors = validate_rental_dates(
            Some(date(2019, 11, 20)),
            Some(date(2019, 11, 10)),
            today(),
        );

        assert_eq!(errors.len(), 2);
        assert!(has_error(
            &errors,
            RentalDateField::EndDate,
            RentalDateIssue::NotAfterStartDate
        ));
        assert!(has_error(
            &errors,
            RentalDateField::StartDate,
            RentalDateIssue::BeforeToday
        ));
    }

    #[test]
    fn both_dates_blank_reports_both() {
        let errors = validate_rental_dates(None, None, today());

        assert_eq!(errors.len(), 2);
        assert!(has_error(
            &errors,
            RentalDateField::StartDate,
            RentalDateIssue::Blank
        ));
        assert!(has_error(
            &errors,
            RentalDateField::EndDate,
            RentalDateIssue::Blank
        ));
    }

    #[test]
    fn validation_is_pure() {
        let start = Some(date(2019, 12, 2));
        let end = Some(date(2019, 12, 3));

        let first = validate_rental_dates(start, end, today());
        let second = validate_rental_dates(start, end, today());

        assert_eq!(first, second);
    }
}

//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::NaiveDate;
use serde::Serialize;
use validator::ValidationError;

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Normalizar un campo de fecha opcional del request.
///
/// "En blanco" cubre tanto el campo ausente como el string vacío (o solo
/// espacios): ambos se normalizan a `None` y nunca llegan al parser de
/// fechas. Un string presente pero no parseable sí es un error.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            validate_date(trimmed).map(Some)
        }
    }
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    // Formato básico: ABC1234 o similar
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_validate_date() {
        let valid_date = "2024-01-15";
        assert!(validate_date(valid_date).is_ok());

        let invalid_date = "2024/01/15";
        assert!(validate_date(invalid_date).is_err());
    }

    #[test]
    fn test_parse_optional_date_missing_is_blank() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
    }

    #[test]
    fn test_parse_optional_date_empty_is_blank() {
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert_eq!(parse_optional_date(Some("   ")).unwrap(), None);
    }

    #[test]
    fn test_parse_optional_date_valid() {
        let parsed = parse_optional_date(Some("2024-01-15")).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_parse_optional_date_garbage_is_error_not_blank() {
        assert!(parse_optional_date(Some("15/01/2024")).is_err());
        assert!(parse_optional_date(Some("no-es-fecha")).is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("algo").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(Decimal::new(30, 0)).is_ok());
        assert!(validate_positive(Decimal::ZERO).is_err());
        assert!(validate_positive(Decimal::new(-5, 0)).is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("ABC1234").is_ok());
        assert!(validate_license_plate("AB-123-CD").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
    }
}

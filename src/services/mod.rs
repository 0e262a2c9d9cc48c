//! Servicios del sistema
//!
//! Este módulo contiene la lógica de negocio central: la validación de
//! fechas de locación y el motor de disponibilidad. Ambos son
//! independientes y componibles; que las fechas sean válidas no implica
//! disponibilidad, y la consulta de disponibilidad no revalida fechas.

pub mod availability_service;
pub mod rental_validation;

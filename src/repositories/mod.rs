//! Repositorios de acceso a datos
//!
//! Un repositorio por agregado sobre el pool de PostgreSQL. Las consultas
//! de conteo que alimentan al motor de disponibilidad viven acá e
//! implementan los traits de `services::availability_service`.

pub mod car_category_repository;
pub mod car_model_repository;
pub mod car_repository;
pub mod client_repository;
pub mod manufacturer_repository;
pub mod rental_repository;
pub mod subsidiary_repository;

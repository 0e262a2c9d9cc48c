//! Controllers del sistema
//!
//! Orquestación por entidad entre los DTOs de la API y los repositorios.

pub mod car_category_controller;
pub mod car_controller;
pub mod car_model_controller;
pub mod client_controller;
pub mod rental_controller;
pub mod subsidiary_controller;

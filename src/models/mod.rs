//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod car;
pub mod car_category;
pub mod car_model;
pub mod client;
pub mod manufacturer;
pub mod rental;
pub mod subsidiary;

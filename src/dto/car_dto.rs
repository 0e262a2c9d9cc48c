use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::car::Car;

// Request para dar de alta un coche
#[derive(Debug, Deserialize)]
pub struct CreateCarRequest {
    pub car_model_id: Uuid,
    pub subsidiary_id: Uuid,
    pub license_plate: String,
    pub color: String,
    pub mileage: Option<i32>,
}

// Request para actualizar un coche
#[derive(Debug, Deserialize)]
pub struct UpdateCarRequest {
    pub license_plate: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
}

// Response de coche
#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: Uuid,
    pub car_model_id: Uuid,
    pub subsidiary_id: Uuid,
    pub license_plate: String,
    pub color: String,
    pub mileage: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            car_model_id: car.car_model_id,
            subsidiary_id: car.subsidiary_id,
            license_plate: car.license_plate,
            color: car.color,
            mileage: car.mileage,
            created_at: car.created_at,
        }
    }
}

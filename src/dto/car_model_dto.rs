use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::car_model::CarModel;
use crate::models::manufacturer::Manufacturer;

// Request para crear un fabricante
#[derive(Debug, Deserialize, Validate)]
pub struct CreateManufacturerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

// Response de fabricante
#[derive(Debug, Serialize)]
pub struct ManufacturerResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Manufacturer> for ManufacturerResponse {
    fn from(manufacturer: Manufacturer) -> Self {
        Self {
            id: manufacturer.id,
            name: manufacturer.name,
            created_at: manufacturer.created_at,
        }
    }
}

// Request para crear un modelo de coche
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarModelRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(range(min = 1950, max = 2100))]
    pub year: i32,

    pub manufacturer_id: Uuid,
    pub car_category_id: Uuid,

    #[validate(length(min = 1, max = 50))]
    pub fuel_type: String,

    #[validate(length(min = 1, max = 50))]
    pub motorization: String,
}

// Response de modelo de coche
#[derive(Debug, Serialize)]
pub struct CarModelResponse {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub manufacturer_id: Uuid,
    pub car_category_id: Uuid,
    pub fuel_type: String,
    pub motorization: String,
    pub created_at: DateTime<Utc>,
}

impl From<CarModel> for CarModelResponse {
    fn from(model: CarModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            year: model.year,
            manufacturer_id: model.manufacturer_id,
            car_category_id: model.car_category_id,
            fuel_type: model.fuel_type,
            motorization: model.motorization,
            created_at: model.created_at,
        }
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::car_category::CarCategory;

// Request para crear una categoría
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub daily_rate: Decimal,
    pub car_insurance: Decimal,
    pub third_party_insurance: Decimal,
}

// Response de categoría
#[derive(Debug, Serialize)]
pub struct CarCategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub daily_rate: Decimal,
    pub car_insurance: Decimal,
    pub third_party_insurance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<CarCategory> for CarCategoryResponse {
    fn from(category: CarCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            daily_rate: category.daily_rate,
            car_insurance: category.car_insurance,
            third_party_insurance: category.third_party_insurance,
            created_at: category.created_at,
        }
    }
}

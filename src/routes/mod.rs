pub mod car_category_routes;
pub mod car_model_routes;
pub mod car_routes;
pub mod client_routes;
pub mod rental_routes;
pub mod subsidiary_routes;

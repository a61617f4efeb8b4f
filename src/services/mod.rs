pub mod api_client;
pub mod booking_service;
pub mod distance_service;
pub mod pricing_service;
pub mod rental_service;
pub mod validation_service;

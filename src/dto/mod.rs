//! DTOs de la API HTTP

pub mod api_response;
pub mod charging_dto;
pub mod station_dto;
pub mod vehicle_dto;

pub use api_response::{ApiResponse, CreatedResponse};

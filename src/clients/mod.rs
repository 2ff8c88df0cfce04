//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for communicating with external APIs.

pub mod places_client;

pub use places_client::{GooglePlacesClient, PlaceSearchProvider};

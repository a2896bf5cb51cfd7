use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum OptimizerError {
    #[error("Invalid coordinate: lat = {lat}, lon = {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("No vehicles available to serve {deliveries} deliveries")]
    NoVehiclesAvailable { deliveries: usize },

    #[error("Delivery {id} has an invalid weight: {weight}")]
    InvalidWeight { id: String, weight: f64 },

    #[error("Vehicle {id} has an invalid capacity: {capacity}")]
    InvalidCapacity { id: String, capacity: f64 },

    #[error("Average speed must be strictly positive, got {0} km/h")]
    InvalidSpeed(f64),

    #[error("Invalid pricing parameters: {0}")]
    InvalidPricing(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

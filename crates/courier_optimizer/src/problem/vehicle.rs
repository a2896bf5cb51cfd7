use serde::Serialize;

use crate::error::OptimizerError;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: String,
    /// `None` means the vehicle has no load limit.
    capacity: Option<f64>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>) -> Self {
        Vehicle {
            id: id.into(),
            capacity: None,
        }
    }

    pub fn with_capacity(id: impl Into<String>, capacity: f64) -> Result<Self, OptimizerError> {
        let id = id.into();
        if capacity.is_nan() || capacity < 0.0 {
            return Err(OptimizerError::InvalidCapacity { id, capacity });
        }

        Ok(Vehicle {
            id,
            capacity: Some(capacity),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn capacity(&self) -> Option<f64> {
        self.capacity
    }

    /// Capacity as a load budget, infinite when unbounded.
    pub fn load_limit(&self) -> f64 {
        self.capacity.unwrap_or(f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_by_default() {
        let vehicle = Vehicle::new("truck-1");
        assert_eq!(vehicle.capacity(), None);
        assert_eq!(vehicle.load_limit(), f64::INFINITY);
    }

    #[test]
    fn test_rejects_negative_capacity() {
        assert_eq!(
            Vehicle::with_capacity("truck-1", -2.0),
            Err(OptimizerError::InvalidCapacity {
                id: "truck-1".to_owned(),
                capacity: -2.0
            })
        );
        assert!(Vehicle::with_capacity("truck-1", 0.0).is_ok());
    }
}

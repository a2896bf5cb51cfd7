use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::OptimizerError, problem::coordinate::Coordinate};

pub const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// A delivery handed over by the order collaborator. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryStop {
    id: String,
    coordinate: Coordinate,
    weight: f64,
    address: Option<String>,
    priority: Priority,
}

impl DeliveryStop {
    /// A stop with the default weight and priority.
    pub fn new(id: impl Into<String>, coordinate: Coordinate) -> Self {
        DeliveryStop {
            id: id.into(),
            coordinate,
            weight: DEFAULT_WEIGHT,
            address: None,
            priority: Priority::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

#[derive(Default)]
pub struct DeliveryStopBuilder {
    id: Option<String>,
    coordinate: Option<Coordinate>,
    weight: Option<f64>,
    address: Option<String>,
    priority: Option<Priority>,
}

impl DeliveryStopBuilder {
    pub fn set_id(&mut self, id: String) -> &mut DeliveryStopBuilder {
        self.id = Some(id);
        self
    }

    pub fn set_coordinate(&mut self, coordinate: Coordinate) -> &mut DeliveryStopBuilder {
        self.coordinate = Some(coordinate);
        self
    }

    pub fn set_weight(&mut self, weight: f64) -> &mut DeliveryStopBuilder {
        self.weight = Some(weight);
        self
    }

    pub fn set_address(&mut self, address: String) -> &mut DeliveryStopBuilder {
        self.address = Some(address);
        self
    }

    pub fn set_priority(&mut self, priority: Priority) -> &mut DeliveryStopBuilder {
        self.priority = Some(priority);
        self
    }

    pub fn build(self) -> Result<DeliveryStop, OptimizerError> {
        let id = self.id.ok_or(OptimizerError::MissingField("id"))?;
        let coordinate = self
            .coordinate
            .ok_or(OptimizerError::MissingField("coordinate"))?;
        coordinate.validate()?;

        let weight = self.weight.unwrap_or(DEFAULT_WEIGHT);
        if !weight.is_finite() || weight < 0.0 {
            return Err(OptimizerError::InvalidWeight { id, weight });
        }

        Ok(DeliveryStop {
            id,
            coordinate,
            weight,
            address: self.address,
            priority: self.priority.unwrap_or_default(),
        })
    }
}

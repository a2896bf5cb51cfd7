use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OptimizerError;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Kmh(f64);

impl Kmh {
    pub const CITY_AVERAGE: Kmh = Kmh(40.0);

    pub fn new(value: f64) -> Self {
        Kmh(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn validate(&self) -> Result<(), OptimizerError> {
        if self.0.is_finite() && self.0 > 0.0 {
            Ok(())
        } else {
            Err(OptimizerError::InvalidSpeed(self.0))
        }
    }
}

impl Default for Kmh {
    fn default() -> Self {
        Kmh::CITY_AVERAGE
    }
}

use jiff::civil::Time;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OptimizerError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct PricingParams {
    /// Price of any trip up to `flat_distance_km`, inclusive.
    pub flat_fee: f64,
    pub flat_distance_km: f64,
    /// Charged for every kilometer beyond `flat_distance_km`.
    pub per_km: f64,
    pub rush_hour_multiplier: f64,
    pub express_multiplier: f64,
    pub rush_hour: RushHourWindow,
}

/// Half-open window `[start_hour, end_hour)` in local time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RushHourWindow {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl RushHourWindow {
    pub fn contains(&self, time: Time) -> bool {
        let hour = time.hour();
        hour >= self.start_hour as i8 && hour < self.end_hour as i8
    }
}

impl Default for RushHourWindow {
    fn default() -> Self {
        RushHourWindow {
            start_hour: 16,
            end_hour: 20,
        }
    }
}

impl Default for PricingParams {
    fn default() -> Self {
        Self {
            flat_fee: 2000.0,
            flat_distance_km: 10.0,
            per_km: 200.0,
            rush_hour_multiplier: 1.5,
            express_multiplier: 2.0,
            rush_hour: RushHourWindow::default(),
        }
    }
}

impl PricingParams {
    pub fn validate(&self) -> Result<(), OptimizerError> {
        let rates = [
            ("flat_fee", self.flat_fee),
            ("flat_distance_km", self.flat_distance_km),
            ("per_km", self.per_km),
            ("rush_hour_multiplier", self.rush_hour_multiplier),
            ("express_multiplier", self.express_multiplier),
        ];

        if let Some((name, value)) = rates
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(OptimizerError::InvalidPricing(format!(
                "{name} must be a non-negative number, got {value}"
            )));
        }

        let RushHourWindow {
            start_hour,
            end_hour,
        } = self.rush_hour;
        if end_hour > 24 || start_hour >= end_hour {
            return Err(OptimizerError::InvalidPricing(format!(
                "rush hour window {start_hour}..{end_hour} is empty or outside 0..24"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn test_rush_hour_window_is_half_open() {
        let window = RushHourWindow::default();

        assert!(!window.contains(time(15, 59, 59, 0)));
        assert!(window.contains(time(16, 0, 0, 0)));
        assert!(window.contains(time(19, 59, 0, 0)));
        assert!(!window.contains(time(20, 0, 0, 0)));
    }

    #[test]
    fn test_default_params_are_valid() {
        assert!(PricingParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let params = PricingParams {
            per_km: -1.0,
            ..PricingParams::default()
        };

        assert!(matches!(
            params.validate(),
            Err(OptimizerError::InvalidPricing(_))
        ));
    }

    #[test]
    fn test_rejects_empty_window() {
        let params = PricingParams {
            rush_hour: RushHourWindow {
                start_hour: 20,
                end_hour: 16,
            },
            ..PricingParams::default()
        };

        assert!(params.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let params: PricingParams = serde_json::from_str(r#"{ "flat_fee": 50.0 }"#).unwrap();

        assert_eq!(params.flat_fee, 50.0);
        assert_eq!(params.per_km, 200.0);
    }
}
